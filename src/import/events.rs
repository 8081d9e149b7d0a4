//! Progress events emitted while an import runs.
//!
//! Front ends receive every event synchronously through an
//! [`ImportObserver`] and decide how to render it; the `Display` impls give
//! the stock one-line messages.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use itertools::Itertools;
use serde::Serialize;

use super::classify::ResourceRole;

/// One step of an import, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ImportEvent {
    Started { source: PathBuf, dry_run: bool },
    SlugDerived { slug: String },
    TargetResolved { target: PathBuf },
    DirectoryCreated { target: PathBuf },
    DirectoryPlanned { target: PathBuf },
    CopyStarted { total: usize },
    FileCopied { name: String, index: usize, total: usize },
    FilePlanned { name: String },
    CopyFinished { count: usize },
    ResourcesDetected { roles: Vec<ResourceRole> },
    MetadataCreated { path: PathBuf },
    MetadataSkipped { path: PathBuf },
    MetadataPreviewed { path: PathBuf },
    Finished { target: PathBuf, copied: usize },
    Failed { message: String },
}

impl fmt::Display for ImportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { source, dry_run } => {
                let mode = if *dry_run { " (dry run)" } else { "" };
                write!(f, "Starting import from {}{mode}", source.display())
            }
            Self::SlugDerived { slug } => write!(f, "Derived slug: {slug}"),
            Self::TargetResolved { target } => write!(f, "Target directory: {}", target.display()),
            Self::DirectoryCreated { target } => {
                write!(f, "Created target directory: {}", target.display())
            }
            Self::DirectoryPlanned { target } => {
                write!(f, "Would create target directory: {}", target.display())
            }
            Self::CopyStarted { total } => write!(f, "Copying {total} file(s)"),
            Self::FileCopied { name, .. } => write!(f, "  copied {name}"),
            Self::FilePlanned { name } => write!(f, "  would copy {name}"),
            Self::CopyFinished { count } => write!(f, "Copied {count} file(s)"),
            Self::ResourcesDetected { roles } if roles.is_empty() => {
                write!(f, "No resources detected")
            }
            Self::ResourcesDetected { roles } => {
                write!(f, "Detected resources: {}", roles.iter().join(", "))
            }
            Self::MetadataCreated { path } => write!(f, "Created {}", path.display()),
            Self::MetadataSkipped { path } => {
                write!(f, "{} already exists, skipping metadata", path.display())
            }
            Self::MetadataPreviewed { path } => write!(f, "Would create {}", path.display()),
            Self::Finished { target, copied } => write!(
                f,
                "Import finished: {copied} file(s) in {}",
                target.display()
            ),
            Self::Failed { message } => write!(f, "Import failed: {message}"),
        }
    }
}

/// A timestamped event.
#[derive(Debug, Clone, Serialize)]
pub struct LogLine {
    pub at: DateTime<Local>,
    #[serde(flatten)]
    pub event: ImportEvent,
}

impl LogLine {
    #[must_use]
    pub fn now(event: ImportEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.event)
    }
}

/// Receives log lines as an import progresses.
pub trait ImportObserver {
    fn observe(&mut self, line: &LogLine);
}

impl<F> ImportObserver for F
where
    F: FnMut(&LogLine),
{
    fn observe(&mut self, line: &LogLine) {
        self(line);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ImportObserver for NoopObserver {
    fn observe(&mut self, _line: &LogLine) {}
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub lines: Vec<LogLine>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events without timestamps.
    #[must_use]
    pub fn events(&self) -> Vec<ImportEvent> {
        self.lines.iter().map(|line| line.event.clone()).collect()
    }
}

impl ImportObserver for RecordingObserver {
    fn observe(&mut self, line: &LogLine) {
        self.lines.push(line.clone());
    }
}
