//! Import progress reporting for the aimp CLI
//!
//! Renders the importer's log lines in a way that suits the output context:
//! - TTY mode: styled `[HH:MM:SS]` lines plus a progress bar while copying
//! - Non-TTY mode: plain `[HH:MM:SS]` lines
//! - Robot mode: one JSON event per line
//! - Quiet mode: nothing
//!
//! Everything goes to stderr so stdout stays reserved for the command result.

use std::io::IsTerminal;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::import::{ImportEvent, ImportObserver, LogLine};

// ============================================================================
// Progress Mode Detection
// ============================================================================

/// Progress output mode based on terminal capabilities and user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// TTY mode: styled lines and a copy progress bar
    Tty,
    /// Non-TTY mode: simple line-by-line output to stderr
    NonTty,
    /// Robot mode: JSON events to stderr
    Robot,
    /// Quiet mode: no progress output
    Quiet,
}

impl ProgressMode {
    /// Detect the appropriate progress mode based on environment
    #[must_use]
    pub fn detect(robot_mode: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if robot_mode {
            Self::Robot
        } else if std::io::stderr().is_terminal() {
            Self::Tty
        } else {
            Self::NonTty
        }
    }

    /// Check if this mode supports animated output
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Tty)
    }

    /// Check if this mode produces output
    #[must_use]
    pub const fn has_output(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

// ============================================================================
// Console Observer
// ============================================================================

/// [`ImportObserver`] that writes the import log to the terminal.
pub struct ConsoleObserver {
    mode: ProgressMode,
    bar: Option<ProgressBar>,
}

impl ConsoleObserver {
    #[must_use]
    pub fn new(robot_mode: bool, quiet: bool) -> Self {
        Self::with_mode(ProgressMode::detect(robot_mode, quiet))
    }

    #[must_use]
    pub const fn with_mode(mode: ProgressMode) -> Self {
        Self { mode, bar: None }
    }

    #[must_use]
    pub const fn mode(&self) -> ProgressMode {
        self.mode
    }

    fn start_bar(&mut self, total: usize) {
        if !self.mode.is_animated() || total == 0 {
            return;
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Copying [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        self.bar = Some(bar);
    }

    fn finish_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn print(&self, line: &LogLine) {
        let rendered = match self.mode {
            ProgressMode::Tty => styled(line),
            _ => line.to_string(),
        };
        match &self.bar {
            Some(bar) => bar.println(rendered),
            None => eprintln!("{rendered}"),
        }
    }
}

impl ImportObserver for ConsoleObserver {
    fn observe(&mut self, line: &LogLine) {
        match self.mode {
            ProgressMode::Quiet => {}
            ProgressMode::Robot => {
                if let Ok(json) = serde_json::to_string(line) {
                    eprintln!("{json}");
                }
            }
            ProgressMode::Tty | ProgressMode::NonTty => match &line.event {
                ImportEvent::CopyStarted { total } => {
                    self.print(line);
                    self.start_bar(*total);
                }
                ImportEvent::FileCopied { name, .. } if self.bar.is_some() => {
                    if let Some(bar) = &self.bar {
                        bar.set_message(name.clone());
                        bar.inc(1);
                    }
                }
                ImportEvent::CopyFinished { .. } | ImportEvent::Failed { .. } => {
                    self.finish_bar();
                    self.print(line);
                }
                _ => self.print(line),
            },
        }
    }
}

impl Drop for ConsoleObserver {
    fn drop(&mut self) {
        self.finish_bar();
    }
}

fn styled(line: &LogLine) -> String {
    let stamp = style(line.at.format("[%H:%M:%S]").to_string()).dim();
    let message = match &line.event {
        ImportEvent::Failed { .. } => style(line.event.to_string()).red().bold(),
        ImportEvent::Finished { .. } | ImportEvent::MetadataCreated { .. } => {
            style(line.event.to_string()).green()
        }
        ImportEvent::MetadataSkipped { .. } => style(line.event.to_string()).yellow(),
        _ => style(line.event.to_string()),
    };
    format!("{stamp} {message}")
}
