//! Import sequencing.
//!
//! Runs one import from raw inputs to a populated article directory:
//!
//! ```text
//! Idle → Validating → Resolving → CreatingDirectory → Copying → Classifying
//!      → ComposingMetadata | SkippingMetadata → Done
//! ```
//!
//! Any step may end in `Failed`. Steps are not transactional: a failure while
//! copying leaves the files copied so far in place. Every step is safe to
//! repeat, so re-running the same import after fixing the cause is the
//! recovery path.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{AimpError, Result};
use crate::utils::fs::{
    copy_preserving_times, ensure_dir, is_plain_file_name, list_files, same_entry,
};

use super::classify::{ResourceClassifier, ResourceMap};
use super::events::{ImportEvent, ImportObserver, LogLine};
use super::layout::PathResolver;
use super::metadata::{ArticleFields, MetadataComposer};
use super::request::{ImportInput, ImportRequest};

/// Default name of the article's index document.
pub const DEFAULT_INDEX_FILE: &str = "index.md";

/// Where an import currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportState {
    Idle,
    Validating,
    Resolving,
    CreatingDirectory,
    Copying,
    Classifying,
    ComposingMetadata,
    SkippingMetadata,
    Done,
    Failed,
}

impl fmt::Display for ImportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Resolving => "resolving",
            Self::CreatingDirectory => "creating_directory",
            Self::Copying => "copying",
            Self::Classifying => "classifying",
            Self::ComposingMetadata => "composing_metadata",
            Self::SkippingMetadata => "skipping_metadata",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What happened to the index document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetadataStatus {
    Created { path: PathBuf },
    /// An index document was already there (or arrived with the copied files).
    Skipped { path: PathBuf },
    /// Dry run: the document that would have been written.
    Preview { path: PathBuf, document: String },
}

/// Result of a successful import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub target: PathBuf,
    pub request: ImportRequest,
    /// Names of the files copied (or, on a dry run, that would be copied).
    pub copied: Vec<String>,
    pub resources: ResourceMap,
    pub metadata: MetadataStatus,
    pub dry_run: bool,
}

/// Sequences validation, placement, copy and metadata generation.
#[derive(Debug, Clone)]
pub struct ImportOrchestrator {
    resolver: PathResolver,
    classifier: ResourceClassifier,
    composer: MetadataComposer,
    index_file: String,
    dry_run: bool,
    date: Option<NaiveDate>,
    state: ImportState,
}

impl ImportOrchestrator {
    pub fn new(resolver: PathResolver) -> Self {
        Self {
            resolver,
            classifier: ResourceClassifier::new(),
            composer: MetadataComposer::new(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            dry_run: false,
            date: None,
            state: ImportState::Idle,
        }
    }

    /// Name of the index document looked for and written in the target.
    #[must_use]
    pub fn with_index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Plan the import without touching the filesystem.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fix the date written into new documents (defaults to today).
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// State reached by the most recent run.
    #[must_use]
    pub const fn state(&self) -> ImportState {
        self.state
    }

    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Run one import. Each call starts again from `Idle`.
    pub fn run(
        &mut self,
        input: &ImportInput,
        observer: &mut dyn ImportObserver,
    ) -> Result<ImportOutcome> {
        self.state = ImportState::Idle;
        emit(
            observer,
            ImportEvent::Started {
                source: input.source.clone(),
                dry_run: self.dry_run,
            },
        );

        match self.execute(input, observer) {
            Ok(outcome) => {
                self.transition(ImportState::Done);
                info!(
                    target_dir = %outcome.target.display(),
                    copied = outcome.copied.len(),
                    dry_run = outcome.dry_run,
                    "import finished"
                );
                emit(
                    observer,
                    ImportEvent::Finished {
                        target: outcome.target.clone(),
                        copied: outcome.copied.len(),
                    },
                );
                Ok(outcome)
            }
            Err(err) => {
                let failed_in = self.state;
                self.transition(ImportState::Failed);
                warn!(state = %failed_in, error = %err, "import failed");
                emit(
                    observer,
                    ImportEvent::Failed {
                        message: err.to_string(),
                    },
                );
                Err(err)
            }
        }
    }

    fn execute(
        &mut self,
        input: &ImportInput,
        observer: &mut dyn ImportObserver,
    ) -> Result<ImportOutcome> {
        self.transition(ImportState::Validating);
        if !is_plain_file_name(&self.index_file) {
            return Err(AimpError::validation(
                "index_file",
                format!("'{}' is not a plain file name", self.index_file),
            ));
        }
        let request = ImportRequest::validate(input)?;
        if request.slug_derived {
            emit(
                observer,
                ImportEvent::SlugDerived {
                    slug: request.slug.clone(),
                },
            );
        }

        self.transition(ImportState::Resolving);
        let category = self.resolver.category(&request.category)?;
        let target = self.resolver.resolve(
            category.code,
            request.subcategory.as_deref().unwrap_or_default(),
            &request.slug,
        )?;
        emit(
            observer,
            ImportEvent::TargetResolved {
                target: target.clone(),
            },
        );

        self.transition(ImportState::CreatingDirectory);
        if self.dry_run {
            emit(
                observer,
                ImportEvent::DirectoryPlanned {
                    target: target.clone(),
                },
            );
        } else {
            ensure_dir(&target)
                .map_err(|err| AimpError::filesystem("create directory", &target, err))?;
            emit(
                observer,
                ImportEvent::DirectoryCreated {
                    target: target.clone(),
                },
            );
        }

        self.transition(ImportState::Copying);
        let copied = self.copy_files(&request.source, &target, observer)?;

        self.transition(ImportState::Classifying);
        let resources = self.classifier.classify(&copied);
        emit(
            observer,
            ImportEvent::ResourcesDetected {
                roles: resources.roles(),
            },
        );

        let index_path = target.join(&self.index_file);
        let index_present =
            index_path.exists() || (self.dry_run && copied.contains(&self.index_file));
        let metadata = if index_present {
            self.transition(ImportState::SkippingMetadata);
            emit(
                observer,
                ImportEvent::MetadataSkipped {
                    path: index_path.clone(),
                },
            );
            MetadataStatus::Skipped { path: index_path }
        } else {
            self.transition(ImportState::ComposingMetadata);
            let date = self.date.unwrap_or_else(|| Local::now().date_naive());
            let fields = ArticleFields {
                title: &request.title,
                slug: &request.slug,
                category: category.code,
                subcategory: request.subcategory.as_deref(),
                author: &request.author,
                date,
            };
            let document = self.composer.compose(&fields, &resources);
            if self.dry_run {
                emit(
                    observer,
                    ImportEvent::MetadataPreviewed {
                        path: index_path.clone(),
                    },
                );
                MetadataStatus::Preview {
                    path: index_path,
                    document,
                }
            } else {
                std::fs::write(&index_path, document).map_err(|source| {
                    AimpError::MetadataWrite {
                        path: index_path.clone(),
                        source,
                    }
                })?;
                emit(
                    observer,
                    ImportEvent::MetadataCreated {
                        path: index_path.clone(),
                    },
                );
                MetadataStatus::Created { path: index_path }
            }
        };

        Ok(ImportOutcome {
            target,
            request,
            copied,
            resources,
            metadata,
            dry_run: self.dry_run,
        })
    }

    /// Copy every regular file in `source` into `target`; stops at the first
    /// failure. A source folder that already is the target is refused.
    fn copy_files(
        &self,
        source: &Path,
        target: &Path,
        observer: &mut dyn ImportObserver,
    ) -> Result<Vec<String>> {
        if same_entry(source, target) {
            return Err(AimpError::filesystem(
                "copy",
                source,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source folder is the article's target directory",
                ),
            ));
        }
        let files =
            list_files(source).map_err(|err| AimpError::filesystem("read folder", source, err))?;
        let total = files.len();
        emit(observer, ImportEvent::CopyStarted { total });

        let mut copied = Vec::with_capacity(total);
        for (index, file) in files.into_iter().enumerate() {
            if self.dry_run {
                emit(
                    observer,
                    ImportEvent::FilePlanned {
                        name: file.name.clone(),
                    },
                );
            } else {
                let destination = target.join(&file.file_name);
                copy_preserving_times(&file.path, &destination)
                    .map_err(|err| AimpError::filesystem("copy", &file.path, err))?;
                debug!(file = %file.name, "copied");
                emit(
                    observer,
                    ImportEvent::FileCopied {
                        name: file.name.clone(),
                        index: index + 1,
                        total,
                    },
                );
            }
            copied.push(file.name);
        }

        emit(
            observer,
            ImportEvent::CopyFinished {
                count: copied.len(),
            },
        );
        Ok(copied)
    }

    fn transition(&mut self, next: ImportState) {
        debug!(from = %self.state, to = %next, "import state");
        self.state = next;
    }
}

fn emit(observer: &mut dyn ImportObserver, event: ImportEvent) {
    observer.observe(&LogLine::now(event));
}
