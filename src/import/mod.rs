//! Article import pipeline.
//!
//! Turns a folder of loose source assets into an article directory under the
//! content root:
//!
//! 1. **Validation** - [`ImportRequest::validate`] checks the raw inputs and
//!    derives a slug from the folder name when none is given
//! 2. **Placement** - [`PathResolver`] maps category, subcategory and slug to
//!    `<root>/<category>[/<subcategory>]/<slug>`
//! 3. **Copy** - every regular file is copied with its timestamps kept
//! 4. **Classification** - [`ResourceClassifier`] assigns files to roles
//! 5. **Metadata** - [`MetadataComposer`] writes `index.md` unless one exists
//!
//! [`ImportOrchestrator`] runs the steps in order and reports progress to an
//! [`ImportObserver`].
//!
//! # Example
//!
//! ```ignore
//! use aimp::import::{ImportInput, ImportOrchestrator, NoopObserver, PathResolver, Vocabulary};
//!
//! let resolver = PathResolver::new("public/content/posts", Vocabulary::standard());
//! let mut orchestrator = ImportOrchestrator::new(resolver);
//! let outcome = orchestrator.run(&input, &mut NoopObserver)?;
//! println!("imported into {}", outcome.target.display());
//! ```

mod category;
mod classify;
mod events;
mod layout;
mod metadata;
mod orchestrator;
mod request;
mod slug;

pub use category::{CATEGORIES, Category, Vocabulary};
pub use classify::{
    CLASSIFICATION_RULES, COVER_LOCALE_TOKENS, FLASHCARD_LOCALE_TOKENS, MINDMAP_LOCALE_TOKENS,
    ResourceClassifier, ResourceMap, ResourceRole, RoleRule,
};
pub use events::{ImportEvent, ImportObserver, LogLine, NoopObserver, RecordingObserver};
pub use layout::PathResolver;
pub use metadata::{
    ArticleFields, DEFAULT_DIFFICULTY, DEFAULT_READING_TIME, FrontMatter, MetadataComposer,
    has_resources_block,
};
pub use orchestrator::{
    DEFAULT_INDEX_FILE, ImportOrchestrator, ImportOutcome, ImportState, MetadataStatus,
};
pub use request::{ImportInput, ImportRequest, folder_name};
pub use slug::{derive_title, is_valid_slug, normalize_slug};
