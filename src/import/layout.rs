//! Target directory resolution.

use std::path::{Path, PathBuf};

use crate::error::{AimpError, Result};

use super::category::{Category, Vocabulary};

/// Computes `<root>/<category>[/<subcategory>]/<slug>`.
///
/// Pure path arithmetic; nothing is touched on disk.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    vocabulary: Vocabulary,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, vocabulary: Vocabulary) -> Self {
        Self {
            root: root.into(),
            vocabulary,
        }
    }

    /// Content root every target lives under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Look up a category label (or code).
    pub fn category(&self, label: &str) -> Result<&'static Category> {
        self.vocabulary
            .lookup(label)
            .ok_or_else(|| AimpError::UnknownCategory {
                label: label.to_string(),
            })
    }

    /// Resolve the article directory.
    ///
    /// An empty subcategory is skipped; any other value is used verbatim as a
    /// path segment, so callers are expected to have vetted it.
    pub fn resolve(&self, category_label: &str, subcategory: &str, slug: &str) -> Result<PathBuf> {
        let category = self.category(category_label)?;
        let mut target = self.root.join(category.code);
        if !subcategory.is_empty() {
            target.push(subcategory);
        }
        target.push(slug);
        Ok(target)
    }
}
