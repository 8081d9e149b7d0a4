//! Catalog of imported articles.
//!
//! Walks the content root the way the publishing site does: a directory that
//! holds an index document is an article and is not descended into; any
//! other directory is a grouping level (category or subcategory).

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{AimpError, Result};
use crate::import::{FrontMatter, ResourceMap};

/// One article found under the content root.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleEntry {
    /// Article directory.
    pub path: PathBuf,
    /// Directory relative to the content root.
    pub relative: PathBuf,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub cover: Option<String>,
    pub resources: ResourceMap,
}

/// Restricts a listing to one category and optionally one subcategory.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches(&self, entry: &ArticleEntry) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| entry.category == *category);
        let subcategory_ok = self
            .subcategory
            .as_ref()
            .is_none_or(|sub| entry.subcategory.as_deref() == Some(sub.as_str()));
        category_ok && subcategory_ok
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    index_file: String,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every readable article, newest first. A missing root is an empty
    /// catalog.
    pub fn scan(&self) -> Result<Vec<ArticleEntry>> {
        let mut entries = Vec::new();
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "content root does not exist");
            return Ok(entries);
        }

        let mut walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        while let Some(item) = walker.next() {
            let item = item.map_err(|err| {
                let path = err.path().unwrap_or(&self.root).to_path_buf();
                AimpError::filesystem("walk", path, err.into())
            })?;
            if !item.file_type().is_dir() {
                continue;
            }
            let index = item.path().join(&self.index_file);
            if !index.is_file() {
                continue;
            }
            walker.skip_current_dir();

            if let Some(entry) = self.read_entry(item.path(), &index) {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.relative.cmp(&b.relative)));
        Ok(entries)
    }

    /// Articles that pass `filter`, newest first.
    pub fn list(&self, filter: &CatalogFilter) -> Result<Vec<ArticleEntry>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect())
    }

    /// Subcategories in use, keyed by category code.
    pub fn subcategories(&self) -> Result<BTreeMap<String, BTreeSet<String>>> {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in self.scan()? {
            let subs = map.entry(entry.category).or_default();
            if let Some(sub) = entry.subcategory {
                subs.insert(sub);
            }
        }
        Ok(map)
    }

    fn read_entry(&self, dir: &Path, index: &Path) -> Option<ArticleEntry> {
        let raw = match std::fs::read_to_string(index) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %index.display(), error = %err, "skipping unreadable article");
                return None;
            }
        };
        let front_matter = match FrontMatter::parse(&raw) {
            Ok(Some((front_matter, _body))) => front_matter,
            Ok(None) => {
                warn!(path = %index.display(), "skipping article without front matter");
                return None;
            }
            Err(err) => {
                warn!(
                    path = %index.display(),
                    error = %err,
                    "skipping article with invalid front matter"
                );
                return None;
            }
        };

        let relative = dir.strip_prefix(&self.root).unwrap_or(dir).to_path_buf();
        let segments: Vec<String> = relative
            .iter()
            .map(|part| part.to_string_lossy().into_owned())
            .collect();
        let (path_category, path_subcategory) = match segments.as_slice() {
            [category, _slug] => (Some(category.clone()), None),
            [category, subcategory, _slug] => (Some(category.clone()), Some(subcategory.clone())),
            _ => (segments.first().cloned(), None),
        };
        let dir_name = segments.last().cloned().unwrap_or_default();

        Some(ArticleEntry {
            path: dir.to_path_buf(),
            slug: front_matter.slug.unwrap_or(dir_name),
            title: front_matter.title,
            category: front_matter
                .category
                .or(path_category)
                .unwrap_or_default(),
            subcategory: front_matter.subcategory.or(path_subcategory),
            date: front_matter.date,
            author: front_matter.author,
            cover: front_matter.cover,
            resources: front_matter.resources.unwrap_or_default(),
            relative,
        })
    }
}
