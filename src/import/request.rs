//! Import inputs and their validation.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{AimpError, Result};

use super::slug::{is_valid_slug, normalize_slug};

/// Raw inputs as collected by a front end. Empty strings mean "not given".
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportInput {
    pub source: PathBuf,
    /// Category display label or code.
    pub category: String,
    pub subcategory: String,
    /// Left empty to derive from the source folder name.
    pub slug: String,
    pub title: String,
    pub author: String,
}

/// A validated import. Only constructed by [`ImportRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRequest {
    pub source: PathBuf,
    pub category: String,
    pub subcategory: Option<String>,
    pub slug: String,
    /// Whether `slug` was derived from the folder name.
    pub slug_derived: bool,
    pub title: String,
    pub author: String,
}

impl ImportRequest {
    /// Check every field; no filesystem mutation happens here.
    ///
    /// Category membership is not checked: that is the resolver's job.
    pub fn validate(input: &ImportInput) -> Result<Self> {
        if input.source.as_os_str().is_empty() || !input.source.is_dir() {
            return Err(AimpError::validation(
                "source",
                format!("{} is not an existing folder", input.source.display()),
            ));
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(AimpError::validation("category", "no category selected"));
        }

        let (slug, slug_derived) = match input.slug.trim() {
            "" => (normalize_slug(&folder_name(&input.source)), true),
            given => (given.to_string(), false),
        };
        if slug.is_empty() {
            return Err(AimpError::validation("slug", "slug is empty"));
        }
        if !is_valid_slug(&slug) {
            return Err(AimpError::validation(
                "slug",
                format!("'{slug}' may only contain lowercase letters, digits and hyphens"),
            ));
        }

        let title = input.title.trim();
        if title.is_empty() {
            return Err(AimpError::validation("title", "title is empty"));
        }

        let subcategory = match input.subcategory.trim() {
            "" => None,
            value => Some(check_subcategory(value)?.to_string()),
        };

        Ok(Self {
            source: input.source.clone(),
            category: category.to_string(),
            subcategory,
            slug,
            slug_derived,
            title: title.to_string(),
            author: input.author.trim().to_string(),
        })
    }
}

/// Final path component of `path`, lossily converted.
#[must_use]
pub fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A subcategory must be exactly one normal path component.
fn check_subcategory(value: &str) -> Result<&str> {
    let mut components = Path::new(value).components();
    let single_normal = matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none();
    if !single_normal || value.contains(['/', '\\']) {
        return Err(AimpError::validation(
            "subcategory",
            format!("'{value}' must be a single directory name"),
        ));
    }
    Ok(value)
}
