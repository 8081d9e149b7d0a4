//! Filename-based resource classification.
//!
//! Loose files in an article folder are sorted into at most one file per
//! [`ResourceRole`]. Matching is driven entirely by the tables below so the
//! heuristics can be audited (and extended with tokens for other locales)
//! without touching the matching code.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Semantic role of a resource file.
///
/// Declaration order is the order roles are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceRole {
    Cover,
    Video,
    Audio,
    Slides,
    Mindmap,
    Flashcards,
}

impl ResourceRole {
    /// Key used in front matter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Slides => "slides",
            Self::Mindmap => "mindmap",
            Self::Flashcards => "flashcards",
        }
    }
}

impl fmt::Display for ResourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RULE TABLES
// =============================================================================

/// Locale tokens meaning "cover image".
pub const COVER_LOCALE_TOKENS: &[&str] = &["封面"];

/// Locale tokens meaning "mind map".
pub const MINDMAP_LOCALE_TOKENS: &[&str] = &["思维导图"];

/// Locale tokens meaning "flashcards".
pub const FLASHCARD_LOCALE_TOKENS: &[&str] = &[];

/// How a single role is recognized. A file matches when any criterion hits.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: ResourceRole,
    /// Substrings matched against the lowercased file name.
    pub keywords: &'static [&'static str],
    /// Substrings matched against the file name as-is.
    pub locale_tokens: &'static [&'static str],
    /// Extensions (lowercase, without dot).
    pub extensions: &'static [&'static str],
}

impl RoleRule {
    fn matches(&self, name: &str, lowered: &str, extension: Option<&str>) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
            || self.locale_tokens.iter().any(|t| name.contains(t))
            || extension.is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Rules in priority order; the first rule that matches a file claims it.
pub const CLASSIFICATION_RULES: [RoleRule; 6] = [
    RoleRule {
        role: ResourceRole::Cover,
        keywords: &["cover"],
        locale_tokens: COVER_LOCALE_TOKENS,
        extensions: &[],
    },
    RoleRule {
        role: ResourceRole::Video,
        keywords: &[],
        locale_tokens: &[],
        extensions: &["mp4", "mov", "avi"],
    },
    RoleRule {
        role: ResourceRole::Audio,
        keywords: &[],
        locale_tokens: &[],
        extensions: &["mp3", "m4a", "wav"],
    },
    RoleRule {
        role: ResourceRole::Slides,
        keywords: &[],
        locale_tokens: &[],
        extensions: &["pdf", "ppt", "pptx"],
    },
    RoleRule {
        role: ResourceRole::Mindmap,
        keywords: &["mindmap"],
        locale_tokens: MINDMAP_LOCALE_TOKENS,
        extensions: &[],
    },
    RoleRule {
        role: ResourceRole::Flashcards,
        keywords: &["flashcard"],
        locale_tokens: FLASHCARD_LOCALE_TOKENS,
        extensions: &["csv"],
    },
];

// =============================================================================
// RESOURCE MAP
// =============================================================================

/// At most one file name per role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceMap {
    entries: BTreeMap<ResourceRole, String>,
}

impl ResourceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `file` to `role`, replacing any earlier file.
    pub fn insert(&mut self, role: ResourceRole, file: impl Into<String>) -> Option<String> {
        self.entries.insert(role, file.into())
    }

    #[must_use]
    pub fn get(&self, role: ResourceRole) -> Option<&str> {
        self.entries.get(&role).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, role: ResourceRole) -> bool {
        self.entries.contains_key(&role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceRole, &str)> {
        self.entries.iter().map(|(role, file)| (*role, file.as_str()))
    }

    /// Roles present, in role order.
    #[must_use]
    pub fn roles(&self) -> Vec<ResourceRole> {
        self.entries.keys().copied().collect()
    }
}

impl FromIterator<(ResourceRole, String)> for ResourceMap {
    fn from_iter<T: IntoIterator<Item = (ResourceRole, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Maps file names onto resource roles using a rule table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceClassifier {
    rules: &'static [RoleRule],
}

impl Default for ResourceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceClassifier {
    /// Classifier over [`CLASSIFICATION_RULES`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: &CLASSIFICATION_RULES,
        }
    }

    /// Classifier over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: &'static [RoleRule]) -> Self {
        Self { rules }
    }

    /// Role claimed by a single file name, if any.
    #[must_use]
    pub fn role_for(&self, name: &str) -> Option<ResourceRole> {
        let lowered = name.to_lowercase();
        let extension = Path::new(&lowered)
            .extension()
            .and_then(|ext| ext.to_str());
        self.rules
            .iter()
            .find(|rule| rule.matches(name, &lowered, extension))
            .map(|rule| rule.role)
    }

    /// Classify file names in order. A later file replaces an earlier one
    /// holding the same role.
    pub fn classify<I, S>(&self, names: I) -> ResourceMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = ResourceMap::new();
        for name in names {
            let name = name.as_ref();
            if let Some(role) = self.role_for(name) {
                map.insert(role, name);
            }
        }
        map
    }
}
