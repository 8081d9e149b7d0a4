//! Fixed category vocabulary.
//!
//! Display labels map to directory-safe codes. The table is compiled in and
//! never changes at runtime; the publishing site routes on these codes.

use serde::Serialize;

/// A top-level content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Label shown to authors.
    pub label: &'static str,
    /// Directory name under the content root.
    pub code: &'static str,
}

/// The closed set of importable categories, in display order.
pub const CATEGORIES: [Category; 10] = [
    Category { label: "AI 人工智能", code: "ai" },
    Category { label: "Coding 编程技术", code: "coding" },
    Category { label: "GAME 游戏", code: "game" },
    Category { label: "MKT 市场营销", code: "mkt" },
    Category { label: "创业", code: "startup" },
    Category { label: "个人成长", code: "personal-growth" },
    Category { label: "管理", code: "management" },
    Category { label: "金融", code: "finance" },
    Category { label: "社交", code: "social" },
    Category { label: "时政", code: "politics" },
];

/// Read-only lookup over a category table.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    entries: &'static [Category],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

impl Vocabulary {
    /// The built-in vocabulary.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: &CATEGORIES,
        }
    }

    /// Resolve a display label, or a code, to its category.
    ///
    /// Labels are matched exactly after trimming; codes case-insensitively.
    #[must_use]
    pub fn lookup(&self, label_or_code: &str) -> Option<&'static Category> {
        let needle = label_or_code.trim();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|c| c.label == needle)
            .or_else(|| self.entries.iter().find(|c| c.code.eq_ignore_ascii_case(needle)))
    }

    /// Whether `code` is one of the vocabulary codes.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|c| c.code == code)
    }

    /// All entries in display order.
    #[must_use]
    pub const fn entries(&self) -> &'static [Category] {
        self.entries
    }
}
