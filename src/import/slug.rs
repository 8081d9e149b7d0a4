//! Slug derivation from raw folder labels.
//!
//! Folder names arrive in whatever shape the author saved them: a bracketed
//! series tag in front, full-width punctuation, mixed case, CJK text. The
//! normalizer keeps Unicode word characters (CJK ideographs survive as-is,
//! there is no transliteration) and only guarantees that the result is safe
//! as a single URL path segment.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// =============================================================================
// TOKEN TABLES
// =============================================================================

/// Opening brackets that may start a leading tag segment, e.g. `【设计模式】`.
pub const PREFIX_OPEN_BRACKETS: &[char] = &['[', '【'];

/// Closing brackets that end a leading tag segment.
pub const PREFIX_CLOSE_BRACKETS: &[char] = &[']', '】'];

/// Colon variants rewritten to a hyphen.
pub const COLON_VARIANTS: &[char] = &[':', '：'];

fn char_class(chars: &[char]) -> String {
    let body: String = chars.iter().map(|c| regex::escape(&c.to_string())).collect();
    format!("[{body}]")
}

/// Leading `[...]` / `【...】` segment, shortest match.
static PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^{}.*?{}",
        char_class(PREFIX_OPEN_BRACKETS),
        char_class(PREFIX_CLOSE_BRACKETS)
    ))
    .unwrap()
});

static COLON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&char_class(COLON_VARIANTS)).unwrap());

/// Anything that is not a word character, whitespace or hyphen.
static DISALLOWED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATOR_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Full-slug shape accepted by the importer: word characters and hyphens,
/// no ASCII uppercase.
static SLUG_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w-]+$").unwrap());

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Turn a raw label into a URL-safe slug.
///
/// Steps, each applied to the previous output:
/// 1. NFC-normalize the label
/// 2. strip a leading bracketed tag (`[..]` or `【..】`)
/// 3. rewrite colon variants to `-`
/// 4. drop everything but word characters, whitespace and `-`
/// 5. trim, lowercase ASCII
/// 6. collapse runs of `-`/whitespace into a single `-`
///
/// The result can be empty when the label has nothing usable in it; callers
/// must treat that as invalid input.
#[must_use]
pub fn normalize_slug(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    let without_prefix = PREFIX_REGEX.replace(&composed, "");
    let without_colons = COLON_REGEX.replace_all(&without_prefix, "-");
    let cleaned = DISALLOWED_REGEX.replace_all(&without_colons, "");
    let lowered = cleaned.trim().to_ascii_lowercase();
    SEPARATOR_RUN_REGEX.replace_all(&lowered, "-").into_owned()
}

/// Derive a display title from a folder name: the leading bracketed tag is
/// dropped and the rest is trimmed. Returns `None` when nothing remains.
#[must_use]
pub fn derive_title(folder_name: &str) -> Option<String> {
    let composed: String = folder_name.nfc().collect();
    let title = PREFIX_REGEX.replace(&composed, "");
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Check that a slug can be used as the leaf directory of an article.
///
/// Every non-empty output of [`normalize_slug`] passes this check.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_SHAPE_REGEX.is_match(slug) && !slug.chars().any(|c| c.is_ascii_uppercase())
}
