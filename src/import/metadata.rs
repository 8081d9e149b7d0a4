//! Front-matter document generation for imported articles.
//!
//! The rendered layout is consumed by the publishing site's front-matter
//! parser, so field order, section comments and the body skeleton are fixed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::{ResourceMap, ResourceRole};

/// Line that opens and closes the front-matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

pub const DEFAULT_DIFFICULTY: &str = "intermediate";
pub const DEFAULT_READING_TIME: u32 = 15;

/// Section comments inside the front matter.
const SECTION_BASICS: &str = "# 基本信息";
const SECTION_CLASSIFICATION: &str = "# 分类";
const SECTION_DESCRIPTION: &str = "# 内容描述";
const SECTION_RESOURCES: &str = "# 资源";
const SECTION_SEO: &str = "# SEO";

/// Body skeleton following the title heading.
const INTRO_HEADING: &str = "## 引言";
const INTRO_PLACEHOLDER: &str = "在这里编写文章内容...";

/// User-supplied fields of a new article.
#[derive(Debug, Clone)]
pub struct ArticleFields<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub category: &'a str,
    pub subcategory: Option<&'a str>,
    pub author: &'a str,
    pub date: NaiveDate,
}

/// Parsed front matter of an article's index document.
///
/// Everything except `title` is optional so hand-edited documents still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub resources: Option<ResourceMap>,
    #[serde(default)]
    pub keywords: Option<String>,
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl FrontMatter {
    /// Split a document into its front matter and body, then parse the
    /// front matter. Returns `Ok(None)` when the document has no block.
    pub fn parse(document: &str) -> crate::Result<Option<(Self, String)>> {
        let Some((yaml, body)) = split_front_matter(document) else {
            return Ok(None);
        };
        let front_matter = serde_yaml::from_str(yaml)?;
        Ok(Some((front_matter, body.to_string())))
    }
}

/// Locate the delimited block at the top of `document`.
fn split_front_matter(document: &str) -> Option<(&str, &str)> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let rest = document
        .strip_prefix(FRONT_MATTER_DELIMITER)?
        .strip_prefix('\n')
        .or_else(|| document.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Whether the `resources:` block is emitted for a map: more than one entry,
/// or a single entry that is not the cover.
#[must_use]
pub fn has_resources_block(resources: &ResourceMap) -> bool {
    resources.len() > 1 || (resources.len() == 1 && !resources.contains(ResourceRole::Cover))
}

/// Renders the index document for a new article.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataComposer;

impl MetadataComposer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the full document: front matter followed by the body skeleton.
    #[must_use]
    pub fn compose(&self, fields: &ArticleFields<'_>, resources: &ResourceMap) -> String {
        let date = fields.date.format("%Y-%m-%d");
        let mut out = String::with_capacity(512);

        out.push_str(FRONT_MATTER_DELIMITER);
        out.push('\n');
        out.push_str(SECTION_BASICS);
        out.push('\n');
        out.push_str(&format!("title: {}\n", fields.title));
        out.push_str(&format!("slug: {}\n", fields.slug));
        out.push_str(&format!("date: {date}\n"));
        out.push_str(&format!("author: {}\n\n", fields.author));

        out.push_str(SECTION_CLASSIFICATION);
        out.push('\n');
        out.push_str(&format!("category: {}\n", fields.category));
        if let Some(subcategory) = fields.subcategory.filter(|s| !s.is_empty()) {
            out.push_str(&format!("subcategory: {subcategory}\n"));
        }
        out.push_str("tags: []\n\n");

        out.push_str(SECTION_DESCRIPTION);
        out.push('\n');
        out.push_str(&format!("excerpt: {}\n", fields.title));
        out.push_str(&format!("difficulty: {DEFAULT_DIFFICULTY}\n"));
        out.push_str(&format!("readingTime: {DEFAULT_READING_TIME}\n\n"));

        out.push_str(SECTION_RESOURCES);
        out.push('\n');
        if let Some(cover) = resources.get(ResourceRole::Cover) {
            out.push_str(&format!("cover: {cover}\n"));
        }
        if has_resources_block(resources) {
            out.push_str("resources:\n");
            for (role, file) in resources.iter().filter(|(r, _)| *r != ResourceRole::Cover) {
                out.push_str(&format!("  {role}: {file}\n"));
            }
        }

        out.push('\n');
        out.push_str(SECTION_SEO);
        out.push('\n');
        out.push_str("keywords: \"\"\n");
        out.push_str(FRONT_MATTER_DELIMITER);
        out.push_str("\n\n");

        out.push_str(&format!("# {}\n\n", fields.title));
        out.push_str(INTRO_HEADING);
        out.push_str("\n\n");
        out.push_str(INTRO_PLACEHOLDER);
        out.push_str("\n\n");
        out
    }
}
