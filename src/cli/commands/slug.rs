//! aimp slug - Preview the slug and title derived from folder names

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_formatted, tsv};
use crate::error::Result;
use crate::import::{derive_title, is_valid_slug, normalize_slug};

#[derive(Args, Debug)]
pub struct SlugArgs {
    /// Folder names or titles to convert
    #[arg(required = true)]
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SlugPreview {
    pub label: String,
    pub slug: String,
    pub title: Option<String>,
    pub valid: bool,
}

impl SlugPreview {
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        let slug = normalize_slug(label);
        Self {
            label: label.to_string(),
            valid: is_valid_slug(&slug),
            title: derive_title(label),
            slug,
        }
    }
}

pub fn run(ctx: &AppContext, args: &SlugArgs) -> Result<()> {
    let previews: Vec<SlugPreview> = args
        .labels
        .iter()
        .map(|label| SlugPreview::for_label(label))
        .collect();

    emit_formatted(
        &previews,
        ctx.output_format,
        |previews| {
            let mut layout = HumanLayout::new();
            for preview in previews {
                let slug = if preview.valid {
                    preview.slug.green().to_string()
                } else {
                    format!("{} (no usable slug)", "✗".red())
                };
                layout
                    .section(&preview.label)
                    .kv("Slug", &slug)
                    .kv("Title", preview.title.as_deref().unwrap_or("-"))
                    .blank();
            }
            layout.build().trim_end().to_string()
        },
        |previews| {
            previews
                .iter()
                .map(|p| p.slug.clone())
                .collect::<Vec<_>>()
                .join("\n")
        },
        |previews| {
            tsv(&["label", "slug", "title", "valid"], previews, |p| {
                vec![
                    p.label.clone(),
                    p.slug.clone(),
                    p.title.clone().unwrap_or_default(),
                    p.valid.to_string(),
                ]
            })
        },
    )
}
