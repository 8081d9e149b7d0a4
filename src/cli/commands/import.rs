//! aimp import - Import a folder of source assets as a new article

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_formatted, tsv};
use crate::cli::progress::ConsoleObserver;
use crate::error::Result;
use crate::import::{ImportInput, ImportOutcome, MetadataStatus, derive_title, folder_name};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Folder holding the article's source files
    pub source: PathBuf,

    /// Category label or code (see `aimp categories`)
    #[arg(long, short = 'c')]
    pub category: String,

    /// Optional subcategory directory
    #[arg(long, short = 's', default_value = "")]
    pub subcategory: String,

    /// Slug for the article directory (default: derived from the folder name)
    #[arg(long, default_value = "")]
    pub slug: String,

    /// Article title (default: folder name without its bracketed prefix)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Author (default: article.default_author from config)
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Show what would happen without touching the filesystem
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let input = build_input(ctx, args);
    let mut observer = ConsoleObserver::new(ctx.robot_mode, ctx.quiet);
    let mut orchestrator = ctx.orchestrator().with_dry_run(args.dry_run);

    let outcome = orchestrator.run(&input, &mut observer)?;
    drop(observer);

    emit_formatted(
        &outcome,
        ctx.output_format,
        human_summary,
        plain_summary,
        |outcome| {
            let rows: Vec<(String, String)> = outcome
                .copied
                .iter()
                .map(|name| (name.clone(), role_of(outcome, name)))
                .collect();
            tsv(&["file", "role"], &rows, |(name, role)| {
                vec![name.clone(), role.clone()]
            })
        },
    )
}

fn build_input(ctx: &AppContext, args: &ImportArgs) -> ImportInput {
    let title = args
        .title
        .clone()
        .or_else(|| derive_title(&folder_name(&args.source)))
        .unwrap_or_default();
    let author = args
        .author
        .clone()
        .unwrap_or_else(|| ctx.config.article.default_author.clone());

    ImportInput {
        source: args.source.clone(),
        category: args.category.clone(),
        subcategory: args.subcategory.clone(),
        slug: args.slug.clone(),
        title,
        author,
    }
}

fn role_of(outcome: &ImportOutcome, name: &str) -> String {
    outcome
        .resources
        .iter()
        .find(|(_, file)| *file == name)
        .map(|(role, _)| role.to_string())
        .unwrap_or_default()
}

fn human_summary(outcome: &ImportOutcome) -> String {
    let mut layout = HumanLayout::new();
    if outcome.dry_run {
        layout.title("Dry run: nothing was written");
    } else {
        layout.title(&format!("{} Imported {}", "✓".green(), outcome.request.title));
    }
    layout
        .kv("Target", &outcome.target.display().to_string())
        .kv("Slug", &outcome.request.slug)
        .kv("Files", &outcome.copied.len().to_string());

    if !outcome.resources.is_empty() {
        layout.blank().section("Resources");
        for (role, file) in outcome.resources.iter() {
            layout.bullet(&format!("{role}: {file}"));
        }
    }

    layout.blank();
    match &outcome.metadata {
        MetadataStatus::Created { path } => {
            layout.kv("Metadata", &format!("created {}", path.display()));
        }
        MetadataStatus::Skipped { path } => {
            layout.kv("Metadata", &format!("kept existing {}", path.display()));
        }
        MetadataStatus::Preview { path, document } => {
            layout
                .kv("Metadata", &format!("would create {}", path.display()))
                .blank()
                .push_line(document.trim_end().to_string());
        }
    }
    layout.build()
}

fn plain_summary(outcome: &ImportOutcome) -> String {
    let metadata = match &outcome.metadata {
        MetadataStatus::Created { .. } => "created",
        MetadataStatus::Skipped { .. } => "skipped",
        MetadataStatus::Preview { .. } => "preview",
    };
    let mut lines = vec![
        format!("target: {}", outcome.target.display()),
        format!("slug: {}", outcome.request.slug),
        format!("files: {}", outcome.copied.len()),
    ];
    lines.extend(
        outcome
            .resources
            .iter()
            .map(|(role, file)| format!("{role}: {file}")),
    );
    lines.push(format!("metadata: {metadata}"));
    lines.join("\n")
}
