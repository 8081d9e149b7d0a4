//! aimp list - List imported articles

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::catalog::{ArticleEntry, Catalog, CatalogFilter};
use crate::cli::output::{HumanLayout, emit_formatted, tsv};
use crate::error::{AimpError, Result};
use crate::import::Vocabulary;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category label or code
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by subcategory
    #[arg(long, short = 's')]
    pub subcategory: Option<String>,

    /// Maximum number of articles to show
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,

    /// Offset for pagination
    #[arg(long, default_value = "0")]
    pub offset: usize,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let filter = build_filter(args)?;
    let catalog = Catalog::new(&ctx.content_root, &ctx.config.content.index_file);
    let articles: Vec<ArticleEntry> = catalog
        .list(&filter)?
        .into_iter()
        .skip(args.offset)
        .take(args.limit)
        .collect();

    emit_formatted(
        &articles,
        ctx.output_format,
        |articles| {
            let mut layout = HumanLayout::new();
            if articles.is_empty() {
                layout.push_line(format!(
                    "No articles under {}",
                    ctx.content_root.display()
                ));
                return layout.build();
            }
            layout.title(&format!("Articles ({})", articles.len()));
            for article in articles {
                let date = article.date.as_deref().unwrap_or("----------");
                let place = match &article.subcategory {
                    Some(sub) => format!("{}/{}", article.category, sub),
                    None => article.category.clone(),
                };
                layout.push_line(format!(
                    "{} {} {} {}",
                    date.dimmed(),
                    place.cyan(),
                    article.title.bold(),
                    format!("({})", article.slug).dimmed()
                ));
            }
            layout.build()
        },
        |articles| {
            articles
                .iter()
                .map(|a| a.relative.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
        |articles| {
            tsv(
                &["date", "category", "subcategory", "slug", "title"],
                articles,
                |a| {
                    vec![
                        a.date.clone().unwrap_or_default(),
                        a.category.clone(),
                        a.subcategory.clone().unwrap_or_default(),
                        a.slug.clone(),
                        a.title.clone(),
                    ]
                },
            )
        },
    )
}

fn build_filter(args: &ListArgs) -> Result<CatalogFilter> {
    let category = match args.category.as_deref() {
        Some(label) => Some(
            Vocabulary::standard()
                .lookup(label)
                .ok_or_else(|| AimpError::UnknownCategory {
                    label: label.to_string(),
                })?
                .code
                .to_string(),
        ),
        None => None,
    };
    let subcategory = args
        .subcategory
        .as_deref()
        .map(str::trim)
        .filter(|sub| !sub.is_empty())
        .map(str::to_string);
    Ok(CatalogFilter {
        category,
        subcategory,
    })
}
