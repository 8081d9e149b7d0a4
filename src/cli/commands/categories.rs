//! aimp categories - Show the category vocabulary

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::catalog::Catalog;
use crate::cli::output::{HumanLayout, emit_formatted, tsv};
use crate::error::Result;
use crate::import::Vocabulary;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Skip scanning the content root for subcategories in use
    #[arg(long)]
    pub no_scan: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub label: &'static str,
    pub code: &'static str,
    /// Subcategories found under the content root.
    pub subcategories: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let mut discovered = if args.no_scan {
        Default::default()
    } else {
        Catalog::new(&ctx.content_root, &ctx.config.content.index_file).subcategories()?
    };

    let rows: Vec<CategoryRow> = Vocabulary::standard()
        .entries()
        .iter()
        .map(|category| CategoryRow {
            label: category.label,
            code: category.code,
            subcategories: discovered
                .remove(category.code)
                .map(|subs| subs.into_iter().collect())
                .unwrap_or_default(),
        })
        .collect();

    emit_formatted(
        &rows,
        ctx.output_format,
        |rows| {
            let mut layout = HumanLayout::new();
            layout.title("Categories");
            for row in rows {
                let mut line = format!("{} {}", format!("{:<16}", row.code).cyan(), row.label);
                if !row.subcategories.is_empty() {
                    let subs = format!("({})", row.subcategories.join(", "));
                    line.push_str(&format!("  {}", subs.dimmed()));
                }
                layout.push_line(line);
            }
            layout.build()
        },
        |rows| {
            rows.iter()
                .map(|row| format!("{} {}", row.code, row.label))
                .collect::<Vec<_>>()
                .join("\n")
        },
        |rows| {
            tsv(&["code", "label", "subcategories"], rows, |row| {
                vec![
                    row.code.to_string(),
                    row.label.to_string(),
                    row.subcategories.join(","),
                ]
            })
        },
    )
}
