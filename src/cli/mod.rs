//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;
pub mod progress;

/// aimp - Import article source folders into a static-site content tree
#[derive(Parser, Debug)]
#[command(name = "aimp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/aimp/config.toml + ./.aimp/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content root (overrides content.root from config)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        if self.machine {
            return OutputFormat::Json;
        }

        OutputFormat::Human
    }

    /// Whether errors and diagnostics should be machine-readable.
    #[must_use]
    pub fn machine_mode(&self) -> bool {
        self.output_format().is_machine_readable()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a folder of source assets as a new article
    Import(commands::import::ImportArgs),

    /// Preview the slug and title derived from folder names
    Slug(commands::slug::SlugArgs),

    /// Show the category vocabulary
    Categories(commands::categories::CategoriesArgs),

    /// List imported articles
    List(commands::list::ListArgs),

    /// Write a default configuration file
    Init(commands::init::InitArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
