//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod categories;
pub mod completions;
pub mod config;
pub mod import;
pub mod init;
pub mod list;
pub mod slug;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Import(args) => import::run(ctx, args),
        Commands::Slug(args) => slug::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Init(args) => init::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
