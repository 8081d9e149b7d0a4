//! aimp init - Write a default configuration file

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::config::{Config, PROJECT_DIR};
use crate::error::Result;

const DEFAULT_CONFIG: &str = r#"# aimp configuration

[content]
# Root of the content tree; relative paths resolve against the working directory
root = "public/content/posts"
# Index document written into each article directory
index_file = "index.md"

[article]
# Author used when --author is not given
default_author = "CodeMaster"
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Write the per-user config (~/.config/aimp/config.toml) instead of ./.aimp/config.toml
    #[arg(long)]
    pub global: bool,

    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<()> {
    run_in(ctx.robot_mode, &ctx.cwd, args)
}

/// Entry point used before any config is loaded, so a broken config file can
/// still be replaced with `init --force`.
pub fn run_without_context(robot_mode: bool, args: &InitArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    run_in(robot_mode, &cwd, args)
}

fn run_in(robot_mode: bool, cwd: &Path, args: &InitArgs) -> Result<()> {
    let target = target_path(cwd, args.global)?;
    let written = write_default_config(&target, args.force)?;

    if robot_mode {
        return emit_json(&robot_ok(serde_json::json!({
            "path": target.display().to_string(),
            "written": written,
        })));
    }

    if written {
        println!("{} Wrote {}", "✓".green().bold(), target.display());
    } else {
        println!(
            "{} Already initialized at {}",
            "!".yellow(),
            target.display()
        );
        println!("  Use --force to overwrite");
    }
    Ok(())
}

fn target_path(cwd: &Path, global: bool) -> Result<PathBuf> {
    if global {
        Config::global_path()
    } else {
        Ok(Config::project_path(&cwd.join(PROJECT_DIR)))
    }
}

/// Write the default config unless one exists. Returns whether it wrote.
fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}
