//! aimp config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_json, robot_ok};
use crate::error::{AimpError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show a single key (e.g. content.root)
    pub key: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if let Some(key) = &args.key {
        let value = lookup(ctx, key)?;
        if ctx.robot_mode {
            return emit_json(&robot_ok(serde_json::json!({ "key": key, "value": value })));
        }
        println!("{value}");
        return Ok(());
    }

    if ctx.robot_mode {
        return emit_json(&robot_ok(serde_json::json!({
            "config_path": ctx.config_path.display().to_string(),
            "content_root": ctx.content_root.display().to_string(),
            "config": ctx.config,
        })));
    }

    let mut layout = HumanLayout::new();
    layout
        .kv("Config file", &ctx.config_path.display().to_string())
        .kv("Content root", &ctx.content_root.display().to_string())
        .blank()
        .push_line(ctx.config.to_toml()?.trim_end().to_string());
    println!("{}", layout.build());
    Ok(())
}

fn lookup(ctx: &AppContext, key: &str) -> Result<String> {
    let config = &ctx.config;
    let value = match key {
        "content.root" => config.content.root.clone(),
        "content.index_file" => config.content.index_file.clone(),
        "article.default_author" => config.article.default_author.clone(),
        _ => return Err(AimpError::NotFound(format!("config key {key}"))),
    };
    Ok(value)
}
