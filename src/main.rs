//! aimp - Article importer
//!
//! Copies a folder of article assets into the site's content tree and writes
//! the article's index document.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aimp::Result;
use aimp::app::AppContext;
use aimp::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.machine_mode() {
                // Machine mode: structured JSON error on stdout
                let mut error_json =
                    serde_json::to_value(e.to_structured()).unwrap_or_default();
                if let Some(map) = error_json.as_object_mut() {
                    map.insert("error".to_string(), serde_json::Value::Bool(true));
                }
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
                let hint = e.to_structured().suggestion;
                if !hint.is_empty() {
                    eprintln!("Hint: {hint}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init(args) = &cli.command {
        return aimp::cli::commands::init::run_without_context(cli.machine_mode(), args);
    }
    let ctx = AppContext::from_cli(cli)?;
    aimp::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,aimp=info",
        1 => "info,aimp=debug",
        2 => "debug,aimp=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.machine_mode() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_ansi(!cli.plain)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
