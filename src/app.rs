//! Shared state handed to every command.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, PROJECT_DIR};
use crate::error::Result;
use crate::import::{ImportOrchestrator, PathResolver, Vocabulary};

pub struct AppContext {
    pub cwd: PathBuf,
    pub config: Config,
    /// File that `init` writes to and `config` reports.
    pub config_path: PathBuf,
    /// Absolute content root after `--root` and config resolution.
    pub content_root: PathBuf,
    pub output_format: OutputFormat,
    pub robot_mode: bool,
    pub quiet: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::from_cli_in(cli, &cwd)
    }

    /// Build the context as if started from `cwd`.
    pub fn from_cli_in(cli: &Cli, cwd: &Path) -> Result<Self> {
        let project_dir = cwd.join(PROJECT_DIR);
        let config = Config::load(cli.config.as_deref(), &project_dir)?;

        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::project_path(&project_dir),
        };

        let content_root = match &cli.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => config.content_root(cwd),
        };

        let output_format = cli.output_format();
        Ok(Self {
            cwd: cwd.to_path_buf(),
            config,
            config_path,
            content_root,
            robot_mode: output_format.is_machine_readable(),
            output_format,
            quiet: cli.quiet,
            verbosity: cli.verbose,
        })
    }

    #[must_use]
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.content_root, Vocabulary::standard())
    }

    /// An orchestrator wired to the configured root and index file name.
    #[must_use]
    pub fn orchestrator(&self) -> ImportOrchestrator {
        ImportOrchestrator::new(self.resolver()).with_index_file(&self.config.content.index_file)
    }
}
