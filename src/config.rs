use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AimpError, Result};
use crate::import::DEFAULT_INDEX_FILE;
use crate::utils::fs::is_plain_file_name;

/// Directory (relative to the working directory) holding project settings.
pub const PROJECT_DIR: &str = ".aimp";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub article: ArticleConfig,
}

impl Config {
    /// Load settings: defaults, then the global file, then the project file,
    /// then environment overrides. An explicit path (or `AIMP_CONFIG`)
    /// replaces both file layers.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("AIMP_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(AimpError::MissingConfig(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_dir)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would place files outside an article directory.
    fn validate(&self) -> Result<()> {
        if !is_plain_file_name(&self.content.index_file) {
            return Err(AimpError::Config(format!(
                "content.index_file must be a single file name, got '{}'",
                self.content.index_file
            )));
        }
        Ok(())
    }

    /// Location of the per-user config file.
    pub fn global_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| AimpError::MissingConfig("config directory not found".to_string()))?
            .join("aimp")
            .join(CONFIG_FILE))
    }

    /// Location of the project config file inside `project_dir`.
    #[must_use]
    pub fn project_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE)
    }

    /// Render as TOML, the format the config files use.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| AimpError::Config(format!("serialize config: {err}")))
    }

    /// The content root, resolved against `cwd` when relative.
    #[must_use]
    pub fn content_root(&self, cwd: &Path) -> PathBuf {
        let root = Path::new(&self.content.root);
        if root.is_absolute() {
            root.to_path_buf()
        } else {
            cwd.join(root)
        }
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = Self::global_path()?;
        Self::load_patch(&path)
    }

    fn load_project(project_dir: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&Self::project_path(project_dir))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| AimpError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| AimpError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.content {
            self.content.merge(patch);
        }
        if let Some(patch) = patch.article {
            self.article.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(env_string);
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = non_empty(lookup("AIMP_CONTENT_ROOT")) {
            self.content.root = value;
        }
        if let Some(value) = non_empty(lookup("AIMP_INDEX_FILE")) {
            self.content.index_file = value;
        }
        if let Some(value) = non_empty(lookup("AIMP_DEFAULT_AUTHOR")) {
            self.article.default_author = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root of the content tree; relative paths resolve against the working
    /// directory.
    #[serde(default)]
    pub root: String,
    /// Name of each article's index document.
    #[serde(default)]
    pub index_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: "public/content/posts".to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl ContentConfig {
    fn merge(&mut self, patch: ContentPatch) {
        if let Some(value) = patch.root {
            self.root = value;
        }
        if let Some(value) = patch.index_file {
            self.index_file = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleConfig {
    #[serde(default)]
    pub default_author: String,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            default_author: "CodeMaster".to_string(),
        }
    }
}

impl ArticleConfig {
    fn merge(&mut self, patch: ArticlePatch) {
        if let Some(value) = patch.default_author {
            self.default_author = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub content: Option<ContentPatch>,
    pub article: Option<ArticlePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ContentPatch {
    pub root: Option<String>,
    pub index_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ArticlePatch {
    pub default_author: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
