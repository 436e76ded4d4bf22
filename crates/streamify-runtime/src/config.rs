use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use streamify_types::PageSizeOptions;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STREAMIFY_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.streamify (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("STREAMIFY_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("streamify"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".streamify"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_page_size() -> usize {
    PageSizeOptions::DEFAULT[0]
}

fn default_stream_count() -> usize {
    100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub page_size_options: PageSizeOptions,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: PageSizeOptions::default(),
            default_page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_stream_count")]
    pub stream_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            stream_count: default_stream_count(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    /// The default page size must be one of the offered options
    pub fn validate(&self) -> Result<()> {
        if !self
            .table
            .page_size_options
            .contains(self.table.default_page_size)
        {
            return Err(Error::Config(format!(
                "default_page_size {} is not one of {:?}",
                self.table.default_page_size,
                self.table.page_size_options.as_slice()
            )));
        }
        Ok(())
    }
}
