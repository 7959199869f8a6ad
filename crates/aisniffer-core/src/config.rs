use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/aisniffer/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnifferConfig {
    /// Directory generated wordlists are saved to.
    pub outdir: PathBuf,
    /// Non-targeted list size offered when prompting.
    pub default_size: usize,
    /// Word budget for keyword-targeted lists.
    pub max_words: usize,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("wordlists"),
            default_size: 5000,
            max_words: 2000,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("aisniffer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SnifferConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] with an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<SnifferConfig> {
    if !path.exists() {
        let default_cfg = SnifferConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: SnifferConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
