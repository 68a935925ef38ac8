use crate::report::Severity;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The `[policy]` section: how a failed checksum is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Policy name shown in results.
    pub name: String,
    /// Severity of a failed check: "info", "warning" or "violation".
    pub severity: Severity,
    /// Message prefix of a failed check; the concrete reason is appended.
    pub message: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            name: "orcid-checksum".to_string(),
            severity: Severity::Violation,
            message: "ORCID identifier checksum does not match".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/orcid-check/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidCheckConfig {
    #[serde(default)]
    pub policy: PolicyConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("orcid-check")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse configuration from an existing file.
pub fn load_from(path: &Path) -> Result<OrcidCheckConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: OrcidCheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<OrcidCheckConfig> {
    if !path.exists() {
        let default_cfg = OrcidCheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<OrcidCheckConfig> {
    load_or_init_at(&config_path()?)
}
