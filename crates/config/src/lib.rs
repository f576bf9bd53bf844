pub mod cli;
pub mod schema;
pub mod settings;

pub use cli::Cli;
pub use schema::{ColorConfig, GraphConfig, HwmonConfig, MetricsConfig, TooltipConfig};
pub use settings::Settings;

use hwmon_core::{HwmonError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `HwmonConfig::default()` if
/// the file doesn't exist so the monitor always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<HwmonConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(HwmonConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| HwmonError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse the contents of a config file.
pub fn parse(raw: &str) -> Result<HwmonConfig> {
    toml::from_str(raw).map_err(|e| HwmonError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("hwmon").join("hwmon.toml")
}

/// Resolve the startup [`Settings`] for `cli`.
///
/// An explicit `--config` path must exist; the default path may be absent.
pub fn from_cli(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(HwmonError::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        Some(path) => load(path)?,
        None => load(default_path())?,
    };
    Settings::resolve(file, cli)
}
