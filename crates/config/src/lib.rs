pub mod schema;
pub mod watcher;

pub use schema::{DashboardConfig, ThemeConfig, ViewConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use osshare_core::{Result, ShareError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashboardConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashboardConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ShareError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| ShareError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("osshare").join("osshare.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use osshare_core::ChartKind;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("osshare.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("osshare.toml");
        assert_eq!(load(&path).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[view]\nchart_type = \"bar\"\n");
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.view.chart_type, ChartKind::Bar);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[view\nchart_type = ");
        assert!(matches!(load(&path), Err(ShareError::Config(_))));
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        assert!(default_path().ends_with("osshare/osshare.toml"));
    }
}
