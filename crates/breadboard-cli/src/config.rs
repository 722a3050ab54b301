use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use breadboard_core::fs::write_atomic;
use breadboard_core::{Density, Layout, WidgetKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreadboardConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub dashboard: DashboardSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    /// Fixed anchor for the dataset; the current time when unset
    pub reference_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default)]
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    #[serde(default = "default_widgets")]
    pub widgets: Vec<WidgetKind>,
    #[serde(default)]
    pub density: Density,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Layout::default().into()
    }
}

fn default_widgets() -> Vec<WidgetKind> {
    Layout::default().widgets
}

impl From<Layout> for DashboardSection {
    fn from(layout: Layout) -> Self {
        Self {
            widgets: layout.widgets,
            density: layout.density,
        }
    }
}

impl DashboardSection {
    pub fn layout(&self) -> Layout {
        Layout {
            widgets: self.widgets.clone(),
            density: self.density,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BreadboardConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, or the defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<BreadboardConfig> {
    if path.exists() {
        read_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        Ok(BreadboardConfig::default())
    }
}

pub fn write_config(path: &Path, config: &BreadboardConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    write_atomic(path, &contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("breadboard"));
        }
    }
    Ok(home_dir()?.join(".config").join("breadboard"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BreadboardConfig::default());
        assert_eq!(config.dashboard.layout(), Layout::default());
        assert_eq!(config.api.latency_ms, 0);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = BreadboardConfig::default();
        config.data.reference_date = Some("2025-06-15".to_string());
        config.ui.timezone = Some("Europe/Berlin".to_string());
        config.dashboard.widgets = vec![WidgetKind::CashFlow, WidgetKind::Clients];
        config.dashboard.density = Density::Compact;

        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nlatency_ms = 250\n\n[dashboard]\ndensity = \"compact\"\n")
            .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.api.latency_ms, 250);
        assert_eq!(config.dashboard.density, Density::Compact);
        assert_eq!(config.dashboard.widgets, Layout::default().widgets);
        assert!(config.data.reference_date.is_none());
    }

    #[test]
    fn test_unknown_widget_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard]\nwidgets = [\"weather\"]\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
