use serde::Deserialize;
use std::path::PathBuf;
use directories::{BaseDirs, ProjectDirs};
use anyhow::Result;
use std::fs;

/// Fallback icon reference used whenever no icon can be resolved.
pub const DEFAULT_ICON: &str = "images/icon.png";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_desktop_dirs")]
    pub desktop_dirs: Vec<PathBuf>,
    #[serde(default = "default_icon_dirs")]
    pub icon_dirs: Vec<PathBuf>,
    #[serde(default = "default_fallback_icon")]
    pub fallback_icon: String,
}

fn default_desktop_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/usr/share/applications")];
    if let Some(base_dirs) = BaseDirs::new() {
        dirs.push(base_dirs.data_dir().join("applications"));
    }
    dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/applications"));
    dirs
}

fn default_icon_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/usr/share/icons/hicolor")];
    if let Some(base_dirs) = BaseDirs::new() {
        dirs.push(base_dirs.data_dir().join("icons"));
    }
    dirs.push(PathBuf::from("/usr/share/pixmaps"));
    dirs
}

fn default_fallback_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            desktop_dirs: default_desktop_dirs(),
            icon_dirs: default_icon_dirs(),
            fallback_icon: default_fallback_icon(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let proj_dirs = ProjectDirs::from("org", "appfinder", "appfinder");
    let config_path = if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
