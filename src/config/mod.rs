use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::AreaUnit;

fn default_unit() -> String {
    AreaUnit::Acres.tag().to_string()
}
fn default_verbose() -> bool {
    false
}
fn default_json() -> bool {
    false
}

/// Settings read from `fieldarea.toml`
///
/// `unit` stays a raw tag so an unknown value falls back to square meters
/// the same way a command-line tag does.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            verbose: default_verbose(),
            json: default_json(),
        }
    }
}

impl FileConfig {
    /// First parseable config found in the search paths
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn area_unit(&self) -> AreaUnit {
        AreaUnit::from_tag(&self.unit)
    }
}

/// Effective settings: command-line values layered over the file config
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub unit: AreaUnit,
    /// The requested tag, when it was not a known unit
    pub unknown_unit: Option<String>,
    pub verbose: bool,
    pub json: bool,
}

impl Settings {
    pub fn resolve(
        cli_unit: Option<&str>,
        cli_verbose: bool,
        cli_json: bool,
        file: &FileConfig,
    ) -> Self {
        let tag = cli_unit.unwrap_or(file.unit.as_str());
        let parsed = AreaUnit::parse_tag(tag);

        Self {
            unit: parsed.unwrap_or_default(),
            unknown_unit: parsed.is_none().then(|| tag.to_string()),
            verbose: cli_verbose || file.verbose,
            json: cli_json || file.json,
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    config_paths_in(dirs::config_dir(), dirs::home_dir())
}

/// Working dir first, then every candidate config dir, then a home dotfile.
/// `~/.config` is only added when it differs from the platform config dir.
fn config_paths_in(config_dir: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("fieldarea.toml"),
        PathBuf::from(".fieldarea.toml"),
    ];

    let xdg_fallback = home.as_ref().map(|h| h.join(".config"));
    for dir in config_dir.into_iter().chain(xdg_fallback) {
        let candidate = dir.join("fieldarea").join("config.toml");
        if !paths.contains(&candidate) {
            paths.push(candidate);
        }
    }

    if let Some(home) = home {
        paths.push(home.join(".fieldarea.toml"));
    }

    paths
}
