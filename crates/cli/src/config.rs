// Settings file loading
//
// The rosters live in an optional TOML file; a missing default file just
// means the built-in crew. An explicitly requested file must exist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use tela_core::domain::Settings;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    rosters: RosterConfig,
}

#[derive(Debug, Deserialize)]
struct RosterConfig {
    #[serde(default = "default_art_finishers")]
    art_finishers: Vec<String>,
    #[serde(default = "default_delivery_people")]
    delivery_people: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            art_finishers: default_art_finishers(),
            delivery_people: default_delivery_people(),
        }
    }
}

fn default_art_finishers() -> Vec<String> {
    Settings::default().art_finishers
}

fn default_delivery_people() -> Vec<String> {
    Settings::default().delivery_people
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (default_config_path()?, false),
    };

    let file_config: FileConfig = config::Config::builder()
        .add_source(config::File::from(path.as_path()).required(required))
        .build()
        .with_context(|| format!("Failed to read settings from {}", path.display()))?
        .try_deserialize()
        .context("Malformed settings file")?;

    Ok(Settings::new(
        file_config.rosters.art_finishers,
        file_config.rosters.delivery_people,
    ))
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "tela")
        .context("Could not determine a home directory for this user")
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn default_log_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}
