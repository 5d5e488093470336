//! Configuration file support for the lexes CLI.
//!
//! Supplies alternate *default* [`lexes_par::Options`] values from an
//! optional TOML file; it introduces no translation behavior of its own.
//! Search order: the current directory, then `~/.config/lexes/`, then
//! the platform config directory.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{LexesCliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexes.toml";

fn default_field() -> String {
    "plain_text".to_string()
}

fn default_retrieve() -> Vec<String> {
    vec!["case_name".to_string(), "date_filed".to_string()]
}

fn default_true() -> bool {
    true
}

/// On-disk configuration, one field per [`lexes_par::Options`] member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_field")]
    pub field: String,

    #[serde(default = "default_retrieve")]
    pub retrieve: Vec<String>,

    #[serde(default = "default_true")]
    pub insert_operators: bool,

    #[serde(default)]
    pub highlight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field: default_field(),
            retrieve: default_retrieve(),
            insert_operators: true,
            highlight: false,
        }
    }
}

impl Config {
    /// Load configuration from the default search path, falling back
    /// to [`Config::default`] if nothing is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexesCliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| LexesCliError::Config(format!("failed to parse configuration: {e}")))
    }

    /// Build the [`lexes_par::Options`] this config describes.
    pub fn to_options(&self) -> lexes_par::Options {
        lexes_par::Options {
            field: self.field.clone(),
            retrieve: self.retrieve.clone(),
            insert_operators: self.insert_operators,
            highlight: self.highlight,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lexes").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexes").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
