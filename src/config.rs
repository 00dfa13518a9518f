//! Configuration module for the import reviser.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.reviser.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `REVISER_`; double underscores
//! separate nested levels:
//! - `REVISER_REMOVE_UNUSED=true` sets `remove_unused`
//! - `REVISER_LOCAL_PREFIXES=[github.com/acme]` sets `local_prefixes`
//! - `REVISER_THREADS=4` sets `threads`

use clap::ValueEnum;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the settings file looked up from the current directory upwards
pub const CONFIG_FILE_NAME: &str = ".reviser.toml";

/// Where revised files go
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Rewrite files in place, only when they changed
    #[default]
    File,
    /// Print every revised file to stdout
    Stdout,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Module path of the project; detected from go.mod when empty
    #[serde(default)]
    pub project_name: String,

    /// Import path prefixes that get their own groups, in output order
    #[serde(default)]
    pub local_prefixes: Vec<String>,

    /// Drop imports the file never references
    #[serde(default = "default_false")]
    pub remove_unused: bool,

    /// Alias `.../name/vN` imports as `name`
    #[serde(default = "default_false")]
    pub set_alias: bool,

    /// Run the formatter over the whole file
    #[serde(default = "default_false")]
    pub format: bool,

    #[serde(default)]
    pub output: OutputMode,

    /// Formatter program used when `format` is on
    #[serde(default = "default_gofmt_command")]
    pub gofmt_command: String,

    /// Number of worker threads
    #[serde(default = "default_threads")]
    pub threads: usize,
}

// Default value functions
fn default_false() -> bool {
    false
}
fn default_gofmt_command() -> String {
    "gofmt".to_string()
}
fn default_threads() -> usize {
    num_cpus::get()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            local_prefixes: Vec::new(),
            remove_unused: default_false(),
            set_alias: default_false(),
            format: default_false(),
            output: OutputMode::default(),
            gofmt_command: default_gofmt_command(),
            threads: default_threads(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, finding `.reviser.toml` by walking
    /// up from the current directory.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_config(&dir))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file. A missing file contributes nothing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path))
            // Double underscore (__) separates nested levels
            .merge(Env::prefixed("REVISER_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    /// Nearest `.reviser.toml` in `start` or its ancestors
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Project name, if one is configured
    pub fn project(&self) -> Option<&str> {
        let name = self.project_name.trim();
        (!name.is_empty()).then_some(name)
    }
}
