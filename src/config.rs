use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub participants: ParticipantSettings,
    #[serde(default)]
    pub season: SeasonSettings,
}

/// The season's participant roster, in declared order
///
/// Declared order here is what the matrix rows and columns follow.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantSettings {
    pub expected_couples: usize,
    pub boys: Vec<String>,
    pub girls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSettings {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    "data/season.toml".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AYTO_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with AYTO_)
            // e.g., AYTO__SEASON__DATA_FILE -> season.data_file
            .add_source(
                Environment::with_prefix("AYTO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AYTO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
