use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Season;

/// Errors that can occur while loading season data
#[derive(Debug, Error)]
pub enum SeasonError {
    #[error("failed to read season file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse season file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a season's week records from TOML text
///
/// Participant names are taken as-is; nothing checks them against the
/// roster. Events naming unknown participants are silently ignored by the
/// calculator downstream.
pub fn parse_season(raw: &str) -> Result<Season, SeasonError> {
    Ok(toml::from_str(raw)?)
}

/// Load a season's week records from a TOML data file
pub fn load_season<P: AsRef<Path>>(path: P) -> Result<Season, SeasonError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let season = parse_season(&raw)?;
    tracing::debug!(
        "loaded {} weeks from {}",
        season.weeks.len(),
        path.as_ref().display()
    );
    Ok(season)
}
