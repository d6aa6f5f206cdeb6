//! AYTO Odds - Perfect-match odds calculator for the Are You The One pairing game
//!
//! This library computes, for each boy/girl couple in a season, a heuristic
//! likelihood that the couple is a secret perfect match, from truth booth
//! reveals and weekly beam ceremony counts.

pub mod config;
pub mod core;
pub mod models;
pub mod presenter;
pub mod season;

// Re-export commonly used types
pub use crate::core::OddsCalculator;
pub use crate::models::{
    BeamCeremonyEvent, Couple, OddsMatrix, Roster, RosterError, Season, TruthBoothEvent, Week,
};
pub use crate::presenter::{matrix_rows, render_table, MatrixRow};
pub use crate::season::{load_season, parse_season, SeasonError};
