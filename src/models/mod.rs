// Model exports
pub mod domain;

pub use domain::{
    BeamCeremonyEvent, Couple, OddsMatrix, Roster, RosterError, Season, TruthBoothEvent, Week,
};
