use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when the configured participant lists cannot form a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("inconsistent number of participants: {boys} boys and {girls} girls for {expected} couples")]
    InconsistentCounts {
        boys: usize,
        girls: usize,
        expected: usize,
    },
}

/// The fixed participant sets for one season, in declared order
///
/// Declared order is significant: it drives matrix row/column order and the
/// ordinal indexing used throughout the calculator.
#[derive(Debug, Clone)]
pub struct Roster {
    boys: Vec<String>,
    girls: Vec<String>,
}

impl Roster {
    /// Build a roster from the configured name lists
    ///
    /// The only validated invariant in the system: both lists must have
    /// exactly `expected_couples` entries.
    pub fn new(
        boys: Vec<String>,
        girls: Vec<String>,
        expected_couples: usize,
    ) -> Result<Self, RosterError> {
        if boys.len() != girls.len() || girls.len() != expected_couples {
            return Err(RosterError::InconsistentCounts {
                boys: boys.len(),
                girls: girls.len(),
                expected: expected_couples,
            });
        }
        Ok(Self { boys, girls })
    }

    pub fn boys(&self) -> &[String] {
        &self.boys
    }

    pub fn girls(&self) -> &[String] {
        &self.girls
    }

    pub fn couple_count(&self) -> usize {
        self.boys.len()
    }

    /// Ordinal of a boy in declared order
    #[inline]
    pub fn boy_index(&self, name: &str) -> Option<usize> {
        self.boys.iter().position(|b| b == name)
    }

    /// Ordinal of a girl in declared order
    #[inline]
    pub fn girl_index(&self, name: &str) -> Option<usize> {
        self.girls.iter().position(|g| g == name)
    }
}

/// An ordered boy/girl pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    pub boy: String,
    pub girl: String,
}

/// Ground truth revealed for exactly one couple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthBoothEvent {
    pub boy: String,
    pub girl: String,
    pub is_perfect_match: bool,
}

/// A weekly full-pairing proposal with its aggregate beam count
///
/// `beam_count` states how many of the proposed couples are true perfect
/// matches, collectively, without saying which ones. The couples list is
/// assumed to pair each boy exactly once; this is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamCeremonyEvent {
    pub beam_count: u32,
    pub couples: Vec<Couple>,
}

/// One week of the season: zero or more booth reveals and one ceremony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub number: u32,
    #[serde(default)]
    pub booths: Vec<TruthBoothEvent>,
    pub ceremony: BeamCeremonyEvent,
}

/// A season's full event history, in week order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub weeks: Vec<Week>,
}

impl Season {
    /// Flatten the week records into the two event lists the calculator
    /// consumes, preserving week order
    pub fn events(&self) -> (Vec<BeamCeremonyEvent>, Vec<TruthBoothEvent>) {
        let ceremonies = self.weeks.iter().map(|w| w.ceremony.clone()).collect();
        let booths = self
            .weeks
            .iter()
            .flat_map(|w| w.booths.iter().cloned())
            .collect();
        (ceremonies, booths)
    }
}

/// Dense boy-by-girl odds grid in declared order
///
/// Cells are a heuristic likelihood estimate, not a normalized probability
/// distribution; degenerate input can leave negative, NaN, or infinite
/// values in place.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsMatrix {
    boys: Vec<String>,
    girls: Vec<String>,
    cells: Vec<f64>,
}

impl OddsMatrix {
    /// Create a zero-filled matrix over the roster's declared order
    pub fn zeroed(roster: &Roster) -> Self {
        Self {
            boys: roster.boys().to_vec(),
            girls: roster.girls().to_vec(),
            cells: vec![0.0; roster.boys().len() * roster.girls().len()],
        }
    }

    pub fn boys(&self) -> &[String] {
        &self.boys
    }

    pub fn girls(&self) -> &[String] {
        &self.girls
    }

    #[inline]
    fn idx(&self, boy_idx: usize, girl_idx: usize) -> usize {
        boy_idx * self.girls.len() + girl_idx
    }

    /// Cell value by ordinal pair
    #[inline]
    pub fn get(&self, boy_idx: usize, girl_idx: usize) -> f64 {
        self.cells[self.idx(boy_idx, girl_idx)]
    }

    /// Cell value by participant names, `None` if either is not on the roster
    pub fn odds(&self, boy: &str, girl: &str) -> Option<f64> {
        let boy_idx = self.boys.iter().position(|b| b == boy)?;
        let girl_idx = self.girls.iter().position(|g| g == girl)?;
        Some(self.get(boy_idx, girl_idx))
    }

    /// Overwrite a cell
    #[inline]
    pub fn set(&mut self, boy_idx: usize, girl_idx: usize, value: f64) {
        let i = self.idx(boy_idx, girl_idx);
        self.cells[i] = value;
    }

    /// Add to a cell
    #[inline]
    pub fn add(&mut self, boy_idx: usize, girl_idx: usize, value: f64) {
        let i = self.idx(boy_idx, girl_idx);
        self.cells[i] += value;
    }

    /// One boy's full row of cells, in girl declared order
    pub fn row(&self, boy_idx: usize) -> &[f64] {
        let start = boy_idx * self.girls.len();
        &self.cells[start..start + self.girls.len()]
    }
}
