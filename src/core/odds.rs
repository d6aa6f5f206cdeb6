use crate::models::{BeamCeremonyEvent, OddsMatrix, Roster, TruthBoothEvent};

/// Computes the per-couple perfect-match odds matrix from a season's
/// truth booth and beam ceremony history
///
/// # Algorithm
/// 1. Every cell starts at 0.
/// 2. Booth reveals overwrite their cell with 1 (match) or 0 (no match).
/// 3. Each ceremony splits its couples into booth-known and unknown; a
///    confirmed match consumes one of the ceremony's beams, a confirmed
///    non-match removes one candidate slot. Every unknown couple then gains
///    `beams / possible_beams / ceremony_count`.
///
/// The result is an additive likelihood estimate, not a normalized
/// posterior: rows and columns need not sum to 1.
#[derive(Debug, Clone)]
pub struct OddsCalculator {
    roster: Roster,
}

impl OddsCalculator {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    /// Compute the full odds matrix for the given event history
    ///
    /// Pure function of its inputs; never fails. Malformed input is not
    /// validated: conflicting booths resolve last-write-wins, and an
    /// over-constrained ceremony (`possible_beams` driven to 0 with
    /// couples still unknown) divides through to NaN or infinity in the
    /// affected cells.
    pub fn calculate(
        &self,
        ceremonies: &[BeamCeremonyEvent],
        booths: &[TruthBoothEvent],
    ) -> OddsMatrix {
        let mut matrix = OddsMatrix::zeroed(&self.roster);

        // Booth reveals overwrite the cell outright; later events win on
        // conflict. Events naming participants outside the roster are
        // skipped.
        for booth in booths {
            if let (Some(boy_idx), Some(girl_idx)) = (
                self.roster.boy_index(&booth.boy),
                self.roster.girl_index(&booth.girl),
            ) {
                matrix.set(
                    boy_idx,
                    girl_idx,
                    if booth.is_perfect_match { 1.0 } else { 0.0 },
                );
            }
        }

        let ceremony_count = ceremonies.len() as f64;
        for ceremony in ceremonies {
            // Counters stay signed: a confirmed match inside a zero-beam
            // ceremony drives `beams` negative instead of saturating.
            let mut beams = ceremony.beam_count as i64;
            let mut possible_beams = ceremony.couples.len() as i64;
            let mut unknown_couples = Vec::new();

            for couple in &ceremony.couples {
                let mut is_known = false;
                for booth in booths {
                    if couple.boy == booth.boy && couple.girl == booth.girl {
                        is_known = true;
                        if booth.is_perfect_match {
                            beams -= 1;
                        } else {
                            possible_beams -= 1;
                        }
                    }
                }
                if !is_known {
                    unknown_couples.push(couple);
                }
            }

            if beams == 0 {
                // Every couple left unknown here is a definite no-match.
                // TODO: propagate that certainty into the other ceremonies
                // referencing these couples and iterate to fixpoint.
            }
            // TODO: same follow-up for beams == possible_beams, where every
            // unknown couple is a definite match.

            // Over-constrained input can leave possible_beams at 0; the f64
            // division then yields NaN (0/0) or +/-infinity and flows into
            // the matrix unchecked.
            let contribution = beams as f64 / possible_beams as f64 / ceremony_count;
            for couple in unknown_couples {
                if let (Some(boy_idx), Some(girl_idx)) = (
                    self.roster.boy_index(&couple.boy),
                    self.roster.girl_index(&couple.girl),
                ) {
                    matrix.add(boy_idx, girl_idx, contribution);
                }
            }
        }

        matrix
    }
}
