//! Parallel evaluation of a seed neighbourhood

use curvegen_algorithms::curve_gen::{CurveCoefficients, CurveGenerator, Seed};
use rayon::prelude::*;
use slog::{debug, info, Logger};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};

/// Outcome for one seed in the searched range
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Offset from the start seed
    pub offset: i64,
    /// The evaluated seed, `None` if the offset underflowed
    pub seed: Option<Seed>,
    /// Coefficients, or why the seed was rejected
    pub outcome: Result<CurveCoefficients>,
}

impl Candidate {
    /// Whether this is the start seed itself
    pub fn is_center(&self) -> bool {
        self.offset == 0
    }

    /// Whether the seed produced usable coefficients
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Accepted and rejected counts for a finished search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Seeds that produced coefficients
    pub accepted: usize,
    /// Seeds that were rejected
    pub rejected: usize,
}

impl SearchSummary {
    /// Tally a list of candidates
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        let accepted = candidates.iter().filter(|c| c.is_ok()).count();
        Self {
            accepted,
            rejected: candidates.len() - accepted,
        }
    }
}

fn evaluate(generator: &CurveGenerator, start: &Seed, offset: i64) -> Candidate {
    let seed = start.checked_offset(offset);
    let outcome = match &seed {
        Some(seed) => generator.generate(seed).map_err(SearchError::from),
        None => Err(SearchError::SeedUnderflow { offset }),
    };
    Candidate {
        offset,
        seed,
        outcome,
    }
}

/// Evaluate every seed in `[start - margin, start + margin]`
///
/// Returns one candidate per offset in ascending offset order. Only an
/// unusable (p, a) fails the whole search; per-seed failures are recorded in
/// the candidates.
pub fn search(config: &SearchConfig, logger: &Logger) -> Result<Vec<Candidate>> {
    let generator = config.generator()?;
    info!(logger, "Searching seed neighbourhood";
        "start_seed" => %config.start_seed,
        "margin" => config.margin,
        "field_bits" => generator.modulus().bits(),
    );

    let candidates: Vec<Candidate> = config
        .offsets()
        .into_par_iter()
        .map(|offset| evaluate(&generator, &config.start_seed, offset))
        .collect();

    for candidate in candidates.iter() {
        match &candidate.outcome {
            Err(SearchError::Generation(e)) => match e.rejection() {
                Some(kind) => {
                    debug!(logger, "Seed rejected"; "offset" => candidate.offset, "reason" => %kind);
                }
                None => {
                    debug!(logger, "Seed failed"; "offset" => candidate.offset, "error" => %e);
                }
            },
            Err(e) => {
                debug!(logger, "Seed skipped"; "offset" => candidate.offset, "error" => %e);
            }
            Ok(_) => {}
        }
    }

    let summary = SearchSummary::from_candidates(&candidates);
    info!(logger, "Search finished";
        "accepted" => summary.accepted,
        "rejected" => summary.rejected,
    );

    Ok(candidates)
}
