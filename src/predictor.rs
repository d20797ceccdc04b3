//! Implementations of different branch predictors.

pub mod always;
pub mod bimodal;
pub mod btb;
pub mod counter;
pub mod gshare;
pub mod tournament;

pub use always::*;
pub use bimodal::*;
pub use btb::*;
pub use counter::*;
pub use gshare::*;
pub use tournament::*;

use crate::branch::BranchRecord;

/// How a single predictor step fared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A prediction was made and matched the record.
    Correct,

    /// A prediction was made and missed.
    Incorrect,

    /// No prediction was made for this record. The step still updates
    /// predictor state, but it must not count toward the attempted total.
    Skipped,
}

impl Verdict {
    pub fn from_hit(hit: bool) -> Self {
        if hit {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// Interface to a predictor evaluated record-by-record against a trace.
///
/// A step consumes one record: the predictor scores its own guess against
/// the recorded outcome, then trains on it. Every instance owns its tables
/// outright; a fresh value always starts from its initial state.
pub trait TracePredictor {
    fn name(&self) -> &'static str;

    /// Consume a single record and report how the prediction fared.
    fn step(&mut self, record: &BranchRecord) -> Verdict;
}
