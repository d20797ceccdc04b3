//! Fixed-guess baseline predictors.

use crate::branch::{BranchRecord, Outcome};
use crate::predictor::{TracePredictor, Verdict};

/// A predictor with no state: guess the same outcome for every branch.
pub struct AlwaysPredictor {
    guess: Outcome,
}

impl AlwaysPredictor {
    pub fn new(guess: Outcome) -> Self {
        Self { guess }
    }

    pub fn taken() -> Self {
        Self::new(Outcome::T)
    }

    pub fn not_taken() -> Self {
        Self::new(Outcome::N)
    }
}

impl TracePredictor for AlwaysPredictor {
    fn name(&self) -> &'static str {
        match self.guess {
            Outcome::T => "always-taken",
            Outcome::N => "always-not-taken",
        }
    }

    fn step(&mut self, record: &BranchRecord) -> Verdict {
        Verdict::from_hit(self.guess == record.outcome)
    }
}
