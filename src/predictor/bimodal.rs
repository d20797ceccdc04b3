//! Bimodal predictors indexed solely by instruction address.

use crate::branch::{BranchRecord, Outcome};
use crate::predictor::counter::DirectionCounter;
use crate::predictor::{TracePredictor, Verdict};

/// A direct-mapped table of last observed outcomes, one bit per slot.
///
/// Every slot starts out taken and is overwritten with the real outcome on
/// every step. Distinct addresses mapping to the same slot clobber each
/// other's state; that interference is part of the behavior being measured.
pub struct OneBitBimodal {
    table: Vec<Outcome>,
}

impl OneBitBimodal {
    pub fn new(table_size: usize) -> Self {
        assert!(table_size > 0);
        Self {
            table: vec![Outcome::T; table_size],
        }
    }

    fn index(&self, addr: u64) -> usize {
        (addr % self.table.len() as u64) as usize
    }
}

impl TracePredictor for OneBitBimodal {
    fn name(&self) -> &'static str {
        "bimodal-1bit"
    }

    fn step(&mut self, record: &BranchRecord) -> Verdict {
        let index = self.index(record.addr);
        let verdict = Verdict::from_hit(self.table[index] == record.outcome);
        self.table[index] = record.outcome;
        verdict
    }
}

/// A direct-mapped table of 2-bit saturating counters.
///
/// Flipping a slot's prediction takes two contrary outcomes in a row, so a
/// single outlier outcome does not disturb an otherwise stable branch.
pub struct TwoBitBimodal {
    table: Vec<DirectionCounter>,
}

impl TwoBitBimodal {
    pub fn new(table_size: usize) -> Self {
        assert!(table_size > 0);
        Self {
            table: vec![DirectionCounter::StrongTaken; table_size],
        }
    }

    fn index(&self, addr: u64) -> usize {
        (addr % self.table.len() as u64) as usize
    }
}

impl TracePredictor for TwoBitBimodal {
    fn name(&self) -> &'static str {
        "bimodal-2bit"
    }

    fn step(&mut self, record: &BranchRecord) -> Verdict {
        let index = self.index(record.addr);
        let verdict =
            Verdict::from_hit(self.table[index].predict() == record.outcome);
        self.table[index].update(record.outcome);
        verdict
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sim::evaluate;

    fn records(outcomes: &[Outcome]) -> Vec<BranchRecord> {
        outcomes
            .iter()
            .map(|o| BranchRecord::new(0x4000, 0x5000, *o))
            .collect()
    }

    #[test]
    fn one_bit_tracks_the_last_outcome() {
        use Outcome::*;
        // Single-slot table: predictions are T, T, N, N against [T,N,N,T].
        let trace = records(&[T, N, N, T]);
        let summary = evaluate(&mut OneBitBimodal::new(1), &trace);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.attempted, 4);
    }

    #[test]
    fn two_bit_rides_out_a_single_contrary_outcome() {
        use Outcome::*;
        // Single-slot counter from StrongTaken: T and T strengthen, N only
        // weakens to WeakTaken, so the final T is still predicted taken.
        let trace = records(&[T, T, N, T]);
        let summary = evaluate(&mut TwoBitBimodal::new(1), &trace);
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.attempted, 4);
    }

    #[test]
    fn aliased_addresses_share_a_slot() {
        use Outcome::*;
        // Addresses 0x10 and 0x30 collide in a 32-entry table.
        let trace = vec![
            BranchRecord::new(0x10, 0, N),
            BranchRecord::new(0x30, 0, T),
            BranchRecord::new(0x10, 0, N),
        ];
        let summary = evaluate(&mut OneBitBimodal::new(32), &trace);
        // Predictions: T (initial), N (stored by 0x10), T (stored by 0x30).
        assert_eq!(summary.correct, 0);
    }
}
