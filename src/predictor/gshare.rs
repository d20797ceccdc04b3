//! A direction predictor indexed by address XOR'd with global history.

use crate::branch::BranchRecord;
use crate::history::GlobalHistoryRegister;
use crate::predictor::counter::DirectionCounter;
use crate::predictor::{TracePredictor, Verdict};

/// Number of counters in a [GShare] table.
pub const GSHARE_TABLE_SIZE: usize = 2048;

/// A gshare predictor: one fixed-size counter table shared by all branches,
/// indexed by the low address bits XOR'd with recent global history.
///
/// Folding the outcome history into the index lets branches whose behavior
/// correlates with their neighbors' land on separately trained counters.
pub struct GShare {
    table: Vec<DirectionCounter>,
    ghr: GlobalHistoryRegister,
}

impl GShare {
    /// Create a predictor with the given history register width.
    pub fn new(history_bits: usize) -> Self {
        Self {
            table: vec![DirectionCounter::StrongTaken; GSHARE_TABLE_SIZE],
            ghr: GlobalHistoryRegister::new(history_bits),
        }
    }

    fn index(&self, addr: u64) -> usize {
        let hashed = (addr % GSHARE_TABLE_SIZE as u64) ^ self.ghr.value();
        // History widths past 11 bits hash outside the table; reduce again.
        (hashed as usize) % GSHARE_TABLE_SIZE
    }
}

impl TracePredictor for GShare {
    fn name(&self) -> &'static str {
        "gshare"
    }

    fn step(&mut self, record: &BranchRecord) -> Verdict {
        let index = self.index(record.addr);
        let verdict =
            Verdict::from_hit(self.table[index].predict() == record.outcome);
        self.table[index].update(record.outcome);
        self.ghr.shift_in(record.outcome);
        verdict
    }
}
