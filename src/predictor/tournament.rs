//! A tournament meta-predictor arbitrating between gshare and bimodal.

use crate::branch::BranchRecord;
use crate::history::GlobalHistoryRegister;
use crate::predictor::counter::{DirectionCounter, Selection, SelectorCounter};
use crate::predictor::{TracePredictor, Verdict};

const TABLE_SIZE: usize = 2048;
const HISTORY_BITS: usize = 11;

/// A tournament predictor: a gshare-indexed and a bimodal-indexed counter
/// table run side by side, and a per-address selector learns which of the
/// two to trust. Both sub-predictors keep training no matter which one is
/// selected, so a temporarily disfavored one can recover.
pub struct Tournament {
    gshare: Vec<DirectionCounter>,
    bimodal: Vec<DirectionCounter>,
    selector: Vec<SelectorCounter>,
    ghr: GlobalHistoryRegister,
}

impl Tournament {
    pub fn new() -> Self {
        Self {
            gshare: vec![DirectionCounter::StrongTaken; TABLE_SIZE],
            bimodal: vec![DirectionCounter::StrongTaken; TABLE_SIZE],
            selector: vec![SelectorCounter::StrongGShare; TABLE_SIZE],
            ghr: GlobalHistoryRegister::new(HISTORY_BITS),
        }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl TracePredictor for Tournament {
    fn name(&self) -> &'static str {
        "tournament"
    }

    fn step(&mut self, record: &BranchRecord) -> Verdict {
        let bimodal_index = (record.addr % TABLE_SIZE as u64) as usize;
        let gshare_index =
            (bimodal_index ^ self.ghr.value() as usize) % TABLE_SIZE;

        let gshare_correct =
            self.gshare[gshare_index].predict() == record.outcome;
        let bimodal_correct =
            self.bimodal[bimodal_index].predict() == record.outcome;

        // Credit goes through the selector: a correct sub-predictor scores
        // only if it is the one currently selected for this address. The
        // gshare side is consulted first, so when both are correct under a
        // bimodal-preferring selector, no credit is given.
        let selection = self.selector[bimodal_index].selection();
        let verdict = if gshare_correct {
            Verdict::from_hit(selection == Selection::GShare)
        } else if bimodal_correct {
            Verdict::from_hit(selection == Selection::Bimodal)
        } else {
            Verdict::Incorrect
        };

        // The selector trains only when the sub-predictors disagree.
        if bimodal_correct != gshare_correct {
            let sel = &mut self.selector[bimodal_index];
            *sel = if bimodal_correct {
                sel.toward_bimodal()
            } else {
                sel.toward_gshare()
            };
        }

        self.ghr.shift_in(record.outcome);

        self.gshare[gshare_index].update(record.outcome);
        self.bimodal[bimodal_index].update(record.outcome);

        verdict
    }
}
