//! Evaluation engine: run configured predictor variants over a shared trace.

use std::thread;

use crate::branch::{BranchRecord, Outcome};
use crate::predictor::{
    AlwaysPredictor, BranchTargetBuffer, GShare, OneBitBimodal, Tournament,
    TracePredictor, TwoBitBimodal, Verdict,
};

/// Accuracy statistics for a single predictor run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of correct predictions
    pub correct: u64,

    /// Number of records for which a prediction was made
    pub attempted: u64,
}

impl Summary {
    /// Return the fraction of attempted predictions that were correct.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }

    fn tally(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => {
                self.correct += 1;
                self.attempted += 1;
            }
            Verdict::Incorrect => {
                self.attempted += 1;
            }
            Verdict::Skipped => {}
        }
    }
}

/// Configuration for one entry in an evaluation lineup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantConfig {
    Always { guess: Outcome },
    OneBitBimodal { table_size: usize },
    TwoBitBimodal { table_size: usize },
    GShare { history_bits: usize },
    Tournament,
    BranchTarget,
}

impl VariantConfig {
    /// Build a fresh predictor owning its own tables.
    pub fn build(&self) -> Box<dyn TracePredictor + Send> {
        match *self {
            Self::Always { guess } => Box::new(AlwaysPredictor::new(guess)),
            Self::OneBitBimodal { table_size } => {
                Box::new(OneBitBimodal::new(table_size))
            }
            Self::TwoBitBimodal { table_size } => {
                Box::new(TwoBitBimodal::new(table_size))
            }
            Self::GShare { history_bits } => Box::new(GShare::new(history_bits)),
            Self::Tournament => Box::new(Tournament::new()),
            Self::BranchTarget => Box::new(BranchTargetBuffer::new()),
        }
    }
}

/// The default six-variant suite, in report order.
pub fn default_lineup() -> Vec<VariantConfig> {
    vec![
        VariantConfig::Always { guess: Outcome::T },
        VariantConfig::OneBitBimodal { table_size: 2048 },
        VariantConfig::TwoBitBimodal { table_size: 2048 },
        VariantConfig::GShare { history_bits: 11 },
        VariantConfig::Tournament,
        VariantConfig::BranchTarget,
    ]
}

/// A predictor label paired with the summary of its run.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub label: &'static str,
    pub summary: Summary,
}

/// How the engine schedules the lineup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    /// One worker thread per variant. Results are identical to sequential
    /// execution; only wall-clock time differs.
    Parallel,
}

/// Stream every record of a trace through a predictor once.
pub fn evaluate(
    predictor: &mut dyn TracePredictor,
    records: &[BranchRecord],
) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        summary.tally(predictor.step(record));
    }
    summary
}

/// Evaluate every configured variant against the same records.
///
/// The records are the only shared input and are never written; each run
/// owns its tables outright. Results come back in lineup order regardless
/// of how the runs were scheduled.
pub fn evaluate_lineup(
    records: &[BranchRecord],
    lineup: &[VariantConfig],
    execution: Execution,
) -> Vec<VariantResult> {
    match execution {
        Execution::Sequential => {
            lineup.iter().map(|cfg| run_variant(cfg, records)).collect()
        }
        Execution::Parallel => thread::scope(|scope| {
            let workers: Vec<_> = lineup
                .iter()
                .map(|cfg| scope.spawn(move || run_variant(cfg, records)))
                .collect();
            workers
                .into_iter()
                .map(|w| w.join().expect("variant worker panicked"))
                .collect()
        }),
    }
}

fn run_variant(config: &VariantConfig, records: &[BranchRecord]) -> VariantResult {
    let mut predictor = config.build();
    let summary = evaluate(predictor.as_mut(), records);
    log::debug!(
        "{}: {}/{} correct",
        predictor.name(),
        summary.correct,
        summary.attempted
    );
    VariantResult {
        label: predictor.name(),
        summary,
    }
}
