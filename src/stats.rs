//! Helpers for profiling a loaded trace.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::branch::{BranchRecord, Outcome};

/// Summary of the branches appearing in a trace.
pub struct TraceProfile {
    /// Per-branch data (indexed by instruction address).
    data: BTreeMap<u64, BranchData>,

    /// Number of records profiled.
    records: usize,

    /// Number of records with a taken outcome.
    taken: usize,
}

impl TraceProfile {
    pub fn from_records(records: &[BranchRecord]) -> Self {
        let mut res = Self {
            data: BTreeMap::new(),
            records: 0,
            taken: 0,
        };
        for record in records {
            res.records += 1;
            if record.taken() {
                res.taken += 1;
            }
            let data = res
                .data
                .entry(record.addr)
                .or_insert_with(BranchData::new);
            data.occ += 1;
            data.pat.push(record.outcome.into());
        }
        res
    }

    pub fn num_records(&self) -> usize {
        self.records
    }

    pub fn num_taken(&self) -> usize {
        self.taken
    }

    /// Return the fraction of records with a taken outcome.
    pub fn taken_rate(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.taken as f64 / self.records as f64
        }
    }

    /// Returns data collected for a particular branch.
    pub fn get(&self, addr: u64) -> Option<&BranchData> {
        self.data.get(&addr)
    }

    /// Returns the number of unique observed branch instructions.
    pub fn num_unique_branches(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of branches that are always taken.
    pub fn num_always_taken(&self) -> usize {
        self.data.values().filter(|d| d.is_always_taken()).count()
    }

    /// Returns the number of branches that are never taken.
    pub fn num_never_taken(&self) -> usize {
        self.data.values().filter(|d| d.is_never_taken()).count()
    }

    /// The `n` most frequently executed branches, most frequent first.
    pub fn hot_branches(&self, n: usize) -> Vec<(u64, &BranchData)> {
        self.data
            .iter()
            .sorted_by_key(|(_, d)| std::cmp::Reverse(d.occ))
            .take(n)
            .map(|(addr, d)| (*addr, d))
            .collect()
    }
}

/// Container for per-branch statistics.
pub struct BranchData {
    /// Number of times this branch was encountered.
    pub occ: usize,

    /// Record of all observed outcomes for this branch.
    pub pat: BitVec,
}

impl BranchData {
    fn new() -> Self {
        Self {
            occ: 0,
            pat: BitVec::new(),
        }
    }

    pub fn times_taken(&self) -> usize {
        self.pat.count_ones()
    }

    pub fn is_always_taken(&self) -> bool {
        self.pat.count_ones() == self.pat.len()
    }

    pub fn is_never_taken(&self) -> bool {
        self.pat.count_zeros() == self.pat.len()
    }

    /// Return the taken rate for this branch.
    pub fn taken_rate(&self) -> f64 {
        self.times_taken() as f64 / self.occ as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(addr: u64, outcome: Outcome) -> BranchRecord {
        BranchRecord::new(addr, 0, outcome)
    }

    #[test]
    fn profiles_per_branch_patterns() {
        use Outcome::*;
        let trace = vec![
            record(0x10, T),
            record(0x20, N),
            record(0x10, T),
            record(0x30, T),
            record(0x10, N),
        ];
        let profile = TraceProfile::from_records(&trace);

        assert_eq!(profile.num_records(), 5);
        assert_eq!(profile.num_taken(), 3);
        assert_eq!(profile.num_unique_branches(), 3);
        assert_eq!(profile.num_always_taken(), 1);
        assert_eq!(profile.num_never_taken(), 1);

        let hot = profile.hot_branches(1);
        assert_eq!(hot[0].0, 0x10);
        assert_eq!(hot[0].1.occ, 3);
        assert_eq!(hot[0].1.times_taken(), 2);

        assert_eq!(profile.get(0x20).map(|d| d.occ), Some(1));
        assert!(profile.get(0x99).is_none());
    }

    #[test]
    fn empty_trace_profiles_cleanly() {
        let profile = TraceProfile::from_records(&[]);
        assert_eq!(profile.num_records(), 0);
        assert_eq!(profile.taken_rate(), 0.0);
        assert!(profile.hot_branches(4).is_empty());
    }
}
