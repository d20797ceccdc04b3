//! Loading recorded branch traces from text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::branch::{BranchRecord, Outcome};

/// Hard upper bound on the number of records in a single trace.
pub const MAX_TRACE_RECORDS: usize = 25_000_100;

/// Errors produced while loading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace")]
    Io(#[from] std::io::Error),

    /// A non-blank line that does not parse as `<hex addr> <token> <hex
    /// target>`. Malformed lines are fatal rather than treated as
    /// end-of-input.
    #[error("malformed trace record at line {line}")]
    Malformed { line: usize },

    #[error("trace exceeds the maximum of {max} records")]
    CapacityExceeded { max: usize },
}

/// An immutable, ordered record of branch executions.
///
/// Loaded once, then shared read-only with every predictor run.
#[derive(Debug)]
pub struct Trace {
    records: Vec<BranchRecord>,
}

impl Trace {
    /// Load a trace from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse records line-by-line: `<hex addr> <token> <hex target>`,
    /// whitespace-separated. The branch counts as taken iff the token is
    /// exactly `"T"`; any other token means not-taken. Blank lines are
    /// skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, TraceError> {
        let records = read_records(reader, MAX_TRACE_RECORDS)?;
        log::debug!("loaded {} trace records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[BranchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn read_records(
    reader: impl BufRead,
    max: usize,
) -> Result<Vec<BranchRecord>, TraceError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(addr) = fields.next() else {
            continue;
        };
        let malformed = TraceError::Malformed { line: idx + 1 };
        let (Some(token), Some(target), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed);
        };
        let Some(addr) = parse_hex(addr) else {
            return Err(malformed);
        };
        let Some(target) = parse_hex(target) else {
            return Err(malformed);
        };
        if records.len() == max {
            return Err(TraceError::CapacityExceeded { max });
        }
        records.push(BranchRecord {
            addr,
            target,
            outcome: Outcome::from_bool(token == "T"),
        });
    }
    Ok(records)
}

fn parse_hex(s: &str) -> Option<u64> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).ok()
}
