//! Record table construction.
//!
//! The table is built in a single fold over the input lines. Its length is
//! the only count the renderer ever sees, so the declared array length and
//! the number of emitted entries cannot diverge.

use crate::record::{parse_line, CoordinatePair};

/// Ordered coordinate pairs accepted from one input, plus line bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable<'a> {
    records: Vec<CoordinatePair<'a>>,
    lines_seen: usize,
    malformed: Vec<usize>,
}

impl<'a> RecordTable<'a> {
    /// Number of accepted records. This is the declared array length.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no line produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Accepted records in input order.
    pub fn records(&self) -> &[CoordinatePair<'a>] {
        &self.records
    }

    /// Iterate over accepted records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, CoordinatePair<'a>> {
        self.records.iter()
    }

    /// Total number of input lines inspected.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Number of lines that produced no record (blank or malformed).
    pub fn skipped(&self) -> usize {
        self.lines_seen - self.records.len()
    }

    /// 1-based line numbers of lines that carried exactly one token.
    ///
    /// Blank lines are not listed here; they separate polygons in the
    /// source data and are expected.
    pub fn malformed_lines(&self) -> &[usize] {
        &self.malformed
    }
}

impl<'t, 'a> IntoIterator for &'t RecordTable<'a> {
    type Item = &'t CoordinatePair<'a>;
    type IntoIter = std::slice::Iter<'t, CoordinatePair<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Builds a record table from the full input text.
///
/// Every line is passed through [`parse_line`]; only lines yielding a pair
/// are kept, in their original relative order. An input with no valid lines
/// produces an empty table rather than an error.
pub fn build_table(input: &str) -> RecordTable<'_> {
    input
        .lines()
        .enumerate()
        .fold(RecordTable::default(), |mut table, (index, line)| {
            table.lines_seen += 1;
            match parse_line(line) {
                Some(pair) => table.records.push(pair),
                None if !line.trim().is_empty() => table.malformed.push(index + 1),
                None => {}
            }
            table
        })
}
