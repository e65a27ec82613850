//! # Hit Aggregation
//!
//! Counts accepted entries per address. Rows keep the order in which each
//! address was first seen; they are never sorted by address or by count.

use std::collections::HashMap;

use crate::parser::{FIELD_SEPARATOR, LogEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub address: String,
    pub count: usize,
}

/// Ordered address to hit-count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
    index: HashMap<String, usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more hit for `address`, appending a row on first sight.
    pub fn record(&mut self, address: &str) {
        match self.index.get(address) {
            Some(&idx) => self.rows[idx].count += 1,
            None => {
                self.index.insert(address.to_string(), self.rows.len());
                self.rows.push(ReportRow {
                    address: address.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts, equal to the number of entries recorded.
    pub fn total_hits(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// The report file contents: one `<address>: <count>` line per row.
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}{}{}\n", row.address, FIELD_SEPARATOR, row.count))
            .collect()
    }
}

#[cfg(test)]
impl Report {
    fn count_of(&self, address: &str) -> Option<usize> {
        self.index.get(address).map(|&idx| self.rows[idx].count)
    }
}

impl FromIterator<LogEntry> for Report {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(entries: I) -> Self {
        let mut report = Report::new();
        for entry in entries {
            report.record(entry.address());
        }
        report
    }
}

/// Consumes the accepted entries once and counts them.
pub fn aggregate<I>(entries: I) -> Report
where
    I: IntoIterator<Item = LogEntry>,
{
    entries.into_iter().collect()
}
