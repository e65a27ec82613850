//! # Entry Filter
//!
//! Builds the predicate an entry must satisfy to be counted and applies it
//! lazily over a stream of parsed entries.
//!
//! An entry passes when all active checks pass:
//! * its timestamp lies inside the [`DateRange`],
//! * every octet is at or above the starting address, if one was given,
//! * every octet is unchanged by the mask, if one was given.

use iplog_common::config::Config;
use iplog_common::network::address::{AddressBound, AddressMask};
use iplog_common::time::DateRange;

use crate::parser::LogEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    date_range: DateRange,
    address_start: Option<AddressBound>,
    address_mask: Option<AddressMask>,
}

impl EntryFilter {
    /// A filter that only checks the date range.
    pub fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            address_start: None,
            address_mask: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            date_range: cfg.date_range,
            address_start: cfg.address_start.clone(),
            address_mask: cfg.address_mask,
        }
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if !self.date_range.contains(&entry.timestamp()) {
            return false;
        }

        if let Some(bound) = &self.address_start {
            if !bound.admits(entry.octets()) {
                return false;
            }
        }

        if let Some(mask) = &self.address_mask {
            if !mask.admits(entry.octets()) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
impl EntryFilter {
    fn with_address_start(mut self, bound: AddressBound) -> Self {
        self.address_start = Some(bound);
        self
    }

    fn with_address_mask(mut self, mask: AddressMask) -> Self {
        self.address_mask = Some(mask);
        self
    }
}

/// Yields the entries accepted by `filter`, in their original order.
///
/// Nothing is evaluated until the returned iterator is driven.
pub fn filter_entries<'f, I>(entries: I, filter: &'f EntryFilter) -> impl Iterator<Item = LogEntry> + 'f
where
    I: IntoIterator<Item = LogEntry>,
    I::IntoIter: 'f,
{
    entries.into_iter().filter(move |entry| filter.matches(entry))
}
