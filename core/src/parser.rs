//! # Log Line Parser
//!
//! A line looks like `10.0.0.1: 01.01.2023 10:00:00`. Anything else is
//! skipped, never reported as an error.

use chrono::NaiveDateTime;
use iplog_common::network::address::{self, OCTET_COUNT};
use iplog_common::time;

/// Separates the address from the timestamp.
pub const FIELD_SEPARATOR: &str = ": ";

/// One accepted line of the access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    address: String,
    octets: [u8; OCTET_COUNT],
    timestamp: NaiveDateTime,
}

impl LogEntry {
    /// The address exactly as written in the log.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn octets(&self) -> &[u8; OCTET_COUNT] {
        &self.octets
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Parses one raw line, or returns `None` when it does not have the expected shape.
///
/// The line is split on every separator and empty fragments are dropped; exactly
/// two fragments must remain.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let mut parts = line.split(FIELD_SEPARATOR).filter(|part| !part.is_empty());
    let (address_token, timestamp_token) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let timestamp = time::parse_timestamp(timestamp_token)?;
    let octets = address::parse_dotted_quad(address_token).ok()?;

    Some(LogEntry {
        address: address_token.to_string(),
        octets,
        timestamp,
    })
}
