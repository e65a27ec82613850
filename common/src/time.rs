//! # Log Timestamps
//!
//! Strict parsing for the two formats the tool understands:
//! `dd.MM.yyyy` for range bounds and `dd.MM.yyyy HH:mm:ss` for log entries.
//! Every field must be zero-padded to its full width; nothing lenient is accepted.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Human-readable form of [`DATE_FORMAT`], used in messages.
pub const DATE_PATTERN: &str = "dd.MM.yyyy";
/// Human-readable form of [`TIMESTAMP_FORMAT`], used in messages.
pub const TIMESTAMP_PATTERN: &str = "dd.MM.yyyy HH:mm:ss";

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

// 'd' stands for any ASCII digit, everything else must match literally.
const DATE_SHAPE: &str = "dd.dd.dddd";
const TIMESTAMP_SHAPE: &str = "dd.dd.dddd dd:dd:dd";

fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, expected)| match expected {
            b'd' => c.is_ascii_digit(),
            literal => c == literal,
        })
}

/// Parses a calendar date written as `dd.MM.yyyy`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_shape(s, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Parses an instant written as `dd.MM.yyyy HH:mm:ss`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if !has_shape(s, TIMESTAMP_SHAPE) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Inclusive scan window between two midnights.
///
/// Both bounds are the instant `00:00:00` of their day. The end bound is not
/// widened to the end of its day: `03.01.2023 00:00:01` lies outside a window
/// ending on `03.01.2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// A range whose start lies after its end admits nothing.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}
