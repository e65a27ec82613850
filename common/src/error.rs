use thiserror::Error;

use crate::network::address::AddressParseError;
use crate::time::DATE_PATTERN;

/// Problems found while turning command-line values into a [`crate::config::Config`].
///
/// All of them are raised before the log file is opened.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required flag --{0}")]
    MissingFlag(&'static str),

    #[error("invalid date '{value}' for --{flag}, use the format {}", DATE_PATTERN)]
    InvalidDate { flag: &'static str, value: String },

    #[error("invalid starting address '{value}'")]
    InvalidAddressStart {
        value: String,
        #[source]
        source: AddressParseError,
    },

    #[error("invalid address mask '{value}'")]
    InvalidAddressMask {
        value: String,
        #[source]
        source: AddressParseError,
    },
}
