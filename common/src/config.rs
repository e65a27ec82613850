use std::path::PathBuf;

use tracing::warn;

use crate::error::ConfigError;
use crate::network::address::{AddressBound, AddressMask};
use crate::time::{self, DateRange};

pub const FLAG_FILE_LOG: &str = "file-log";
pub const FLAG_FILE_OUTPUT: &str = "file-output";
pub const FLAG_TIME_START: &str = "time-start";
pub const FLAG_TIME_END: &str = "time-end";

/// Raw values as they arrive from the command line.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    pub file_log: Option<PathBuf>,
    pub file_output: Option<PathBuf>,
    pub address_start: Option<String>,
    pub address_mask: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
}

impl ConfigArgs {
    /// Names of the required flags that were not given, in declaration order.
    pub fn missing_flags(&self) -> Vec<&'static str> {
        let required: [(&'static str, bool); 4] = [
            (FLAG_FILE_LOG, present_path(&self.file_log).is_some()),
            (FLAG_FILE_OUTPUT, present_path(&self.file_output).is_some()),
            (FLAG_TIME_START, present(&self.time_start).is_some()),
            (FLAG_TIME_END, present(&self.time_end).is_some()),
        ];

        required
            .into_iter()
            .filter(|(_, given)| !given)
            .map(|(flag, _)| flag)
            .collect()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn present_path(value: &Option<PathBuf>) -> Option<&PathBuf> {
    value.as_ref().filter(|p| !p.as_os_str().is_empty())
}

/// A validated run: where to read, where to write, and what to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: PathBuf,
    pub output_path: PathBuf,
    pub date_range: DateRange,
    pub address_start: Option<AddressBound>,
    pub address_mask: Option<AddressMask>,
}

impl TryFrom<ConfigArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: ConfigArgs) -> Result<Self, Self::Error> {
        let log_path = present_path(&args.file_log)
            .cloned()
            .ok_or(ConfigError::MissingFlag(FLAG_FILE_LOG))?;
        let output_path = present_path(&args.file_output)
            .cloned()
            .ok_or(ConfigError::MissingFlag(FLAG_FILE_OUTPUT))?;

        let start = required_date(&args.time_start, FLAG_TIME_START)?;
        let end = required_date(&args.time_end, FLAG_TIME_END)?;
        let date_range = DateRange::new(start, end);
        if date_range.is_empty() {
            warn!("Start date {start} lies after end date {end}, no entry can match");
        }

        let address_start = present(&args.address_start)
            .map(|value| {
                value
                    .parse::<AddressBound>()
                    .map_err(|source| ConfigError::InvalidAddressStart {
                        value: value.to_string(),
                        source,
                    })
            })
            .transpose()?;

        let address_mask = present(&args.address_mask)
            .map(|value| {
                value
                    .parse::<AddressMask>()
                    .map_err(|source| ConfigError::InvalidAddressMask {
                        value: value.to_string(),
                        source,
                    })
            })
            .transpose()?;

        Ok(Self {
            log_path,
            output_path,
            date_range,
            address_start,
            address_mask,
        })
    }
}

fn required_date(value: &Option<String>, flag: &'static str) -> Result<chrono::NaiveDate, ConfigError> {
    let value = present(value).ok_or(ConfigError::MissingFlag(flag))?;
    time::parse_date(value).ok_or_else(|| ConfigError::InvalidDate {
        flag,
        value: value.to_string(),
    })
}
