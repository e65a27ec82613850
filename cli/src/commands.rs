pub mod analyze;

use std::path::PathBuf;

use clap::Parser;
use iplog_common::config::ConfigArgs;
use tracing::Level;

#[derive(Parser)]
#[command(name = "iplog")]
#[command(version, about = "Counts hits per source address in an access log.")]
// Every value flag may be given without a value; it then counts as absent.
pub struct CommandLine {
    /// Access log to analyse, one `<address>: dd.MM.yyyy HH:mm:ss` entry per line
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    pub file_log: Option<String>,

    /// Where to write the `<address>: <count>` report
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    pub file_output: Option<String>,

    /// Lowest accepted address, compared octet by octet
    #[arg(long, value_name = "ADDRESS", num_args = 0..=1, default_missing_value = "")]
    pub address_start: Option<String>,

    /// Mask every octet of an accepted address must fit inside
    #[arg(long, value_name = "MASK", num_args = 0..=1, default_missing_value = "")]
    pub address_mask: Option<String>,

    /// First day of the scan window (dd.MM.yyyy)
    #[arg(long, value_name = "DATE", num_args = 0..=1, default_missing_value = "")]
    pub time_start: Option<String>,

    /// Last day of the scan window (dd.MM.yyyy), counted from its midnight
    #[arg(long, value_name = "DATE", num_args = 0..=1, default_missing_value = "")]
    pub time_end: Option<String>,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log skipped lines and other details
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (_, true) => Level::DEBUG,
            _ => Level::INFO,
        }
    }

    pub fn config_args(&self) -> ConfigArgs {
        ConfigArgs {
            file_log: self.file_log.as_ref().map(PathBuf::from),
            file_output: self.file_output.as_ref().map(PathBuf::from),
            address_start: self.address_start.clone(),
            address_mask: self.address_mask.clone(),
            time_start: self.time_start.clone(),
            time_end: self.time_end.clone(),
        }
    }
}
