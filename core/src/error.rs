use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read log file '{}'", path.display())]
    ReadLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report to '{}'", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No entry passed every active filter, so there is nothing to write.
    #[error("no addresses fell within the requested range")]
    NoAddressesInRange,
}
