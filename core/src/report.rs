//! Writes a finished [`Report`] to disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::aggregate::Report;
use crate::error::AnalysisError;

/// Writes `report` to `path`, replacing any existing file.
///
/// An empty report is refused with [`AnalysisError::NoAddressesInRange`] and
/// leaves the file system untouched.
pub fn write_report(path: &Path, report: &Report) -> Result<(), AnalysisError> {
    if report.is_empty() {
        return Err(AnalysisError::NoAddressesInRange);
    }

    fs::write(path, report.render()).map_err(|source| AnalysisError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} rows to {}", report.len(), path.display());
    Ok(())
}
