use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AnalysisError;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Reads the whole log into memory, one string per line.
///
/// Both `\n` and `\r\n` line endings are accepted. A leading byte-order mark is
/// dropped, and invalid UTF-8 is replaced so the affected line is skipped later
/// instead of failing the run.
pub fn read_log(path: &Path) -> Result<Vec<String>, AnalysisError> {
    let bytes = fs::read(path).map_err(|source| AnalysisError::ReadLog {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = String::from_utf8_lossy(&bytes);
    let content: &str = decoded.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&decoded);

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
