//! # Analysis Run
//!
//! Ties the stages together for one batch run: read the log, parse and filter
//! each line, count the accepted entries, and write the report.

use std::path::PathBuf;

use iplog_common::config::Config;
use tracing::{debug, info};

use crate::aggregate::{self, Report};
use crate::error::AnalysisError;
use crate::filter::{self, EntryFilter};
use crate::{parser, report, source};

/// Line counts collected while the pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub entries_accepted: usize,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub stats: PipelineStats,
    pub distinct_addresses: usize,
    pub output_path: PathBuf,
}

/// Runs parse, filter and aggregate over lines already in memory.
pub fn build_report<S>(lines: &[S], filter: &EntryFilter) -> (Report, PipelineStats)
where
    S: AsRef<str>,
{
    let mut lines_skipped: usize = 0;
    let mut entries_accepted: usize = 0;

    let parsed = lines.iter().enumerate().filter_map(|(idx, line)| {
        let entry = parser::parse_line(line.as_ref());
        if entry.is_none() {
            debug!("Skipping malformed line {}", idx + 1);
            lines_skipped += 1;
        }
        entry
    });

    let accepted = filter::filter_entries(parsed, filter).inspect(|_| entries_accepted += 1);
    let report = aggregate::aggregate(accepted);

    let stats = PipelineStats {
        lines_read: lines.len(),
        lines_skipped,
        entries_accepted,
    };
    (report, stats)
}

/// Executes one full run described by `cfg`.
///
/// Fails with [`AnalysisError::NoAddressesInRange`] when nothing matched; in
/// that case no output file is created.
pub fn analyze(cfg: &Config) -> Result<AnalysisSummary, AnalysisError> {
    let lines = source::read_log(&cfg.log_path)?;
    let filter = EntryFilter::from_config(cfg);

    let (report, stats) = build_report(&lines, &filter);
    info!(
        "Accepted {} of {} lines ({} skipped as malformed)",
        stats.entries_accepted, stats.lines_read, stats.lines_skipped
    );

    report::write_report(&cfg.output_path, &report)?;

    Ok(AnalysisSummary {
        stats,
        distinct_addresses: report.len(),
        output_path: cfg.output_path.clone(),
    })
}
