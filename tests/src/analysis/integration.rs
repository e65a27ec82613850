#![cfg(test)]
use std::fs;
use std::path::{Path, PathBuf};

use iplog_common::config::{Config, ConfigArgs};
use iplog_common::error::ConfigError;
use iplog_core::analysis::{self, AnalysisSummary};
use iplog_core::error::AnalysisError;
use tempfile::TempDir;

const SAMPLE_LOG: &str = "\
10.0.0.1: 01.01.2023 10:00:00
10.0.0.2: 02.01.2023 11:00:00
10.0.0.1: 05.01.2023 09:00:00
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn with_log(content: &str) -> Self {
        Self::with_log_bytes(content.as_bytes())
    }

    fn with_log_bytes(content: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("access.log"), content).unwrap();
        Self { dir }
    }

    fn log(&self) -> PathBuf {
        self.dir.path().join("access.log")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("report.txt")
    }

    fn args(&self, start: &str, end: &str) -> ConfigArgs {
        ConfigArgs {
            file_log: Some(self.log()),
            file_output: Some(self.output()),
            address_start: None,
            address_mask: None,
            time_start: Some(start.to_string()),
            time_end: Some(end.to_string()),
        }
    }

    fn run(&self, args: ConfigArgs) -> Result<AnalysisSummary, AnalysisError> {
        let cfg = Config::try_from(args).unwrap();
        analysis::analyze(&cfg)
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Three entries, the last one past the end-of-range midnight.
#[test]
fn end_to_end_sample_log() {
    let ws = Workspace::with_log(SAMPLE_LOG);

    let summary = ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();

    assert_eq!(read(&ws.output()), "10.0.0.1: 1\n10.0.0.2: 1\n");
    assert_eq!(summary.distinct_addresses, 2);
    assert_eq!(summary.stats.lines_read, 3);
    assert_eq!(summary.stats.entries_accepted, 2);
    assert_eq!(summary.output_path, ws.output());
}

#[test]
fn counts_sum_to_accepted_lines_in_first_seen_order() {
    let ws = Workspace::with_log(
        "\
192.168.0.7: 01.03.2023 08:00:00
not a log line
10.1.1.1: 01.03.2023 09:00:00
192.168.0.7: 02.03.2023 10:00:00
10.1.1.1: 02.03.2023 10:30:00
10.1.1.1: 03.03.2023 00:00:00
172.16.0.1: 01.03.2023 07:59:59
10.1.1.1 - 02.03.2023 10:30:00
",
    );

    let summary = ws.run(ws.args("01.03.2023", "03.03.2023")).unwrap();

    assert_eq!(
        read(&ws.output()),
        "192.168.0.7: 2\n10.1.1.1: 3\n172.16.0.1: 1\n"
    );
    assert_eq!(summary.stats.entries_accepted, 6);
    assert_eq!(summary.stats.lines_skipped, 2);
}

#[test]
fn start_midnight_is_included_and_later_end_day_excluded() {
    let ws = Workspace::with_log(
        "\
10.0.0.1: 01.01.2023 00:00:00
10.0.0.2: 03.01.2023 00:00:00
10.0.0.3: 03.01.2023 00:00:01
10.0.0.4: 31.12.2022 23:59:59
",
    );

    ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();

    assert_eq!(read(&ws.output()), "10.0.0.1: 1\n10.0.0.2: 1\n");
}

#[test]
fn address_filters_combine() {
    let ws = Workspace::with_log(
        "\
192.168.1.0: 02.01.2023 10:00:00
192.168.1.10: 02.01.2023 10:00:00
192.168.2.0: 02.01.2023 10:00:00
192.167.9.0: 02.01.2023 10:00:00
10.0.0.0: 02.01.2023 10:00:00
",
    );

    let args = ConfigArgs {
        address_start: Some("192.168.1".to_string()),
        address_mask: Some("255.255.255.0".to_string()),
        ..ws.args("01.01.2023", "03.01.2023")
    };
    ws.run(args).unwrap();

    assert_eq!(read(&ws.output()), "192.168.1.0: 1\n192.168.2.0: 1\n");
}

#[test]
fn invalid_utf8_line_is_skipped_not_fatal() {
    let ws = Workspace::with_log_bytes(
        b"10.0.0.1: 01.01.2023 10:00:00\n\xff\xfe garbage\n10.0.0.2: 02.01.2023 11:00:00\n",
    );

    let summary = ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();

    assert_eq!(read(&ws.output()), "10.0.0.1: 1\n10.0.0.2: 1\n");
    assert_eq!(summary.stats.lines_read, 3);
    assert_eq!(summary.stats.lines_skipped, 1);
}

#[test]
fn byte_order_mark_does_not_hide_first_entry() {
    let ws = Workspace::with_log(
        "\u{FEFF}10.0.0.1: 01.01.2023 10:00:00\n10.0.0.2: 02.01.2023 11:00:00\n",
    );

    let summary = ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();

    assert_eq!(read(&ws.output()), "10.0.0.1: 1\n10.0.0.2: 1\n");
    assert_eq!(summary.stats.lines_skipped, 0);
}

#[test]
fn no_match_reports_empty_result_without_output() {
    let ws = Workspace::with_log(SAMPLE_LOG);

    let err = ws.run(ws.args("01.02.2023", "28.02.2023")).unwrap_err();

    assert!(matches!(err, AnalysisError::NoAddressesInRange));
    assert!(!ws.output().exists());
}

#[test]
fn mask_rejecting_every_entry_is_an_empty_result() {
    let ws = Workspace::with_log("192.168.1.10: 02.01.2023 10:00:00\n");

    let args = ConfigArgs {
        address_mask: Some("255.255.255.0".to_string()),
        ..ws.args("01.01.2023", "03.01.2023")
    };
    let err = ws.run(args).unwrap_err();

    assert!(matches!(err, AnalysisError::NoAddressesInRange));
    assert!(!ws.output().exists());
}

#[test]
fn repeated_runs_write_identical_reports() {
    let ws = Workspace::with_log(SAMPLE_LOG);

    ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();
    let first = fs::read(ws.output()).unwrap();
    ws.run(ws.args("01.01.2023", "03.01.2023")).unwrap();
    let second = fs::read(ws.output()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unreadable_log_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::try_from(ConfigArgs {
        file_log: Some(dir.path().join("missing.log")),
        file_output: Some(dir.path().join("report.txt")),
        time_start: Some("01.01.2023".to_string()),
        time_end: Some("03.01.2023".to_string()),
        ..ConfigArgs::default()
    })
    .unwrap();

    let err = analysis::analyze(&cfg).unwrap_err();

    assert!(matches!(err, AnalysisError::ReadLog { .. }));
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn malformed_date_bound_fails_before_reading() {
    let ws = Workspace::with_log(SAMPLE_LOG);

    let err = Config::try_from(ws.args("1.1.2023", "03.01.2023")).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidDate { .. }));
    assert!(!ws.output().exists());
}
