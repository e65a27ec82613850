use std::time::{Duration, Instant};

use anyhow::Context;
use clap::CommandFactory;
use colored::*;
use iplog_common::config::Config;
use iplog_common::success;
use iplog_core::analysis::{self, AnalysisSummary};
use iplog_core::error::AnalysisError;
use tracing::warn;

use crate::commands::CommandLine;
use crate::terminal::{colors, print};

pub fn analyze(cli: &CommandLine) -> anyhow::Result<()> {
    let args = cli.config_args();
    let missing: Vec<&str> = args.missing_flags();
    if !missing.is_empty() {
        print_usage(&missing);
        return Ok(());
    }

    let cfg: Config = Config::try_from(args).context("invalid configuration")?;

    if !cli.quiet {
        print::banner();
        print::header("analysing access log");
        print_filters(&cfg);
    }

    let start_time: Instant = Instant::now();
    match analysis::analyze(&cfg) {
        Ok(summary) => {
            if !cli.quiet {
                print_summary(&summary, start_time.elapsed());
            }
            success!("Results written to {}", summary.output_path.display());
            Ok(())
        }
        Err(AnalysisError::NoAddressesInRange) => {
            if !cli.quiet {
                no_addresses_found();
            }
            Err(AnalysisError::NoAddressesInRange.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Missing flags are not an error: show how to call the tool and stop.
fn print_usage(missing: &[&str]) {
    let flags: Vec<String> = missing.iter().map(|flag| format!("--{flag}")).collect();
    warn!("Missing required flags: {}", flags.join(", "));
    println!("{}", CommandLine::command().render_usage());
    println!(
        "The log file, output file, start date and end date are required. Run with --help for details."
    );
}

fn print_filters(cfg: &Config) {
    let keys = ["Log", "Output", "From", "Until", "Start", "Mask"];
    print::set_key_width(keys);

    print::aligned_line("Log", cfg.log_path.display().to_string());
    print::aligned_line("Output", cfg.output_path.display().to_string());
    print::aligned_line("From", cfg.date_range.start().to_string());
    print::aligned_line("Until", cfg.date_range.end().to_string());

    let address = |value: Option<String>| -> ColoredString {
        match value {
            Some(v) => v.color(colors::ADDRESS),
            None => "any".dimmed(),
        }
    };
    print::aligned_line("Start", address(cfg.address_start.as_ref().map(|b| b.to_string())));
    print::aligned_line("Mask", address(cfg.address_mask.map(|m| m.to_string())));
}

fn print_summary(summary: &AnalysisSummary, total_time: Duration) {
    print::header("report");
    let keys = ["Lines", "Skipped", "Accepted", "Addresses"];
    print::set_key_width(keys);

    let stats = summary.stats;
    print::aligned_line("Lines", stats.lines_read.to_string());
    print::aligned_line("Skipped", stats.lines_skipped.to_string());
    print::aligned_line("Accepted", stats.entries_accepted.to_string());
    print::aligned_line("Addresses", summary.distinct_addresses.to_string());

    let addresses: ColoredString = format!("{} distinct addresses", summary.distinct_addresses)
        .bold()
        .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Analysis Complete: {addresses} counted in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}

fn no_addresses_found() {
    print::header("zero addresses matched");
    print::no_results();
}
