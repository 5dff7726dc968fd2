//! # Run Orchestration
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          compute-sales run                              │
//! │                                                                         │
//! │  1. Load configuration (defaults → TOML → env → CLI flags)              │
//! │  2. Load both JSON inputs                                              │
//! │  3. Reject empty inputs                                                │
//! │  4. Time sales_core::compute_total_from_json                           │
//! │  5. Render report and hand it to the sink                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::time::Instant;

use sales_core::{compute_total_from_json, SalesReport, SalesSummary};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::ReportConfig;
use crate::error::{AppError, AppResult};
use crate::loader::load_json_file;
use crate::sink::ReportSink;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: SalesSummary,
    pub report_path: PathBuf,
}

/// Runs the whole pipeline, printing the report to stdout.
pub fn run(cli: &Cli) -> AppResult<RunOutcome> {
    let mut config = ReportConfig::load(cli.config.as_deref())?;
    config.apply_cli(cli);
    debug!(?config, "Configuration loaded");

    let sink = ReportSink::new(&config.report);
    let report = build_report(cli, config.report.show_execution_time)?;
    sink.emit(&report)?;

    Ok(RunOutcome {
        summary: report.summary().clone(),
        report_path: sink.output().to_path_buf(),
    })
}

/// Loads the inputs and computes the report without emitting it.
pub fn build_report(cli: &Cli, show_execution_time: bool) -> AppResult<SalesReport> {
    let catalogue = load_json_file(&cli.price_catalogue)?;
    let sales = load_json_file(&cli.sales_record)?;

    if catalogue.is_empty() || sales.is_empty() {
        return Err(AppError::EmptyInput);
    }

    info!(
        catalogue_entries = catalogue.len(),
        sales_records = sales.len(),
        "Computing sales total"
    );

    let start = Instant::now();
    let summary = compute_total_from_json(&catalogue, &sales)?;
    let elapsed = start.elapsed();

    info!(
        total = summary.total().value(),
        matched = summary.matched_count(),
        unmatched = summary.unmatched().len(),
        elapsed_us = elapsed.as_micros() as u64,
        "Sales total computed"
    );
    for unmatched in summary.unmatched() {
        debug!(product = %unmatched.product, "Product not in price catalogue");
    }

    let report = SalesReport::new(summary);
    Ok(if show_execution_time {
        report.with_execution_time(elapsed)
    } else {
        report
    })
}
