//! # Report Rendering
//!
//! Turns a [`SalesSummary`] into report text. Writing the text anywhere is
//! the caller's job.
//!
//! ## Layout
//! ```text
//! --- Sales Report ---
//! Total Sales: $2481.86
//! Execution Time: 0.0001 seconds        ← only when a duration is attached
//!
//! Warnings:                             ← only when there are warnings
//! Warning: Product 'Elotes' not found in price catalogue.
//! ```

use std::fmt::Write as _;
use std::time::Duration;

use crate::calculator::SalesSummary;

/// First line of every report.
pub const REPORT_HEADER: &str = "--- Sales Report ---";

/// A summary plus the optional execution time, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    summary: SalesSummary,
    execution_time: Option<Duration>,
}

impl SalesReport {
    pub fn new(summary: SalesSummary) -> Self {
        SalesReport {
            summary,
            execution_time: None,
        }
    }

    /// Attaches the measured computation time.
    pub fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = Some(elapsed);
        self
    }

    pub fn summary(&self) -> &SalesSummary {
        &self.summary
    }

    pub fn execution_time(&self) -> Option<Duration> {
        self.execution_time
    }

    /// Report body as written to the report file.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::{compute_total, CatalogueEntry, SaleRecord, SalesReport};
    ///
    /// let summary = compute_total(
    ///     &[CatalogueEntry::new("Widget", 2.5)],
    ///     &[SaleRecord::new("Widget", 4.0), SaleRecord::new("Gadget", 1.0)],
    /// );
    ///
    /// assert_eq!(
    ///     SalesReport::new(summary).render(),
    ///     "--- Sales Report ---\n\
    ///      Total Sales: $10.00\n\
    ///      \n\
    ///      Warnings:\n\
    ///      Warning: Product 'Gadget' not found in price catalogue.\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "{REPORT_HEADER}");
        let _ = writeln!(out, "Total Sales: {}", self.summary.total());

        if let Some(elapsed) = self.execution_time {
            let _ = writeln!(out, "Execution Time: {:.4} seconds", elapsed.as_secs_f64());
        }

        if self.summary.has_warnings() {
            out.push_str("\nWarnings:\n");
            for warning in self.summary.unmatched() {
                let _ = writeln!(out, "{warning}");
            }
        }

        out
    }

    /// Report as printed to the console: the file body after a blank line.
    pub fn render_console(&self) -> String {
        format!("\n{}", self.render())
    }
}
