//! # Report Sink
//!
//! Sends a rendered [`SalesReport`] to the console and to the report file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sales_core::SalesReport;
use tracing::info;

use crate::config::ReportSettings;
use crate::error::{AppError, AppResult};

/// Writes reports according to [`ReportSettings`].
#[derive(Debug, Clone)]
pub struct ReportSink {
    output: PathBuf,
    quiet: bool,
}

impl ReportSink {
    pub fn new(settings: &ReportSettings) -> Self {
        ReportSink {
            output: settings.output.clone(),
            quiet: settings.quiet,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Prints the report (unless quiet), writes the file, then confirms.
    pub fn emit(&self, report: &SalesReport) -> AppResult<()> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.emit_to(report, &mut console)
    }

    /// Same as [`emit`](Self::emit) with an explicit console writer.
    pub fn emit_to<W: Write>(&self, report: &SalesReport, console: &mut W) -> AppResult<()> {
        if !self.quiet {
            // A closed stdout must not stop the report file from being written
            let _ = console.write_all(report.render_console().as_bytes());
        }

        self.write_file(report)?;

        if !self.quiet {
            let _ = writeln!(
                console,
                "\n{} has been generated successfully.",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Creates or truncates the report file.
    pub fn write_file(&self, report: &SalesReport) -> AppResult<()> {
        std::fs::write(&self.output, report.render()).map_err(|source| AppError::ReportWrite {
            path: self.output.clone(),
            source,
        })?;

        info!(path = ?self.output, "Report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::{compute_total, CatalogueEntry, SaleRecord};

    fn report() -> SalesReport {
        SalesReport::new(compute_total(
            &[CatalogueEntry::new("Widget", 2.5)],
            &[SaleRecord::new("Widget", 4.0), SaleRecord::new("Gadget", 1.0)],
        ))
    }

    fn settings(output: PathBuf, quiet: bool) -> ReportSettings {
        ReportSettings {
            output,
            show_execution_time: false,
            quiet,
        }
    }

    #[test]
    fn test_emit_writes_console_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SalesResults.txt");
        let sink = ReportSink::new(&settings(path.clone(), false));

        let mut console = Vec::new();
        sink.emit_to(&report(), &mut console).unwrap();

        let file = std::fs::read_to_string(&path).unwrap();
        assert_eq!(file, report().render());

        let console = String::from_utf8(console).unwrap();
        assert!(console.starts_with("\n--- Sales Report ---\n"));
        assert!(console.ends_with(&format!(
            "\n{} has been generated successfully.\n",
            path.display()
        )));
    }

    #[test]
    fn test_quiet_writes_only_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let sink = ReportSink::new(&settings(path.clone(), true));

        let mut console = Vec::new();
        sink.emit_to(&report(), &mut console).unwrap();

        assert!(console.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        ReportSink::new(&settings(path.clone(), true))
            .write_file(&report())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report().render());
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = ReportSink::new(&settings(path, true))
            .write_file(&report())
            .unwrap_err();
        assert!(matches!(err, AppError::ReportWrite { .. }));
    }
}
