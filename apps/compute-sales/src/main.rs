use clap::Parser;
use compute_sales::cli::Cli;
use compute_sales::error::{exit_code, AppError};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            debug!(error = ?e, "Run failed");
            eprintln!("Error: {e}");
            match e.downcast_ref::<AppError>() {
                Some(app_err) => ExitCode::from(app_err.exit_code() as u8),
                None => ExitCode::from(exit_code::GENERAL_ERROR as u8),
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let outcome = compute_sales::run(cli)?;
    debug!(
        total = outcome.summary.total().value(),
        path = ?outcome.report_path,
        "Done"
    );
    Ok(())
}

/// Initializes the tracing subscriber on stderr, leaving stdout to the
/// report.
///
/// ## Log Levels
/// - Default: `warn`
/// - `--verbose`: `debug` for this workspace's crates
/// - `RUST_LOG` overrides both
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,compute_sales=debug,sales_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
