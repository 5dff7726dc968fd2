use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "compute-sales")]
#[command(about = "Computes total sales from a price catalogue and a sales record")]
#[command(version)]
pub struct Cli {
    /// Price catalogue JSON file (array of {"title", "price"})
    pub price_catalogue: PathBuf,

    /// Sales record JSON file (array of {"Product", "Quantity"})
    pub sales_record: PathBuf,

    /// Report file path [default: SalesResults.txt]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Omit the execution time line from the report
    #[arg(long)]
    pub no_timing: bool,

    /// Do not print the report to the console
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
