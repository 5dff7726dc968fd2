//! # compute-sales
//!
//! Command-line front end for [`sales_core`]: reads a price catalogue and a
//! sales record from JSON files, prints a sales report and writes it to a
//! report file.
//!
//! ```text
//! compute-sales priceCatalogue.json salesRecord.json
//!
//! --- Sales Report ---
//! Total Sales: $2481.86
//! Execution Time: 0.0001 seconds
//!
//! SalesResults.txt has been generated successfully.
//! ```
//!
//! Process exit codes are decided only in `main.rs`, from
//! [`AppError::exit_code`](error::AppError::exit_code).

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod sink;

pub use app::{run, RunOutcome};
pub use error::{AppError, AppResult};
