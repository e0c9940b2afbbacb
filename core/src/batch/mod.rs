//! Batch driver
//!
//! Flattens a sequence of reports into one output row per (report, specimen)
//! pair, preserving input order and the row-count correspondence with the
//! source table.

mod driver;
mod row;

#[cfg(feature = "parallel")]
pub use driver::process_reports_parallel;
pub use driver::process_reports;
pub use row::{RawReport, ReportRow};
