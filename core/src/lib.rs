pub mod api;
pub mod batch;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod table;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::ReportExtractor;
#[cfg(feature = "parallel")]
pub use batch::process_reports_parallel;
pub use batch::{process_reports, RawReport, ReportRow};
pub use cli::report::TextReport;
pub use error::{ReportError, Result};
pub use table::ReportTable;
pub use types::*;
