use crate::api::ReportExtractor;
use crate::batch::row::{RawReport, ReportRow};
use crate::types::ExtractionPolicy;
use log::debug;

/// Extracts every report and flattens the results
///
/// Output rows follow input order, and every input row is represented by at
/// least one output row.
///
/// # Example
///
/// ```
/// use pathreport_core::{process_reports, ExtractionPolicy, RawReport};
///
/// let reports = vec![
///     RawReport::new(0, Some("Accession: S1\n[A] Skin\n[B] Colon".to_string())),
///     RawReport::new(1, None),
/// ];
///
/// let rows = process_reports(&reports, &ExtractionPolicy::default());
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].row_id, 1);
/// assert_eq!(rows[2].accession_no, None);
/// ```
pub fn process_reports<K: Clone>(
    reports: &[RawReport<K>],
    policy: &ExtractionPolicy,
) -> Vec<ReportRow<K>> {
    reports
        .iter()
        .enumerate()
        .flat_map(|(position, report)| process_one(position, report, policy))
        .collect()
}

/// Parallel variant of [`process_reports`] with identical output
///
/// Reports are extracted concurrently; rows are collected in input order.
#[cfg(feature = "parallel")]
pub fn process_reports_parallel<K: Clone + Send + Sync>(
    reports: &[RawReport<K>],
    policy: &ExtractionPolicy,
) -> Vec<ReportRow<K>> {
    use rayon::prelude::*;

    let per_report: Vec<Vec<ReportRow<K>>> = reports
        .par_iter()
        .enumerate()
        .map(|(position, report)| process_one(position, report, policy))
        .collect();

    per_report.into_iter().flatten().collect()
}

fn process_one<K: Clone>(
    position: usize,
    report: &RawReport<K>,
    policy: &ExtractionPolicy,
) -> Vec<ReportRow<K>> {
    let record = ReportExtractor::extract_with_policy(report.text(), policy);
    debug!(
        "Report {}: accession {}, {} specimen(s)",
        position,
        record.accession_str().unwrap_or("<none>"),
        record.specimens.len()
    );
    ReportRow::from_record(&report.row_id, &record)
}
