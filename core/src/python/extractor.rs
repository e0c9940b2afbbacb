//! Python wrapper for ReportExtractor

use pyo3::prelude::*;

use super::policy::{resolve_policy, PyExtractionPolicy};
use super::record::PyStructuredRecord;
use super::utils::path_to_pathbuf;

/// Main extractor for pathology report text
///
/// Extraction never raises: missing labels and sections come back as None.
#[pyclass(name = "ReportExtractor", module = "pathreport")]
pub struct PyReportExtractor;

#[pymethods]
impl PyReportExtractor {
    /// Extract a structured record from report text
    ///
    /// Args:
    ///     text: Raw report text
    ///     policy: Optional ExtractionPolicy (default policy if omitted)
    ///
    /// Returns:
    ///     StructuredRecord: Accession number and specimens
    ///
    /// Example:
    ///     >>> from pathreport import ReportExtractor
    ///     >>> record = ReportExtractor.extract("Accession: AB-123\n[A] Skin")
    ///     >>> record.accession
    ///     'AB-123'
    #[staticmethod]
    #[pyo3(signature = (text, policy=None))]
    fn extract(
        py: Python,
        text: &str,
        policy: Option<PyExtractionPolicy>,
    ) -> PyStructuredRecord {
        let policy = resolve_policy(policy);
        let text = text.to_string();
        py.allow_threads(|| crate::api::ReportExtractor::extract_with_policy(&text, &policy))
            .into()
    }

    /// Extract a structured record from a plain-text report file
    ///
    /// Invalid UTF-8 sequences are replaced.
    ///
    /// Raises:
    ///     OSError: If the file cannot be read
    #[staticmethod]
    #[pyo3(signature = (path, policy=None))]
    fn extract_from_file(
        path: &Bound<'_, PyAny>,
        policy: Option<PyExtractionPolicy>,
    ) -> PyResult<PyStructuredRecord> {
        let path_buf = path_to_pathbuf(path)?;

        let bytes = std::fs::read(&path_buf).map_err(|e| {
            pyo3::exceptions::PyIOError::new_err(format!("Failed to read report file: {}", e))
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let policy = resolve_policy(policy);
        Ok(crate::api::ReportExtractor::extract_with_policy(&text, &policy).into())
    }
}
