//! Python wrapper for ExtractionPolicy

use pyo3::prelude::*;

use super::enums::{PyFieldTruncation, PyReportLevelFallback, PyUnlabeledSpecimens};
use super::macros::impl_py_from;
use crate::types::ExtractionPolicy;

/// Policy decisions applied on top of pattern matching
///
/// Example:
///     >>> from pathreport import ExtractionPolicy, UnlabeledSpecimens
///     >>> policy = ExtractionPolicy(unlabeled_specimens=UnlabeledSpecimens.ONE_PER_LINE)
#[pyclass(name = "ExtractionPolicy", module = "pathreport")]
#[derive(Clone, Debug)]
pub struct PyExtractionPolicy {
    pub(crate) inner: ExtractionPolicy,
}

#[pymethods]
impl PyExtractionPolicy {
    #[new]
    #[pyo3(signature = (unlabeled_specimens=None, report_level=None, truncation=None))]
    fn new(
        unlabeled_specimens: Option<PyUnlabeledSpecimens>,
        report_level: Option<PyReportLevelFallback>,
        truncation: Option<PyFieldTruncation>,
    ) -> Self {
        let defaults = ExtractionPolicy::default();
        Self {
            inner: ExtractionPolicy {
                unlabeled_specimens: unlabeled_specimens
                    .map(Into::into)
                    .unwrap_or(defaults.unlabeled_specimens),
                report_level: report_level
                    .map(Into::into)
                    .unwrap_or(defaults.report_level),
                truncation: truncation.map(Into::into).unwrap_or(defaults.truncation),
            },
        }
    }

    #[staticmethod]
    fn default() -> Self {
        Self {
            inner: ExtractionPolicy::default(),
        }
    }

    #[getter]
    fn unlabeled_specimens(&self) -> PyUnlabeledSpecimens {
        self.inner.unlabeled_specimens.into()
    }

    #[getter]
    fn report_level(&self) -> PyReportLevelFallback {
        self.inner.report_level.into()
    }

    #[getter]
    fn truncation(&self) -> PyFieldTruncation {
        self.inner.truncation.into()
    }

    fn __repr__(&self) -> String {
        format!(
            "ExtractionPolicy(unlabeled_specimens={}, report_level={}, truncation={})",
            self.inner.unlabeled_specimens.simple_name(),
            self.inner.report_level.simple_name(),
            self.inner.truncation.simple_name()
        )
    }
}

impl_py_from!(PyExtractionPolicy, ExtractionPolicy);

/// Resolves an optional Python policy argument
pub(crate) fn resolve_policy(policy: Option<PyExtractionPolicy>) -> ExtractionPolicy {
    policy.map(Into::into).unwrap_or_default()
}
