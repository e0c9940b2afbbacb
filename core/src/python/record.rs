//! Python wrappers for extraction results

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::enums::PyAccessionLabel;
use super::utils::option_str_to_py;
use crate::batch::ReportRow;
use crate::types::{Specimen, StructuredRecord};

/// One specimen with its description, impression and microscopic text
#[pyclass(name = "Specimen", module = "pathreport")]
#[derive(Clone)]
pub struct PySpecimen {
    pub(crate) inner: Specimen,
}

#[pymethods]
impl PySpecimen {
    /// Specimen label, or None for the implicit specimen
    #[getter]
    fn label(&self) -> Option<String> {
        self.inner.label.as_ref().map(|l| l.as_str().to_string())
    }

    #[getter]
    fn description(&self) -> Option<String> {
        self.inner.description.clone()
    }

    #[getter]
    fn impression(&self) -> Option<String> {
        self.inner.impression.clone()
    }

    #[getter]
    fn microscopic(&self) -> Option<String> {
        self.inner.microscopic.clone()
    }

    #[getter]
    fn clinical_impression(&self) -> Option<String> {
        self.inner.clinical_impression.clone()
    }

    /// Convert specimen to dictionary
    pub fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        let label = self.inner.label.as_ref().map(|l| l.as_str());
        dict.set_item("label", option_str_to_py(py, label))?;
        dict.set_item(
            "description",
            option_str_to_py(py, self.inner.description.as_deref()),
        )?;
        dict.set_item(
            "impression",
            option_str_to_py(py, self.inner.impression.as_deref()),
        )?;
        dict.set_item(
            "microscopic",
            option_str_to_py(py, self.inner.microscopic.as_deref()),
        )?;
        dict.set_item(
            "clinical_impression",
            option_str_to_py(py, self.inner.clinical_impression.as_deref()),
        )?;
        Ok(dict.unbind())
    }

    fn __repr__(&self) -> String {
        format!(
            "Specimen(label={:?}, description={:?})",
            self.label(),
            self.inner.description
        )
    }
}

/// Structured result of extracting one report
#[pyclass(name = "StructuredRecord", module = "pathreport")]
#[derive(Clone)]
pub struct PyStructuredRecord {
    pub(crate) inner: StructuredRecord,
}

#[pymethods]
impl PyStructuredRecord {
    /// Accession number (if found)
    #[getter]
    fn accession(&self) -> Option<String> {
        self.inner.accession_str().map(str::to_string)
    }

    /// Which accession label matched (if any)
    #[getter]
    fn accession_label(&self) -> Option<PyAccessionLabel> {
        self.inner.accession.as_ref().map(|a| a.label.into())
    }

    /// Specimens in source order
    #[getter]
    fn specimens(&self) -> Vec<PySpecimen> {
        self.inner
            .specimens
            .iter()
            .cloned()
            .map(PySpecimen::from)
            .collect()
    }

    /// Find the first specimen with the given label (case-insensitive)
    fn specimen(&self, label: &str) -> Option<PySpecimen> {
        self.inner.specimen(label).cloned().map(PySpecimen::from)
    }

    /// Whether nothing at all was extracted
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert record to dictionary
    fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("accession", option_str_to_py(py, self.inner.accession_str()))?;
        let specimens = self
            .specimens()
            .iter()
            .map(|s| s.to_dict(py))
            .collect::<PyResult<Vec<_>>>()?;
        dict.set_item("specimens", specimens)?;
        Ok(dict.unbind())
    }

    fn __len__(&self) -> usize {
        self.inner.specimens.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "StructuredRecord(accession={:?}, specimens={})",
            self.inner.accession_str(),
            self.inner.specimens.len()
        )
    }
}

/// One flattened output row of a batch run
#[pyclass(name = "ReportRow", module = "pathreport")]
#[derive(Clone)]
pub struct PyReportRow {
    pub(crate) inner: ReportRow<usize>,
}

#[pymethods]
impl PyReportRow {
    /// Position of the source report in the input
    #[getter]
    fn row_id(&self) -> usize {
        self.inner.row_id
    }

    #[getter]
    fn accession_no(&self) -> Option<String> {
        self.inner.accession_no.clone()
    }

    #[getter]
    fn specimen_id(&self) -> Option<String> {
        self.inner.specimen_id.clone()
    }

    #[getter]
    fn specimen_description(&self) -> Option<String> {
        self.inner.specimen_description.clone()
    }

    #[getter]
    fn impression(&self) -> Option<String> {
        self.inner.impression.clone()
    }

    #[getter]
    fn microscopic_description(&self) -> Option<String> {
        self.inner.microscopic_description.clone()
    }

    #[getter]
    fn clinical_impression(&self) -> Option<String> {
        self.inner.clinical_impression.clone()
    }

    /// Convert row to a dictionary keyed by output column name
    fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("row_id", self.inner.row_id)?;
        for (name, value) in ReportRow::<usize>::COLUMNS.iter().zip(self.inner.fields()) {
            dict.set_item(*name, value)?;
        }
        Ok(dict.unbind())
    }

    fn __repr__(&self) -> String {
        format!(
            "ReportRow(row_id={}, accession_no={:?}, specimen_id={:?})",
            self.inner.row_id, self.inner.accession_no, self.inner.specimen_id
        )
    }
}

impl From<Specimen> for PySpecimen {
    fn from(inner: Specimen) -> Self {
        Self { inner }
    }
}

impl From<StructuredRecord> for PyStructuredRecord {
    fn from(inner: StructuredRecord) -> Self {
        Self { inner }
    }
}

impl From<ReportRow<usize>> for PyReportRow {
    fn from(inner: ReportRow<usize>) -> Self {
        Self { inner }
    }
}
