use super::{AccessionLabel, SpecimenLabel};
use std::fmt;

/// Accession number found in a report header
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AccessionNumber {
    /// The identifier token, e.g. `S23-00123`
    pub value: String,

    /// Which label variant matched
    pub label: AccessionLabel,
}

impl AccessionNumber {
    /// Creates a new AccessionNumber
    pub fn new(value: impl Into<String>, label: AccessionLabel) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }

    /// Returns the identifier token
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One specimen of a report with the fields assigned to it
///
/// Every field is `None` when the corresponding label or section was not found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Specimen {
    /// Specimen label; `None` for the implicit specimen of an unlabelled report
    pub label: Option<SpecimenLabel>,

    /// Free-text specimen description
    pub description: Option<String>,

    /// Diagnostic impression
    pub impression: Option<String>,

    /// Microscopic description
    pub microscopic: Option<String>,

    /// Clinical impression
    pub clinical_impression: Option<String>,
}

impl Specimen {
    /// Checks whether every field of the specimen is absent
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.description.is_none()
            && self.impression.is_none()
            && self.microscopic.is_none()
            && self.clinical_impression.is_none()
    }
}

/// Structured result of extracting one pathology report
///
/// Created in a single extraction pass and never mutated afterwards.
/// Specimens appear in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct StructuredRecord {
    /// Accession number, if any recognized label was present
    pub accession: Option<AccessionNumber>,

    /// Specimens in the order their markers appear in the text
    pub specimens: Vec<Specimen>,
}

impl StructuredRecord {
    /// Returns the accession number text, if present
    pub fn accession_str(&self) -> Option<&str> {
        self.accession.as_ref().map(|a| a.as_str())
    }

    /// Checks if no field at all was extracted
    pub fn is_empty(&self) -> bool {
        self.accession.is_none() && self.specimens.iter().all(Specimen::is_empty)
    }

    /// Finds the first specimen carrying the given label
    pub fn specimen(&self, label: &str) -> Option<&Specimen> {
        let wanted = SpecimenLabel::new(label)?;
        self.specimens
            .iter()
            .find(|s| s.label.as_ref() == Some(&wanted))
    }
}
