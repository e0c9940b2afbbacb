use crate::types::{Specimen, StructuredRecord};

/// One input report together with its external row identifier
///
/// The identifier is opaque to the extractor and is copied verbatim onto
/// every output row. Absent and empty text are equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport<K> {
    /// Identifier of the source row
    pub row_id: K,

    /// Raw report text
    pub text: Option<String>,
}

impl<K> RawReport<K> {
    /// Creates a new RawReport
    pub fn new(row_id: K, text: Option<String>) -> Self {
        Self { row_id, text }
    }

    /// Returns the report text, treating absent text as empty
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// One flattened output row: a single specimen of a single report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ReportRow<K> {
    /// Identifier of the source row
    pub row_id: K,

    /// Accession number of the report
    pub accession_no: Option<String>,

    /// Specimen label
    pub specimen_id: Option<String>,

    /// Specimen description
    pub specimen_description: Option<String>,

    /// Diagnostic impression
    pub impression: Option<String>,

    /// Microscopic description
    pub microscopic_description: Option<String>,

    /// Clinical impression
    pub clinical_impression: Option<String>,
}

impl<K: Clone> ReportRow<K> {
    /// Names of the extracted columns, in [`ReportRow::fields`] order
    pub const COLUMNS: [&'static str; 6] = [
        "Accession No",
        "Specimen Identifier",
        "Specimen Description",
        "Impression",
        "Microscopic Description",
        "Clinical Impression",
    ];

    /// Flattens a record into one row per specimen
    ///
    /// A record without specimens still yields a single row carrying the
    /// accession number and empty specimen fields.
    pub fn from_record(row_id: &K, record: &StructuredRecord) -> Vec<Self> {
        let accession_no = record.accession_str().map(str::to_string);
        if record.specimens.is_empty() {
            return vec![Self::from_specimen(
                row_id.clone(),
                accession_no,
                &Specimen::default(),
            )];
        }

        record
            .specimens
            .iter()
            .map(|specimen| Self::from_specimen(row_id.clone(), accession_no.clone(), specimen))
            .collect()
    }

    fn from_specimen(row_id: K, accession_no: Option<String>, specimen: &Specimen) -> Self {
        Self {
            row_id,
            accession_no,
            specimen_id: specimen.label.as_ref().map(|l| l.as_str().to_string()),
            specimen_description: specimen.description.clone(),
            impression: specimen.impression.clone(),
            microscopic_description: specimen.microscopic.clone(),
            clinical_impression: specimen.clinical_impression.clone(),
        }
    }

    /// Extracted fields as cell text, absent values rendered empty
    pub fn fields(&self) -> [&str; 6] {
        [
            self.accession_no.as_deref().unwrap_or(""),
            self.specimen_id.as_deref().unwrap_or(""),
            self.specimen_description.as_deref().unwrap_or(""),
            self.impression.as_deref().unwrap_or(""),
            self.microscopic_description.as_deref().unwrap_or(""),
            self.clinical_impression.as_deref().unwrap_or(""),
        ]
    }
}
