use crate::extraction::impression::non_empty;
use crate::extraction::{
    assign_to_specimens, extract_accession, find_impression, microscopic_entry,
    segment_sections, segment_specimens, split_by_markers, strip_accession_lines,
    ReportSections,
};
use crate::types::{ExtractionPolicy, SectionKind, Specimen, SpecimenLabel, StructuredRecord};
use log::trace;

/// Main extractor for pathology report text
///
/// Extraction is a pure function of the report text and never fails: missing
/// labels and sections come back as `None` fields.
///
/// # Example
///
/// ```
/// use pathreport_core::ReportExtractor;
///
/// let text = "Accession: AB-123\n\
///             [A] Skin, left arm: papule.\n\
///             DIAGNOSIS: Benign nevus.\n\
///             MICROSCOPIC: Unremarkable epidermis.";
///
/// let record = ReportExtractor::extract(text);
///
/// assert_eq!(record.accession_str(), Some("AB-123"));
/// assert_eq!(record.specimens.len(), 1);
///
/// let specimen = &record.specimens[0];
/// assert_eq!(specimen.label.as_ref().unwrap().as_str(), "A");
/// assert_eq!(specimen.description.as_deref(), Some("Skin, left arm: papule."));
/// assert_eq!(specimen.impression.as_deref(), Some("Benign nevus."));
/// assert_eq!(specimen.microscopic.as_deref(), Some("Unremarkable epidermis."));
/// ```
pub struct ReportExtractor;

impl ReportExtractor {
    /// Extracts a structured record using the default policy
    pub fn extract(text: &str) -> StructuredRecord {
        Self::extract_with_policy(text, &ExtractionPolicy::default())
    }

    /// Extracts a structured record under an explicit policy
    ///
    /// # Algorithm
    ///
    /// 1. Normalize line endings
    /// 2. Extract the accession number (first matcher in priority order wins)
    /// 3. Segment the report into header-delimited sections
    /// 4. Segment the specimen region into specimens (at least one)
    /// 5. Assign diagnosis, microscopic and clinical impression sections to
    ///    specimens by label, or report-wide per policy
    pub fn extract_with_policy(text: &str, policy: &ExtractionPolicy) -> StructuredRecord {
        let text = normalize_line_endings(text);
        if text.trim().is_empty() {
            return StructuredRecord {
                accession: None,
                specimens: vec![Specimen::default()],
            };
        }

        let accession = extract_accession(&text);
        let sections = segment_sections(&text);
        let (region_kind, region) = specimen_region(&sections);
        trace!(
            "Specimen region from {}",
            region_kind.map(|k| k.simple_name()).unwrap_or("preamble")
        );

        let blocks = segment_specimens(&region, policy);
        let labels: Vec<Option<SpecimenLabel>> = blocks.iter().map(|b| b.label.clone()).collect();

        // A diagnosis section that supplied the specimens is not assigned a second time
        let diagnoses = if region_kind == Some(SectionKind::Diagnosis) {
            vec![None; labels.len()]
        } else {
            assign_to_specimens(
                &sections.body(SectionKind::Diagnosis),
                &labels,
                policy.report_level,
                |entry| find_impression(entry).or_else(|| non_empty(entry)),
            )
        };
        let microscopic = assign_to_specimens(
            &sections.body(SectionKind::Microscopic),
            &labels,
            policy.report_level,
            microscopic_entry,
        );
        let clinical = assign_to_specimens(
            &sections.body(SectionKind::ClinicalImpression),
            &labels,
            policy.report_level,
            non_empty,
        );

        let specimens = blocks
            .into_iter()
            .zip(diagnoses)
            .zip(microscopic)
            .zip(clinical)
            .map(|(((block, diagnosis), microscopic), clinical)| Specimen {
                label: block.label,
                description: block.description,
                impression: policy.finish_field(block.impression.or(diagnosis)),
                microscopic: policy.finish_field(microscopic),
                clinical_impression: policy.finish_field(clinical),
            })
            .collect();

        StructuredRecord {
            accession,
            specimens,
        }
    }
}

/// Picks the text holding the specimen list
///
/// First non-blank of: specimen section, preamble (without its accession
/// lines) when it carries specimen markers, diagnosis section, preamble.
fn specimen_region(sections: &ReportSections) -> (Option<SectionKind>, String) {
    let specimen = sections.body(SectionKind::Specimen);
    if !specimen.is_empty() {
        return (Some(SectionKind::Specimen), specimen);
    }

    let preamble = strip_accession_lines(&sections.preamble);
    if split_by_markers(&preamble).is_subdivided() {
        return (None, preamble);
    }

    let diagnosis = sections.body(SectionKind::Diagnosis);
    if !diagnosis.is_empty() {
        return (Some(SectionKind::Diagnosis), diagnosis);
    }

    (None, preamble)
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldTruncation, ReportLevelFallback, UnlabeledSpecimens};

    const TWO_SPECIMENS: &str = "Accession No: S23-00042\n\
        [A] Skin, left arm, shave.\n\
        DIAGNOSIS: Compound nevus.\n\
        [B] Skin, back, punch.\n\
        DIAGNOSIS: Seborrheic keratosis.\n\
        MICROSCOPIC: Sections show skin with the described lesions.";

    const SECTIONED: &str = "Accession No: S24-0100\n\
        SPECIMEN SUBMITTED:\n\
        A. Skin, right cheek\n\
        B. Skin, left shoulder\n\
        \n\
        FINAL DIAGNOSIS:\n\
        A. Skin, right cheek, shave:\n\
        \x20 -- Basal cell carcinoma, nodular type.\n\
        B. Skin, left shoulder, punch:\n\
        \x20 -- Dermal nevus.\n\
        \n\
        MICROSCOPIC DESCRIPTION:\n\
        A. Nests of basaloid cells with peripheral palisading.\n\
        B. Nests of bland melanocytes in the dermis.\n\
        \n\
        CLINICAL IMPRESSION:\n\
        A) r/o BCC\n\
        B) r/o nevus\n";

    fn label_of(specimen: &Specimen) -> Option<&str> {
        specimen.label.as_ref().map(|l| l.as_str())
    }

    #[test]
    fn test_two_specimens_share_report_level_microscopic() {
        let record = ReportExtractor::extract(TWO_SPECIMENS);

        assert_eq!(record.accession_str(), Some("S23-00042"));
        assert_eq!(record.specimens.len(), 2);

        let (a, b) = (&record.specimens[0], &record.specimens[1]);
        assert_eq!(label_of(a), Some("A"));
        assert_eq!(label_of(b), Some("B"));
        assert_eq!(a.description.as_deref(), Some("Skin, left arm, shave."));
        assert_eq!(b.description.as_deref(), Some("Skin, back, punch."));
        assert_eq!(a.impression.as_deref(), Some("Compound nevus."));
        assert_eq!(b.impression.as_deref(), Some("Seborrheic keratosis."));
        assert_eq!(a.microscopic, b.microscopic);
        assert_eq!(
            a.microscopic.as_deref(),
            Some("Sections show skin with the described lesions.")
        );
    }

    #[test]
    fn test_sectioned_report_assigns_by_label() {
        let record = ReportExtractor::extract(SECTIONED);

        assert_eq!(record.accession_str(), Some("S24-0100"));
        assert_eq!(record.specimens.len(), 2);

        let a = record.specimen("A").unwrap();
        assert_eq!(a.description.as_deref(), Some("Skin, right cheek"));
        assert_eq!(
            a.impression.as_deref(),
            Some("Basal cell carcinoma, nodular type.")
        );
        assert_eq!(
            a.microscopic.as_deref(),
            Some("Nests of basaloid cells with peripheral palisading.")
        );
        assert_eq!(a.clinical_impression.as_deref(), Some("r/o BCC"));

        let b = record.specimen("B").unwrap();
        assert_eq!(b.impression.as_deref(), Some("Dermal nevus."));
        assert_eq!(
            b.microscopic.as_deref(),
            Some("Nests of bland melanocytes in the dermis.")
        );
        assert_eq!(b.clinical_impression.as_deref(), Some("r/o nevus"));
    }

    #[test]
    fn test_empty_input_yields_one_empty_specimen() {
        for text in ["", "   \n\t"] {
            let record = ReportExtractor::extract(text);
            assert!(record.accession.is_none());
            assert_eq!(record.specimens, vec![Specimen::default()]);
            assert!(record.is_empty());
        }
    }

    #[test]
    fn test_missing_accession_is_not_fatal() {
        let record = ReportExtractor::extract("[A] Skin, arm.\nDIAGNOSIS: Nevus.");
        assert!(record.accession.is_none());
        assert_eq!(record.specimens.len(), 1);
        assert_eq!(record.specimens[0].impression.as_deref(), Some("Nevus."));
    }

    #[test]
    fn test_unlabeled_report_is_single_implicit_specimen() {
        let text = "Accession: Q-1\nSkin, left arm, shave biopsy.\nMICROSCOPIC: Benign.";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 1);
        let specimen = &record.specimens[0];
        assert!(specimen.label.is_none());
        assert_eq!(
            specimen.description.as_deref(),
            Some("Skin, left arm, shave biopsy.")
        );
        assert_eq!(specimen.microscopic.as_deref(), Some("Benign."));
    }

    #[test]
    fn test_one_per_line_policy() {
        let text = "SPECIMEN SUBMITTED:\nSkin, left arm\nSkin, back\n\nMICROSCOPIC: Benign.";
        let policy =
            ExtractionPolicy::default().with_unlabeled_specimens(UnlabeledSpecimens::OnePerLine);
        let record = ReportExtractor::extract_with_policy(text, &policy);

        assert_eq!(record.specimens.len(), 2);
        assert_eq!(label_of(&record.specimens[0]), Some("A"));
        assert_eq!(label_of(&record.specimens[1]), Some("B"));
        assert_eq!(record.specimens[1].description.as_deref(), Some("Skin, back"));
        assert_eq!(record.specimens[1].microscopic.as_deref(), Some("Benign."));
    }

    #[test]
    fn test_leave_empty_policy() {
        let policy =
            ExtractionPolicy::default().with_report_level(ReportLevelFallback::LeaveEmpty);
        let record = ReportExtractor::extract_with_policy(TWO_SPECIMENS, &policy);
        assert!(record.specimens.iter().all(|s| s.microscopic.is_none()));
        assert_eq!(
            record.specimens[0].impression.as_deref(),
            Some("Compound nevus.")
        );
    }

    #[test]
    fn test_first_line_truncation() {
        let text = "[A] Skin\nDIAGNOSIS: Nevus.\nSee comment.\nMICROSCOPIC: Line one.\nLine two.";
        let policy = ExtractionPolicy::default().with_truncation(FieldTruncation::FirstLine);
        let record = ReportExtractor::extract_with_policy(text, &policy);

        let specimen = &record.specimens[0];
        assert_eq!(specimen.impression.as_deref(), Some("Nevus."));
        assert_eq!(specimen.microscopic.as_deref(), Some("Line one."));
    }

    #[test]
    fn test_diagnosis_section_supplies_specimens() {
        let text = "Accession: D-9\nDIAGNOSIS:\nA. Colon, biopsy:\n -- Tubular adenoma.\n";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 1);
        let a = &record.specimens[0];
        assert_eq!(label_of(a), Some("A"));
        assert_eq!(a.description.as_deref(), Some("Colon, biopsy:"));
        assert_eq!(a.impression.as_deref(), Some("Tubular adenoma."));
    }

    #[test]
    fn test_diagnosis_label_on_its_own_line() {
        let text = "Accession: AB-1\n\
            [A] Skin, left arm\n\
            DIAGNOSIS:\n\
            Benign nevus.\n\
            MICROSCOPIC: Unremarkable.";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 1);
        let a = &record.specimens[0];
        assert_eq!(label_of(a), Some("A"));
        assert_eq!(a.description.as_deref(), Some("Skin, left arm"));
        assert_eq!(a.impression.as_deref(), Some("Benign nevus."));
        assert_eq!(a.microscopic.as_deref(), Some("Unremarkable."));
    }

    #[test]
    fn test_each_specimen_keeps_its_own_line_diagnosis() {
        let text = "Accession: AB-2\n\
            [A] Skin, arm\n\
            DIAGNOSIS:\n\
            Nevus.\n\
            [B] Colon\n\
            DIAGNOSIS:\n\
            Polyp.\n\
            MICROSCOPIC: Unremarkable.";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 2);
        let (a, b) = (&record.specimens[0], &record.specimens[1]);
        assert_eq!(label_of(a), Some("A"));
        assert_eq!(a.description.as_deref(), Some("Skin, arm"));
        assert_eq!(a.impression.as_deref(), Some("Nevus."));
        assert_eq!(label_of(b), Some("B"));
        assert_eq!(b.description.as_deref(), Some("Colon"));
        assert_eq!(b.impression.as_deref(), Some("Polyp."));
    }

    #[test]
    fn test_preamble_specimens_with_diagnosis_section() {
        let text = "Accession: X-3\n[A] Skin\n[B] Colon\n\nDIAGNOSIS:\nA. Nevus.\nB. Polyp.\n";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 2);
        assert_eq!(record.specimens[0].description.as_deref(), Some("Skin"));
        assert_eq!(record.specimens[0].impression.as_deref(), Some("Nevus."));
        assert_eq!(record.specimens[1].description.as_deref(), Some("Colon"));
        assert_eq!(record.specimens[1].impression.as_deref(), Some("Polyp."));
    }

    #[test]
    fn test_clinical_impression_by_lesion() {
        let text = "SPECIMEN SUBMITTED:\nA. Skin\nB. Skin\n\n\
            CLINICAL IMPRESSION:\nLesion A: r/o BCC\nLesion B: r/o nevus\n";
        let record = ReportExtractor::extract(text);

        assert_eq!(record.specimens.len(), 2);
        assert_eq!(record.specimens[0].clinical_impression.as_deref(), Some("r/o BCC"));
        assert_eq!(record.specimens[1].clinical_impression.as_deref(), Some("r/o nevus"));
    }

    #[test]
    fn test_microscopic_location_prefix_is_dropped() {
        let text = "SPECIMEN SUBMITTED:\nA. Skin, cheek\nB. Skin, back\n\n\
            MICROSCOPIC DESCRIPTION:\n\
            A. Cheek - Nests of basaloid cells.\n\
            B. Back - Bland nevus cells.\n";
        let record = ReportExtractor::extract(text);

        assert_eq!(
            record.specimens[0].microscopic.as_deref(),
            Some("Nests of basaloid cells.")
        );
        assert_eq!(
            record.specimens[1].microscopic.as_deref(),
            Some("Bland nevus cells.")
        );
    }

    #[test]
    fn test_empty_accession_label_does_not_capture_header() {
        let text = "Accession No:\n\nSPECIMEN SUBMITTED:\nA. Skin";
        let record = ReportExtractor::extract(text);
        assert!(record.accession.is_none());
        assert_eq!(label_of(&record.specimens[0]), Some("A"));
    }

    #[test]
    fn test_windows_line_endings() {
        let text = "Accession: AB-1\r\n[A] Skin\r\nDIAGNOSIS: Nevus.\r\nMICROSCOPIC: Benign.";
        let record = ReportExtractor::extract(text);
        assert_eq!(record.specimens[0].description.as_deref(), Some("Skin"));
        assert_eq!(record.specimens[0].microscopic.as_deref(), Some("Benign."));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        for text in [TWO_SPECIMENS, SECTIONED, "", "garbage ::: [[ ))"] {
            assert_eq!(ReportExtractor::extract(text), ReportExtractor::extract(text));
        }
    }

    #[test]
    fn test_malformed_input_always_yields_a_specimen() {
        for text in [
            "::::",
            "[",
            "A.",
            "DIAGNOSIS:",
            "MICROSCOPIC:\n\n",
            "Accession:",
            "-- -- --",
            "\u{feff}[A]",
        ] {
            let record = ReportExtractor::extract(text);
            assert!(!record.specimens.is_empty(), "no specimen for {text:?}");
        }
    }
}
