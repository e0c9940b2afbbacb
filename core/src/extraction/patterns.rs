//! Declared pattern tables
//!
//! Every matcher the extractor uses is listed here. All patterns are
//! case-insensitive, and the ordering of the accession and section tables is
//! part of the extraction contract: adding a pattern means choosing its
//! priority explicitly.

use crate::types::{AccessionLabel, SectionKind};
use regex::Regex;
use std::sync::OnceLock;

// Identifier token following an accession label
const ACCESSION_TOKEN: &str = r"([A-Z0-9](?:[A-Z0-9\-/.]*[A-Z0-9])?)";

// "No", "No.", "Num", "Number", "#"
const NUMBER_WORD: &str = r"(?:no\b\.?|num\b\.?|number\b|#)[ \t]*[:#]?";

// Same, but punctuation is required so prose such as "case no evidence" is skipped
const STRICT_NUMBER_WORD: &str = r"(?:(?:no|num|number)\b\.?[ \t]*[:#]|(?:no|num)\.|#[ \t]*:?)";

// Accession label patterns, in priority order
const ACCESSION_NUMBER_LABEL: &str = r"\baccession[ \t]*";
const ACCESSION_LABEL: &str = r"\baccession[ \t]*[:#]";
const CASE_NUMBER_LABEL: &str = r"\bcase[ \t]*";
const PATHOLOGY_NUMBER_LABEL: &str = r"\b(?:surgical[ \t]+)?path(?:ology)?[ \t]*";

// Section header names, longest alternatives first
const SPECIMEN_HEADERS: &str = r"specimens?[ \t]+submitted|specimens?[ \t]+received|source[ \t]+of[ \t]+specimens?|specimens?";
const DIAGNOSIS_HEADERS: &str =
    r"(?:(?:final|pathologic(?:al)?|surgical[ \t]+pathology)[ \t]+)?diagnos[ie]s";
const MICROSCOPIC_HEADERS: &str =
    r"microscopic[ \t]+(?:description|findings|examination|exam)|microscopic|micro";
const CLINICAL_IMPRESSION_HEADERS: &str = r"clinical[ \t]+impressions?|clinical[ \t]+diagnosis";
const GROSS_HEADERS: &str = r"gross[ \t]+(?:description|examination|exam)|gross";
const CLINICAL_HISTORY_HEADERS: &str =
    r"clinical[ \t]+(?:history|information|data|notes?)|history";
const COMMENT_HEADERS: &str = r"comments?|notes?|addend(?:um|a)";

// Specimen marker at line start: [A], (A), Specimen A:, Part 2 -, Lesion B:, #1, A., A), 1.
const SPECIMEN_MARKER: &str = concat!(
    r"(?im)^[ \t]*(?:",
    r"\[[ \t]*(?P<bracket>[A-Z0-9]{1,3})[ \t]*\][ \t]*[.):\-]?",
    r"|\([ \t]*(?P<paren>[A-Z0-9]{1,2})[ \t]*\)[ \t]*[.:\-]?",
    r"|(?:specimen|part|lesion)(?:[ \t]+#?|[ \t]*#)[ \t]*(?P<named>[A-Z0-9]{1,3})[ \t]*[.):\-]",
    r"|#[ \t]*(?P<hash>[0-9]{1,2})[ \t]*[.):\-]?",
    r"|(?P<bare>[A-Z]|[0-9]{1,2})[ \t]*[.):](?:[ \t]|$)",
    r")[ \t]*",
);

/// Capture group names of [`specimen_marker`], in lookup order
pub const MARKER_GROUPS: [&str; 5] = ["bracket", "paren", "named", "hash", "bare"];

// Impression label inside a specimen block: "--" at line start, or Diagnosis:/Impression:/Dx:
const IMPRESSION_LABEL: &str = concat!(
    r"(?im)(?:^[ \t]*-{2,}[ \t]*",
    r"|\b(?:(?:final|pathologic(?:al)?|clinical)[ \t]+)?(?:diagnos[ie]s|impressions?|dx)",
    r"[ \t]*(?::|-+(?:[ \t]|$))[ \t]*)",
);

// Location before a spaced dash on the first line of a microscopic entry: "Cheek - "
const LOCATION_PREFIX: &str = r"\A[^\n]*?\S[ \t]+-+[ \t]+";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Failed to compile built-in pattern")
}

fn accession_regex(label: &str, number_word: &str) -> Regex {
    compile(&format!(
        r"(?i){}{}[ \t]*(?:\r?\n[ \t]*)?{}",
        label, number_word, ACCESSION_TOKEN
    ))
}

fn header_regex(names: &str) -> Regex {
    compile(&format!(
        r"(?im)^[ \t]*(?:{})[ \t]*(?::|-+(?:[ \t]|$))",
        names
    ))
}

/// Accession matchers in priority order
///
/// The first matcher that matches anywhere in the report wins.
pub fn accession_matchers() -> &'static [(AccessionLabel, Regex)] {
    static MATCHERS: OnceLock<Vec<(AccessionLabel, Regex)>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        AccessionLabel::PRIORITY
            .iter()
            .map(|label| {
                let regex = match label {
                    AccessionLabel::AccessionNumber => {
                        accession_regex(ACCESSION_NUMBER_LABEL, NUMBER_WORD)
                    }
                    AccessionLabel::Accession => accession_regex(ACCESSION_LABEL, ""),
                    AccessionLabel::CaseNumber => {
                        accession_regex(CASE_NUMBER_LABEL, STRICT_NUMBER_WORD)
                    }
                    AccessionLabel::PathologyNumber => {
                        accession_regex(PATHOLOGY_NUMBER_LABEL, STRICT_NUMBER_WORD)
                    }
                };
                (*label, regex)
            })
            .collect()
    })
}

/// Section header matchers, one per section kind
///
/// Headers are only recognized at line start and must be followed by a colon
/// or a dash run.
pub fn section_headers() -> &'static [(SectionKind, Regex)] {
    static HEADERS: OnceLock<Vec<(SectionKind, Regex)>> = OnceLock::new();
    HEADERS.get_or_init(|| {
        vec![
            (SectionKind::Specimen, header_regex(SPECIMEN_HEADERS)),
            (SectionKind::Diagnosis, header_regex(DIAGNOSIS_HEADERS)),
            (SectionKind::Microscopic, header_regex(MICROSCOPIC_HEADERS)),
            (
                SectionKind::ClinicalImpression,
                header_regex(CLINICAL_IMPRESSION_HEADERS),
            ),
            (SectionKind::Gross, header_regex(GROSS_HEADERS)),
            (
                SectionKind::ClinicalHistory,
                header_regex(CLINICAL_HISTORY_HEADERS),
            ),
            (SectionKind::Comment, header_regex(COMMENT_HEADERS)),
        ]
    })
}

/// Line-anchored specimen marker
pub fn specimen_marker() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(SPECIMEN_MARKER))
}

/// Impression label within a specimen block
pub fn impression_label() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(IMPRESSION_LABEL))
}

/// Location prefix of a microscopic entry
pub fn location_prefix() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(LOCATION_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(accession_matchers().len(), AccessionLabel::PRIORITY.len());
        assert_eq!(section_headers().len(), 7);
        let _ = specimen_marker();
        let _ = impression_label();
        let _ = location_prefix();
    }

    #[rstest]
    #[case("[A] Skin", "A")]
    #[case("  [ b ]  Skin", "b")]
    #[case("(2) Colon", "2")]
    #[case("Specimen A: Skin", "A")]
    #[case("Part #3 - Colon", "3")]
    #[case("#1- Skin", "1")]
    #[case("Lesion A: r/o BCC", "A")]
    #[case("A. Skin", "A")]
    #[case("B) Skin", "B")]
    #[case("c: Skin", "c")]
    #[case("12. Lymph node", "12")]
    fn test_marker_forms(#[case] line: &str, #[case] label: &str) {
        let caps = specimen_marker().captures(line).expect("marker");
        let found = MARKER_GROUPS
            .iter()
            .find_map(|name| caps.name(name))
            .map(|m| m.as_str());
        assert_eq!(found, Some(label));
    }

    #[rstest]
    #[case("Skin of left arm (A) shows a papule")]
    #[case("Specimens: skin")]
    #[case("Part of the lesion")]
    #[case("i.e. a papule")]
    #[case("Dr. Smith")]
    #[case("Lesion of the skin")]
    #[case("A papule")]
    fn test_marker_rejects_prose(#[case] line: &str) {
        assert!(specimen_marker().find(line).is_none(), "misfire on {line:?}");
    }

    #[rstest]
    #[case("MICROSCOPIC DESCRIPTION:", SectionKind::Microscopic)]
    #[case("  Microscopic :", SectionKind::Microscopic)]
    #[case("MICRO - text", SectionKind::Microscopic)]
    #[case("SPECIMEN SUBMITTED:", SectionKind::Specimen)]
    #[case("Final  Diagnosis:", SectionKind::Diagnosis)]
    #[case("CLINICAL IMPRESSION:", SectionKind::ClinicalImpression)]
    #[case("Gross Description:", SectionKind::Gross)]
    #[case("Clinical History:", SectionKind::ClinicalHistory)]
    #[case("Comment:", SectionKind::Comment)]
    fn test_header_forms(#[case] line: &str, #[case] kind: SectionKind) {
        let (_, regex) = section_headers()
            .iter()
            .find(|(k, _)| *k == kind)
            .expect("kind");
        assert!(regex.is_match(line), "{line:?} should be a {kind} header");
    }

    #[test]
    fn test_header_requires_line_start() {
        let (_, regex) = &section_headers()[2];
        assert!(!regex.is_match("see microscopic: above"));
        assert!(!regex.is_match("Microscopically unremarkable"));
    }

    #[rstest]
    #[case("DIAGNOSIS: Benign nevus.", "Benign nevus.")]
    #[case("Final diagnosis - Nevus", "Nevus")]
    #[case("  -- Seborrheic keratosis", "Seborrheic keratosis")]
    #[case("Dx: BCC", "BCC")]
    #[case("impression: r/o melanoma", "r/o melanoma")]
    fn test_impression_labels(#[case] text: &str, #[case] rest: &str) {
        let m = impression_label().find(text).expect("label");
        assert_eq!(&text[m.end()..], rest);
    }

    #[test]
    fn test_impression_label_ignores_hyphenated_words() {
        assert!(impression_label().find("diagnosis-related group").is_none());
    }
}
