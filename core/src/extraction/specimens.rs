use crate::types::{ExtractionPolicy, SpecimenLabel, UnlabeledSpecimens};
use log::trace;

use super::impression::split_impression;
use super::patterns::{specimen_marker, MARKER_GROUPS};

/// Text following one specimen marker, up to the next marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledBlock<'a> {
    pub label: SpecimenLabel,
    pub text: &'a str,
}

/// Text split at line-anchored specimen markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSplit<'a> {
    /// Text before the first marker
    pub lead_in: &'a str,

    /// Marker blocks in source order
    pub blocks: Vec<LabeledBlock<'a>>,
}

impl MarkerSplit<'_> {
    /// Checks whether the text was subdivided by at least one marker
    pub fn is_subdivided(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Splits text into marker-delimited blocks
///
/// Markers are only recognized at the start of a line, so labels cited inside
/// prose do not start a new block. Repeated labels stay separate blocks.
pub fn split_by_markers(text: &str) -> MarkerSplit<'_> {
    let markers: Vec<(usize, usize, SpecimenLabel)> = specimen_marker()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = MARKER_GROUPS
                .iter()
                .find_map(|name| caps.name(name))
                .and_then(|m| SpecimenLabel::new(m.as_str()))?;
            Some((whole.start(), whole.end(), label))
        })
        .collect();

    let lead_in_end = markers.first().map(|m| m.0).unwrap_or(text.len());
    let blocks = markers
        .iter()
        .enumerate()
        .map(|(i, (_, end, label))| {
            let block_end = markers.get(i + 1).map(|m| m.0).unwrap_or(text.len());
            LabeledBlock {
                label: label.clone(),
                text: &text[*end..block_end],
            }
        })
        .collect();

    MarkerSplit {
        lead_in: &text[..lead_in_end],
        blocks,
    }
}

/// Specimen found in the specimen region, before section assignment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecimenBlock {
    pub label: Option<SpecimenLabel>,
    pub description: Option<String>,
    pub impression: Option<String>,
}

/// Segments the specimen region into specimens
///
/// Each marker starts a new specimen. Without any marker the
/// [`UnlabeledSpecimens`] policy decides:
/// - `SingleImplicit`: the whole region is one unlabelled specimen
/// - `OnePerLine`: each non-empty line is a specimen labelled A, B, C, ...
///
/// The result always holds at least one specimen.
pub fn segment_specimens(region: &str, policy: &ExtractionPolicy) -> Vec<SpecimenBlock> {
    let split = split_by_markers(region);

    if split.is_subdivided() {
        trace!("Found {} specimen markers", split.blocks.len());
        return split
            .blocks
            .iter()
            .map(|block| {
                let fields = split_impression(block.text);
                SpecimenBlock {
                    label: Some(block.label.clone()),
                    description: fields.description,
                    impression: fields.impression,
                }
            })
            .collect();
    }

    let specimens: Vec<SpecimenBlock> = match policy.unlabeled_specimens {
        UnlabeledSpecimens::SingleImplicit => vec![implicit_specimen(region)],
        UnlabeledSpecimens::OnePerLine => region
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                let fields = split_impression(line);
                SpecimenBlock {
                    label: Some(SpecimenLabel::generated(i)),
                    description: fields.description,
                    impression: fields.impression,
                }
            })
            .collect(),
    };

    if specimens.is_empty() {
        vec![SpecimenBlock::default()]
    } else {
        specimens
    }
}

fn implicit_specimen(region: &str) -> SpecimenBlock {
    let fields = split_impression(region);
    SpecimenBlock {
        label: None,
        description: fields.description,
        impression: fields.impression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(blocks: &[SpecimenBlock]) -> Vec<Option<&str>> {
        blocks
            .iter()
            .map(|b| b.label.as_ref().map(|l| l.as_str()))
            .collect()
    }

    #[test]
    fn test_split_by_markers() {
        let split = split_by_markers("Accession: X\n[A] Skin\n[B] Colon\n");
        assert_eq!(split.lead_in, "Accession: X\n");
        assert_eq!(split.blocks.len(), 2);
        assert_eq!(split.blocks[0].label.as_str(), "A");
        assert_eq!(split.blocks[0].text, "Skin\n");
        assert_eq!(split.blocks[1].text, "Colon\n");
    }

    #[test]
    fn test_inline_citation_is_not_a_marker() {
        let split = split_by_markers("Skin with changes as in (A), see also B.\n");
        assert!(!split.is_subdivided());
    }

    #[test]
    fn test_two_specimens_with_impressions() {
        let region = "[A] Skin, arm.\nDIAGNOSIS: Nevus.\n[B] Skin, back.\nDIAGNOSIS: Keratosis.\n";
        let blocks = segment_specimens(region, &ExtractionPolicy::default());

        assert_eq!(labels(&blocks), vec![Some("A"), Some("B")]);
        assert_eq!(blocks[0].description.as_deref(), Some("Skin, arm."));
        assert_eq!(blocks[0].impression.as_deref(), Some("Nevus."));
        assert_eq!(blocks[1].description.as_deref(), Some("Skin, back."));
        assert_eq!(blocks[1].impression.as_deref(), Some("Keratosis."));
    }

    #[test]
    fn test_repeated_labels_stay_distinct() {
        let blocks = segment_specimens("[A] first\n[A] second\n", &ExtractionPolicy::default());
        assert_eq!(labels(&blocks), vec![Some("A"), Some("A")]);
        assert_eq!(blocks[1].description.as_deref(), Some("second"));
    }

    #[test]
    fn test_single_implicit_specimen() {
        let blocks = segment_specimens("Skin, left arm\nshave biopsy", &ExtractionPolicy::default());
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].label.is_none());
        assert_eq!(
            blocks[0].description.as_deref(),
            Some("Skin, left arm\nshave biopsy")
        );
    }

    #[test]
    fn test_one_specimen_per_line() {
        let policy = ExtractionPolicy::default().with_unlabeled_specimens(UnlabeledSpecimens::OnePerLine);
        let blocks = segment_specimens("Skin, left arm\n\nSkin, back\n", &policy);
        assert_eq!(labels(&blocks), vec![Some("A"), Some("B")]);
        assert_eq!(blocks[1].description.as_deref(), Some("Skin, back"));
    }

    #[test]
    fn test_empty_region_yields_one_empty_specimen() {
        for policy in [
            ExtractionPolicy::default(),
            ExtractionPolicy::default().with_unlabeled_specimens(UnlabeledSpecimens::OnePerLine),
        ] {
            let blocks = segment_specimens("  \n", &policy);
            assert_eq!(blocks, vec![SpecimenBlock::default()]);
        }
    }
}
