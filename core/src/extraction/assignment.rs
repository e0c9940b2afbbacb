use crate::types::{ReportLevelFallback, SpecimenLabel};
use log::trace;

use super::impression::non_empty;
use super::specimens::split_by_markers;

/// Assigns the text of one section to each specimen
///
/// # Algorithm
///
/// 1. An empty section assigns nothing
/// 2. A section subdivided by specimen markers is assigned entry by entry:
///    - an entry goes to the specimen(s) carrying the same label; the k-th
///      specimen with a repeated label takes the k-th such entry, or the last
///      one when there are fewer entries
///    - a numeric entry label `n` that names no specimen goes to the n-th specimen
///    - an unlabelled (implicit) specimen receives the whole section
/// 3. A section without markers is a report-level finding, handled by the
///    [`ReportLevelFallback`] policy
///
/// `entry_text` turns the raw text of one subsection into the assigned value.
pub fn assign_to_specimens<F>(
    section: &str,
    labels: &[Option<SpecimenLabel>],
    fallback: ReportLevelFallback,
    entry_text: F,
) -> Vec<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(whole) = non_empty(section) else {
        return vec![None; labels.len()];
    };

    let split = split_by_markers(section);
    if !split.is_subdivided() {
        return match fallback {
            ReportLevelFallback::Broadcast => vec![Some(whole); labels.len()],
            ReportLevelFallback::LeaveEmpty => vec![None; labels.len()],
        };
    }

    let entries: Vec<(SpecimenLabel, Option<String>)> = split
        .blocks
        .iter()
        .map(|block| (block.label.clone(), entry_text(block.text)))
        .collect();

    labels
        .iter()
        .enumerate()
        .map(|(index, label)| match label {
            None => Some(whole.clone()),
            Some(label) => {
                let occurrence = labels[..index]
                    .iter()
                    .filter(|l| l.as_ref() == Some(label))
                    .count();
                // A matching but empty entry still counts as a match
                let value = match entry_for_label(&entries, label, occurrence) {
                    Some(found) => found,
                    None => entry_for_ordinal(&entries, labels, index),
                };
                trace!("Specimen {} assigned: {}", label, value.is_some());
                value
            }
        })
        .collect()
}

fn entry_for_label(
    entries: &[(SpecimenLabel, Option<String>)],
    label: &SpecimenLabel,
    occurrence: usize,
) -> Option<Option<String>> {
    let matching: Vec<&Option<String>> = entries
        .iter()
        .filter(|(l, _)| l == label)
        .map(|(_, text)| text)
        .collect();

    matching
        .get(occurrence)
        .or(matching.last())
        .map(|text| (*text).clone())
}

fn entry_for_ordinal(
    entries: &[(SpecimenLabel, Option<String>)],
    labels: &[Option<SpecimenLabel>],
    index: usize,
) -> Option<String> {
    entries
        .iter()
        .find(|(entry_label, _)| {
            entry_label.ordinal() == Some(index + 1)
                && !labels.iter().any(|l| l.as_ref() == Some(entry_label))
        })
        .and_then(|(_, text)| text.clone())
}
