use super::patterns::{impression_label, location_prefix};

/// Description and impression split out of one specimen block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockFields {
    pub description: Option<String>,
    pub impression: Option<String>,
}

/// Splits a specimen block at its first impression label
///
/// Text before the label is the description; everything after it, up to the
/// end of the block, is the impression. Without a label the whole block is
/// the description.
pub fn split_impression(block: &str) -> BlockFields {
    match impression_label().find(block) {
        Some(m) => BlockFields {
            description: non_empty(&block[..m.start()]),
            impression: non_empty(&block[m.end()..]),
        },
        None => BlockFields {
            description: non_empty(block),
            impression: None,
        },
    }
}

/// Returns the text following the first impression label, if any
pub fn find_impression(block: &str) -> Option<String> {
    impression_label()
        .find(block)
        .and_then(|m| non_empty(&block[m.end()..]))
}

/// Text of one microscopic entry without its location prefix
///
/// `Cheek - Nests of basaloid cells.` yields `Nests of basaloid cells.`.
/// Hyphenated words are not split; an entry without a spaced dash is kept whole.
pub fn microscopic_entry(entry: &str) -> Option<String> {
    let entry = entry.trim();
    location_prefix()
        .find(entry)
        .and_then(|m| non_empty(&entry[m.end()..]))
        .or_else(|| non_empty(entry))
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_inline_diagnosis() {
        let fields = split_impression(" Skin, left arm: papule.\nDIAGNOSIS: Benign nevus.\n");
        assert_eq!(fields.description.as_deref(), Some("Skin, left arm: papule."));
        assert_eq!(fields.impression.as_deref(), Some("Benign nevus."));
    }

    #[test]
    fn test_split_dash_impression() {
        let fields = split_impression("Skin, back, shave:\n  -- Seborrheic keratosis.\n");
        assert_eq!(fields.description.as_deref(), Some("Skin, back, shave:"));
        assert_eq!(fields.impression.as_deref(), Some("Seborrheic keratosis."));
    }

    #[test]
    fn test_split_without_label() {
        let fields = split_impression("  Colon polyp  ");
        assert_eq!(fields.description.as_deref(), Some("Colon polyp"));
        assert!(fields.impression.is_none());
    }

    #[test]
    fn test_split_label_without_text() {
        let fields = split_impression("Skin\nDiagnosis:   ");
        assert_eq!(fields.description.as_deref(), Some("Skin"));
        assert!(fields.impression.is_none());
    }

    #[test]
    fn test_find_impression() {
        assert_eq!(
            find_impression("Skin:\n -- Nevus").as_deref(),
            Some("Nevus")
        );
        assert!(find_impression("Nevus").is_none());
    }

    #[test]
    fn test_microscopic_entry() {
        assert_eq!(
            microscopic_entry(" Cheek - Nests of basaloid cells.\n").as_deref(),
            Some("Nests of basaloid cells.")
        );
        assert_eq!(
            microscopic_entry("Well-circumscribed nevus.").as_deref(),
            Some("Well-circumscribed nevus.")
        );
        assert_eq!(microscopic_entry("Cheek - ").as_deref(), Some("Cheek -"));
        assert!(microscopic_entry("  ").is_none());
    }
}
