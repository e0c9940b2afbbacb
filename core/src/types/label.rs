use std::fmt;

/// Normalized specimen label such as `A`, `B` or `2`
///
/// Labels are stored upper-cased so that `[a]` and `A.` name the same specimen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct SpecimenLabel(String);

impl SpecimenLabel {
    /// Creates a label from raw marker text
    ///
    /// Returns `None` when nothing remains after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use pathreport_core::SpecimenLabel;
    ///
    /// let label = SpecimenLabel::new(" b ").unwrap();
    /// assert_eq!(label.as_str(), "B");
    /// assert!(SpecimenLabel::new("  ").is_none());
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    /// Generated label for the n-th (zero-based) specimen of an unlabelled list
    ///
    /// Produces `A` through `Z`, then continues with numbers from 27.
    pub fn generated(index: usize) -> Self {
        if index < 26 {
            Self(char::from(b'A' + index as u8).to_string())
        } else {
            Self((index + 1).to_string())
        }
    }

    /// Returns the label text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// One-based position named by a numeric label (`"2"` → 2)
    pub fn ordinal(&self) -> Option<usize> {
        self.0.parse::<usize>().ok().filter(|n| *n > 0)
    }
}

impl fmt::Display for SpecimenLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "A")]
    #[case(" B ", "B")]
    #[case("12", "12")]
    #[case("a1", "A1")]
    fn test_label_normalization(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(SpecimenLabel::new(raw).unwrap().as_str(), expected);
    }

    #[test]
    fn test_generated_labels() {
        assert_eq!(SpecimenLabel::generated(0).as_str(), "A");
        assert_eq!(SpecimenLabel::generated(2).as_str(), "C");
        assert_eq!(SpecimenLabel::generated(25).as_str(), "Z");
        assert_eq!(SpecimenLabel::generated(26).as_str(), "27");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(SpecimenLabel::new("1").unwrap().ordinal(), Some(1));
        assert_eq!(SpecimenLabel::new("0").unwrap().ordinal(), None);
        assert_eq!(SpecimenLabel::new("A").unwrap().ordinal(), None);
    }
}
