use super::{FieldTruncation, ReportLevelFallback, UnlabeledSpecimens};

/// Policy decisions applied on top of pattern matching
///
/// The defaults describe the standard extraction behaviour: an unlabelled
/// specimen region yields a single implicit specimen, sections without
/// specimen markers apply to every specimen, and fields keep their full text.
///
/// # Example
///
/// ```
/// use pathreport_core::{ExtractionPolicy, FieldTruncation, UnlabeledSpecimens};
///
/// let policy = ExtractionPolicy::default()
///     .with_unlabeled_specimens(UnlabeledSpecimens::OnePerLine)
///     .with_truncation(FieldTruncation::FirstLine);
///
/// assert_eq!(policy.unlabeled_specimens, UnlabeledSpecimens::OnePerLine);
/// assert_eq!(policy.truncation, FieldTruncation::FirstLine);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionPolicy {
    /// Handling of a specimen region without markers
    pub unlabeled_specimens: UnlabeledSpecimens,

    /// Handling of sections not subdivided by specimen markers
    pub report_level: ReportLevelFallback,

    /// Truncation applied to impression, microscopic and clinical impression
    pub truncation: FieldTruncation,
}

impl ExtractionPolicy {
    /// Builder: Set unlabelled specimen handling
    pub fn with_unlabeled_specimens(mut self, policy: UnlabeledSpecimens) -> Self {
        self.unlabeled_specimens = policy;
        self
    }

    /// Builder: Set report-level section handling
    ///
    /// # Example
    ///
    /// ```
    /// use pathreport_core::{ExtractionPolicy, ReportLevelFallback};
    ///
    /// let policy = ExtractionPolicy::default().with_report_level(ReportLevelFallback::LeaveEmpty);
    /// assert_eq!(policy.report_level, ReportLevelFallback::LeaveEmpty);
    /// ```
    pub fn with_report_level(mut self, policy: ReportLevelFallback) -> Self {
        self.report_level = policy;
        self
    }

    /// Builder: Set field truncation
    pub fn with_truncation(mut self, truncation: FieldTruncation) -> Self {
        self.truncation = truncation;
        self
    }

    /// Truncates a field and maps blank text to `None`
    pub(crate) fn finish_field(&self, text: Option<String>) -> Option<String> {
        text.map(|t| self.truncation.apply(t))
            .filter(|t| !t.trim().is_empty())
    }
}
