use std::fmt;

/// Label variant that produced an accession number
///
/// Variants are listed in matching priority: when several labels appear in
/// one report, the earliest variant in this list wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum AccessionLabel {
    /// `Accession No:`, `Accession Number`, `Accession #`
    AccessionNumber,
    /// `Accession:`
    Accession,
    /// `Case No:`, `Case #`
    CaseNumber,
    /// `Surgical Pathology No:`, `Path #`
    PathologyNumber,
}

impl AccessionLabel {
    /// All label variants in priority order
    pub const PRIORITY: [AccessionLabel; 4] = [
        AccessionLabel::AccessionNumber,
        AccessionLabel::Accession,
        AccessionLabel::CaseNumber,
        AccessionLabel::PathologyNumber,
    ];

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            AccessionLabel::AccessionNumber => "accession-number",
            AccessionLabel::Accession => "accession",
            AccessionLabel::CaseNumber => "case-number",
            AccessionLabel::PathologyNumber => "pathology-number",
        }
    }
}

impl fmt::Display for AccessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Coarse report section, identified by its header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum SectionKind {
    /// Specimen submitted / specimen list
    Specimen,
    /// Stand-alone diagnosis heading
    Diagnosis,
    /// Microscopic description
    Microscopic,
    /// Clinical impression
    ClinicalImpression,
    /// Gross description
    Gross,
    /// Clinical history
    ClinicalHistory,
    /// Comment, note or addendum
    Comment,
}

impl SectionKind {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SectionKind::Specimen => "specimen",
            SectionKind::Diagnosis => "diagnosis",
            SectionKind::Microscopic => "microscopic",
            SectionKind::ClinicalImpression => "clinical-impression",
            SectionKind::Gross => "gross",
            SectionKind::ClinicalHistory => "clinical-history",
            SectionKind::Comment => "comment",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// What to do with a specimen region that carries no specimen markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum UnlabeledSpecimens {
    /// The whole region becomes one implicit, unlabelled specimen
    #[default]
    SingleImplicit,

    /// Every non-empty line becomes a specimen labelled A, B, C, ...
    OnePerLine,
}

impl UnlabeledSpecimens {
    /// Returns a simple string name
    pub fn simple_name(&self) -> &'static str {
        match self {
            UnlabeledSpecimens::SingleImplicit => "single",
            UnlabeledSpecimens::OnePerLine => "per-line",
        }
    }
}

/// What to do with a section that is not subdivided by specimen markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum ReportLevelFallback {
    /// Copy the section text to every specimen
    #[default]
    Broadcast,

    /// Leave the field empty on every specimen
    LeaveEmpty,
}

impl ReportLevelFallback {
    /// Returns a simple string name
    pub fn simple_name(&self) -> &'static str {
        match self {
            ReportLevelFallback::Broadcast => "broadcast",
            ReportLevelFallback::LeaveEmpty => "empty",
        }
    }
}

/// How much of a multi-line field to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum FieldTruncation {
    /// Keep the full trimmed text
    #[default]
    Full,

    /// Keep only the first line
    FirstLine,
}

impl FieldTruncation {
    /// Returns a simple string name
    pub fn simple_name(&self) -> &'static str {
        match self {
            FieldTruncation::Full => "full",
            FieldTruncation::FirstLine => "first-line",
        }
    }

    /// Applies the truncation to an extracted field
    pub fn apply(&self, text: String) -> String {
        match self {
            FieldTruncation::Full => text,
            FieldTruncation::FirstLine => match text.split_once('\n') {
                Some((first, _)) => first.trim().to_string(),
                None => text,
            },
        }
    }
}
