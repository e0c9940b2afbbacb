//! Core type definitions for pathology report extraction
//!
//! This module provides the value types produced and consumed by the extractor:
//! - [`StructuredRecord`]: Extraction result for one report
//! - [`Specimen`]: One specimen with its description, impression and microscopic text
//! - [`AccessionNumber`] and [`AccessionLabel`]: Report identifier and the label that matched
//! - [`SpecimenLabel`]: Normalized specimen marker label
//! - [`SectionKind`]: Coarse report sections recognized by header lines
//! - [`ExtractionPolicy`]: Policy decisions layered over pattern matching

mod enums;
mod label;
mod policy;
mod record;

pub use enums::{
    AccessionLabel, FieldTruncation, ReportLevelFallback, SectionKind, UnlabeledSpecimens,
};
pub use label::SpecimenLabel;
pub use policy::ExtractionPolicy;
pub use record::{AccessionNumber, Specimen, StructuredRecord};
