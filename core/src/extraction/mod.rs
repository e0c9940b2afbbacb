pub mod accession;
pub mod assignment;
pub mod impression;
pub mod patterns;
pub mod sections;
pub mod specimens;

pub use accession::{extract_accession, strip_accession_lines};
pub use assignment::assign_to_specimens;
pub use impression::{find_impression, microscopic_entry, split_impression, BlockFields};
pub use sections::{segment_sections, ReportSections, Section};
pub use specimens::{segment_specimens, split_by_markers, SpecimenBlock};
