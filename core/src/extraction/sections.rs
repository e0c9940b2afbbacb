use crate::types::SectionKind;
use log::trace;
use std::cmp::Reverse;

use super::patterns::{section_headers, specimen_marker};

/// One header-delimited region of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: String,
}

/// A report split into its preamble and header-delimited sections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSections {
    /// Text before the first recognized header
    pub preamble: String,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl ReportSections {
    /// Checks whether a header of the given kind was found
    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    /// Returns the trimmed body of a section kind
    ///
    /// Repeated headers of one kind are joined in source order. A missing
    /// header yields the empty string.
    pub fn body(&self, kind: SectionKind) -> String {
        self.sections
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.body.trim())
            .filter(|b| !b.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy)]
struct HeaderMatch {
    start: usize,
    end: usize,
    kind: SectionKind,
}

/// Splits a report into sections at recognized header lines
///
/// # Algorithm
///
/// 1. Collect every header match of every section kind
/// 2. A diagnosis label counts as a header only when nothing follows it on
///    its line; with inline text it is an impression label instead
/// 3. Sort by position; when two headers start on the same line keep the longer
/// 4. A bare diagnosis label inside a specimen list (preamble or specimen
///    section already holding a marker) whose next line is not a marker
///    belongs to the preceding specimen and is left in place as text
/// 5. Each section body runs to the next header or end of text
pub fn segment_sections(text: &str) -> ReportSections {
    let mut headers = Vec::new();

    for (kind, regex) in section_headers() {
        for m in regex.find_iter(text) {
            if *kind == SectionKind::Diagnosis && !rest_of_line_is_blank(text, m.end()) {
                continue;
            }
            headers.push(HeaderMatch {
                start: m.start(),
                end: m.end(),
                kind: *kind,
            });
        }
    }

    headers.sort_by_key(|h| (h.start, Reverse(h.end)));
    headers.dedup_by_key(|h| h.start);

    let mut kept: Vec<HeaderMatch> = Vec::with_capacity(headers.len());
    for header in headers {
        if header.kind == SectionKind::Diagnosis && is_specimen_diagnosis(text, &kept, &header) {
            trace!("Diagnosis label at byte {} kept in specimen text", header.start);
            continue;
        }
        kept.push(header);
    }
    let headers = kept;

    let preamble_end = headers.first().map(|h| h.start).unwrap_or(text.len());
    let sections = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let body_end = headers.get(i + 1).map(|h| h.start).unwrap_or(text.len());
            trace!("Section {} at byte {}", header.kind, header.start);
            Section {
                kind: header.kind,
                body: text[header.end..body_end].to_string(),
            }
        })
        .collect();

    ReportSections {
        preamble: text[..preamble_end].to_string(),
        sections,
    }
}

fn is_specimen_diagnosis(text: &str, kept: &[HeaderMatch], header: &HeaderMatch) -> bool {
    let (open_kind, open_start) = match kept.last() {
        Some(previous) => (Some(previous.kind), previous.end),
        None => (None, 0),
    };
    if !matches!(open_kind, None | Some(SectionKind::Specimen)) {
        return false;
    }
    if !specimen_marker().is_match(&text[open_start..header.start]) {
        return false;
    }

    text[header.end..]
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| !specimen_marker().is_match(line))
        .unwrap_or(true)
}

fn rest_of_line_is_blank(text: &str, from: usize) -> bool {
    text[from..]
        .split('\n')
        .next()
        .map(|rest| rest.trim().is_empty())
        .unwrap_or(true)
}
