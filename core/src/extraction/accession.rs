use crate::types::AccessionNumber;
use log::trace;

use super::patterns::{accession_matchers, section_headers};

// Punctuation dictated after an identifier, e.g. "S23-0001."
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '-', '/'];

/// Extracts the accession number from report text
///
/// # Algorithm
///
/// 1. Try each matcher of [`accession_matchers`] in priority order
/// 2. The first matcher that matches anywhere in the text wins
/// 3. A token on the line after an empty label is rejected when that line is
///    a section header
/// 4. Trailing punctuation is removed from the captured token
/// 5. No match → `None`; a missing accession never stops extraction
pub fn extract_accession(text: &str) -> Option<AccessionNumber> {
    for (label, regex) in accession_matchers() {
        if let Some(caps) = regex.captures(text) {
            let Some(token) = caps.get(1) else {
                continue;
            };
            if starts_header_line(text, token.start()) {
                trace!("Accession {} label is empty, skipping", label);
                continue;
            }
            let token = token.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if !token.is_empty() {
                trace!("Accession {} matched by {} label", token, label);
                return Some(AccessionNumber::new(token, *label));
            }
        }
    }

    None
}

fn starts_header_line(text: &str, position: usize) -> bool {
    let line_start = text[..position].rfind('\n').map(|i| i + 1).unwrap_or(0);
    if !text[line_start..position].trim().is_empty() {
        return false;
    }
    let line_end = text[position..]
        .find('\n')
        .map(|i| position + i)
        .unwrap_or(text.len());
    let line = &text[line_start..line_end];
    section_headers().iter().any(|(_, regex)| regex.is_match(line))
}

/// Checks whether a line carries an accession label
pub fn is_accession_line(line: &str) -> bool {
    accession_matchers()
        .iter()
        .any(|(_, regex)| regex.is_match(line))
}

/// Removes lines carrying an accession label
///
/// Used on report preambles so the identifier header is not mistaken for
/// specimen text.
pub fn strip_accession_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !is_accession_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
