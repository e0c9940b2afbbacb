use crate::types::StructuredRecord;
use std::fmt;

/// Text report formatter for an extracted record
pub struct TextReport<'a> {
    record: &'a StructuredRecord,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(record: &'a StructuredRecord) -> Self {
        Self { record }
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, name: &str, value: Option<&str>) -> fmt::Result {
    let Some(value) = value else {
        return writeln!(f, "  {:<14} -", format!("{}:", name));
    };

    let mut lines = value.lines();
    writeln!(
        f,
        "  {:<14} {}",
        format!("{}:", name),
        lines.next().unwrap_or("")
    )?;
    // Continuation lines align under the value column
    for line in lines {
        writeln!(f, "  {:<14} {}", "", line)?;
    }
    Ok(())
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pathology Report")?;
        writeln!(f, "================")?;
        writeln!(f)?;

        match &self.record.accession {
            Some(accession) => writeln!(
                f,
                "Accession:      {} ({})",
                accession.value,
                accession.label.simple_name()
            )?,
            None => writeln!(f, "Accession:      unknown")?,
        }
        writeln!(f, "Specimens:      {}", self.record.specimens.len())?;

        for (index, specimen) in self.record.specimens.iter().enumerate() {
            writeln!(f)?;
            match &specimen.label {
                Some(label) => writeln!(f, "Specimen {}", label)?,
                None => writeln!(f, "Specimen #{} (unlabelled)", index + 1)?,
            }
            writeln!(f, "------------------")?;
            write_field(f, "Description", specimen.description.as_deref())?;
            write_field(f, "Impression", specimen.impression.as_deref())?;
            write_field(f, "Microscopic", specimen.microscopic.as_deref())?;
            write_field(f, "Clinical", specimen.clinical_impression.as_deref())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessionLabel, AccessionNumber, Specimen, SpecimenLabel};

    #[test]
    fn test_text_report_format() {
        let record = StructuredRecord {
            accession: Some(AccessionNumber::new("AB-123", AccessionLabel::Accession)),
            specimens: vec![Specimen {
                label: SpecimenLabel::new("a"),
                description: Some("Skin, left arm: papule.".to_string()),
                impression: Some("Benign nevus.".to_string()),
                microscopic: Some("Unremarkable epidermis.\nNo atypia.".to_string()),
                clinical_impression: None,
            }],
        };

        let output = format!("{}", TextReport::new(&record));

        assert!(output.contains("Pathology Report"));
        assert!(output.contains("Accession:      AB-123 (accession)"));
        assert!(output.contains("Specimens:      1"));
        assert!(output.contains("Specimen A"));
        assert!(output.contains("  Description:   Skin, left arm: papule."));
        assert!(output.contains("  Impression:    Benign nevus."));
        assert!(output.contains("  Microscopic:   Unremarkable epidermis.\n                 No atypia."));
        assert!(output.contains("  Clinical:      -"));
    }

    #[test]
    fn test_text_report_unlabelled() {
        let record = StructuredRecord {
            accession: None,
            specimens: vec![Specimen::default()],
        };

        let output = format!("{}", TextReport::new(&record));

        assert!(output.contains("Accession:      unknown"));
        assert!(output.contains("Specimen #1 (unlabelled)"));
    }
}
