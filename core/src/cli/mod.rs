pub mod report;

use crate::types::{ExtractionPolicy, FieldTruncation, ReportLevelFallback, UnlabeledSpecimens};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for pathreport
#[derive(Parser, Debug)]
#[command(name = "pathreport")]
#[command(about = "Structured field extraction from a free-text pathology report")]
#[command(version)]
pub struct Cli {
    /// Path to a plain-text report
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Extraction policy flags shared by the binaries
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// How a specimen region without markers is split into specimens
    #[arg(long, value_name = "MODE", default_value = "single")]
    pub unlabeled_specimens: UnlabeledSpecimensArg,

    /// What to do with microscopic/diagnosis sections not subdivided by specimen
    #[arg(long, value_name = "MODE", default_value = "broadcast")]
    pub report_level: ReportLevelArg,

    /// Keep only the first line of impression and microscopic fields
    #[arg(long)]
    pub first_line_only: bool,
}

impl PolicyArgs {
    /// Converts the flags into an extraction policy
    pub fn into_policy(self) -> ExtractionPolicy {
        let truncation = if self.first_line_only {
            FieldTruncation::FirstLine
        } else {
            FieldTruncation::Full
        };
        ExtractionPolicy::default()
            .with_unlabeled_specimens(self.unlabeled_specimens.into())
            .with_report_level(self.report_level.into())
            .with_truncation(truncation)
    }
}

/// Splitting of unlabelled specimen regions
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum UnlabeledSpecimensArg {
    /// The whole region is one implicit specimen
    #[default]
    Single,
    /// Every non-empty line is a specimen, labelled A, B, C, ...
    PerLine,
}

impl From<UnlabeledSpecimensArg> for UnlabeledSpecimens {
    fn from(arg: UnlabeledSpecimensArg) -> Self {
        match arg {
            UnlabeledSpecimensArg::Single => UnlabeledSpecimens::SingleImplicit,
            UnlabeledSpecimensArg::PerLine => UnlabeledSpecimens::OnePerLine,
        }
    }
}

/// Handling of report-level sections
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ReportLevelArg {
    /// Copy the section to every specimen
    #[default]
    Broadcast,
    /// Assign the section to no specimen
    Empty,
}

impl From<ReportLevelArg> for ReportLevelFallback {
    fn from(arg: ReportLevelArg) -> Self {
        match arg {
            ReportLevelArg::Broadcast => ReportLevelFallback::Broadcast,
            ReportLevelArg::Empty => ReportLevelFallback::LeaveEmpty,
        }
    }
}
