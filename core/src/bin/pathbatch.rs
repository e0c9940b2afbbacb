use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use pathreport_core::cli::PolicyArgs;
use pathreport_core::table::{ReportTable, DEFAULT_TEXT_COLUMN};
use pathreport_core::{ExtractionPolicy, RawReport, ReportRow, Result};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process;

/// CLI tool for flattening a table of pathology reports into one row per specimen
#[derive(Parser, Debug)]
#[command(name = "pathbatch")]
#[command(about = "Extract specimens from every report in a CSV table")]
#[command(version)]
struct Cli {
    /// Input CSV table with one report per row
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to standard output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Name of the column holding the report text
    #[arg(short = 'c', long, default_value = DEFAULT_TEXT_COLUMN)]
    text_column: String,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    format: OutputFormat,

    #[command(flatten)]
    policy: PolicyArgs,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Input columns followed by the extracted columns
    Csv,
    /// JSON array of row objects
    Json,
    /// Human-readable summary
    Text,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.input.is_file() {
        eprintln!("Error: {} is not a file", cli.input.display());
        process::exit(1);
    }

    let table = match ReportTable::from_path(&cli.input, &cli.text_column) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to read {}: {}", cli.input.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if table.is_empty() {
        warn!("Input table has no data rows");
    }

    let policy = cli.policy.into_policy();
    info!("Using policy: {:?}", policy);

    let reports = table.reports();
    let rows = run_batch(&reports, &policy);
    info!("Extracted {} rows from {} reports", rows.len(), reports.len());

    if let Err(e) = write_output(&table, &rows, cli.format, cli.output.as_ref()) {
        error!("Failed to write output: {}", e);
        eprintln!("Error: Failed to write output: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

#[cfg(feature = "parallel")]
fn run_batch(reports: &[RawReport<usize>], policy: &ExtractionPolicy) -> Vec<ReportRow<usize>> {
    pathreport_core::process_reports_parallel(reports, policy)
}

#[cfg(not(feature = "parallel"))]
fn run_batch(reports: &[RawReport<usize>], policy: &ExtractionPolicy) -> Vec<ReportRow<usize>> {
    pathreport_core::process_reports(reports, policy)
}

fn write_output(
    table: &ReportTable,
    rows: &[ReportRow<usize>],
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };

    match format {
        OutputFormat::Csv => table.write_csv(rows, &mut writer)?,
        OutputFormat::Json => write_json(table, rows, &mut writer)?,
        OutputFormat::Text => write!(writer, "{}", TextReport::new(rows))?,
    }
    writer.flush()?;

    if let Some(path) = output {
        info!("Output saved to: {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "json")]
fn write_json<W: Write>(table: &ReportTable, rows: &[ReportRow<usize>], writer: W) -> Result<()> {
    use serde_json::{Map, Value};

    let headers = table.output_headers();
    let objects: Vec<Map<String, Value>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(table.output_record(row))
                .map(|(name, cell)| (name.to_string(), Value::String(cell.to_string())))
                .collect()
        })
        .collect();

    serde_json::to_writer_pretty(writer, &objects)?;
    Ok(())
}

#[cfg(not(feature = "json"))]
fn write_json<W: Write>(_table: &ReportTable, _rows: &[ReportRow<usize>], _writer: W) -> Result<()> {
    eprintln!("Error: JSON output requires the 'json' feature");
    eprintln!("Rebuild with: cargo build --features json");
    process::exit(1);
}

/// Text summary of a batch run
struct TextReport<'a> {
    rows: &'a [ReportRow<usize>],
}

impl<'a> TextReport<'a> {
    fn new(rows: &'a [ReportRow<usize>]) -> Self {
        Self { rows }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Extraction")?;
        writeln!(f, "================")?;
        writeln!(f)?;

        let mut current = None;
        for row in self.rows {
            if current != Some(row.row_id) {
                current = Some(row.row_id);
                writeln!(
                    f,
                    "Row {}: {}",
                    row.row_id + 1,
                    row.accession_no.as_deref().unwrap_or("no accession")
                )?;
            }
            writeln!(
                f,
                "  [{}] {}",
                row.specimen_id.as_deref().unwrap_or("-"),
                row.specimen_description
                    .as_deref()
                    .and_then(|d| d.lines().next())
                    .unwrap_or("")
            )?;
            if let Some(impression) = &row.impression {
                writeln!(f, "      Impression: {}", impression.lines().next().unwrap_or(""))?;
            }
        }

        Ok(())
    }
}
