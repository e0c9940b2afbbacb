use clap::Parser;
use log::{error, info};
use pathreport_core::cli::{Cli, OutputFormat};
use pathreport_core::{ReportExtractor, StructuredRecord, TextReport};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let text = match read_report(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: Failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    let policy = cli.policy.into_policy();
    info!("Extracting {} with {:?}", cli.file.display(), policy);

    let record = ReportExtractor::extract_with_policy(&text, &policy);
    if record.accession.is_none() {
        info!("No accession number found");
    }

    output_record(&record, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Reads a report file, replacing invalid UTF-8 sequences
fn read_report(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn output_record(record: &StructuredRecord, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(record));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(record) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                let _ = record;
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
