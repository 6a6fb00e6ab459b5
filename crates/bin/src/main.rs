//! Kalends CLI binary.
//!
//! Provides command-line interface for calendar dummy encoding.

mod integration;

use clap::{Parser, Subcommand, ValueEnum};
use integration::calendar_encoder::EncodedTable;
use integration::csv_io::TimestampTable;
use integration::error::CliError;
use kalends::{CalendarField, DummyConfig};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kalends")]
#[command(about = "Kalends: calendar dummy variables for forecasting features", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EncodeFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldsFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a CSV timestamp column into calendar dummy columns
    Encode {
        /// Input CSV file with a header row
        input: PathBuf,

        /// Name of the timestamp column
        #[arg(long)]
        column: String,

        /// Fields to encode (comma separated); defaults to all
        #[arg(long, value_delimiter = ',')]
        fields: Vec<CalendarField>,

        /// JSON config file with `fields` and `prefix_columns`
        #[arg(long, conflicts_with = "fields")]
        config: Option<PathBuf>,

        /// Name columns by label only, without the field prefix
        #[arg(long)]
        no_prefix: bool,

        /// Copy the input columns ahead of the dummy columns
        #[arg(long)]
        keep_columns: bool,

        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format (csv or json)
        #[arg(long, value_enum, default_value = "csv")]
        format: EncodeFormat,
    },

    /// List the calendar fields and their columns
    Fields {
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: FieldsFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Encode {
            input,
            column,
            fields,
            config,
            no_prefix,
            keep_columns,
            output,
            format,
        } => {
            let mut config = match config {
                Some(path) => DummyConfig::from_json_file(path)?,
                None if fields.is_empty() => DummyConfig::default(),
                None => DummyConfig::with_fields(fields),
            };
            if no_prefix {
                config.prefix_columns = false;
            }

            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };

            encode_file(&input, &column, &config, keep_columns, format, writer)?;
        }
        Commands::Fields { format } => list_fields(format)?,
    }

    Ok(())
}

fn encode_file(
    input: &Path,
    column: &str,
    config: &DummyConfig,
    keep_columns: bool,
    format: EncodeFormat,
    mut writer: Box<dyn Write>,
) -> Result<(), CliError> {
    let table = TimestampTable::from_reader(File::open(input)?, column)?;
    let encoded = EncodedTable::new(&table, config, keep_columns)?;

    match format {
        EncodeFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &encoded.to_json())?;
            writeln!(writer)?;
        }
        EncodeFormat::Csv => encoded.write_csv(&mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

fn list_fields(format: FieldsFormat) -> Result<(), CliError> {
    let fields = CalendarField::all();

    if format == FieldsFormat::Json {
        let entries: Vec<_> = fields
            .iter()
            .map(|f| {
                json!({
                    "field": f.name(),
                    "width": f.width(),
                    "origin": f.origin(),
                    "labels": f.labels().iter().map(ToString::to_string).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Calendar Fields:");
    println!("{:-<50}", "");
    for field in fields {
        let labels = field.labels();
        let first = labels.first().map(ToString::to_string).unwrap_or_default();
        let last = labels.last().map(ToString::to_string).unwrap_or_default();
        println!(
            "  {:<14} {:>4} columns  {} .. {}",
            field.name(),
            field.width(),
            first,
            last
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_accepts_csv_and_json() {
        for format in ["csv", "json"] {
            let cli = Cli::try_parse_from([
                "kalends", "encode", "in.csv", "--column", "date", "--format", format,
            ]);
            assert!(cli.is_ok(), "{format}");
        }
    }

    #[test]
    fn test_encode_rejects_text_format() {
        let cli = Cli::try_parse_from([
            "kalends", "encode", "in.csv", "--column", "date", "--format", "text",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_fields_rejects_csv_format() {
        assert!(Cli::try_parse_from(["kalends", "fields", "--format", "csv"]).is_err());
        let cli = Cli::try_parse_from(["kalends", "fields", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Fields {
                format: FieldsFormat::Json
            }
        ));
    }
}
