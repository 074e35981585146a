//! intentcsv CLI - Convert intent training data between CSV and Rasa YAML
//!
//! # Main Commands
//!
//! ```bash
//! intentcsv convert intents.csv                          # CSV -> output.yml
//! intentcsv convert nlu.yml --direction yaml-to-csv      # YAML -> output.csv
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! intentcsv parse intents.csv      # Dump the parsed CSV table as JSON
//! intentcsv inspect nlu.yml -D yaml-to-csv  # Dump the grouped document as JSON
//! ```
//!
//! Every option can also be set through an `INTENTCSV_*` environment
//! variable or a `.env` file.

use clap::{Args, Parser, Subcommand, ValueEnum};
use intentcsv::{
    convert_file, parse_csv_file_auto, parse_document, table_to_document, Configuration,
    Destination, Direction, Document, ExampleBlock,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intentcsv", version)]
#[command(about = "Convert intent training data between CSV and Rasa NLU YAML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV file to Rasa YAML, or back
    Convert {
        /// Source file (CSV or YAML depending on direction)
        source: PathBuf,

        #[command(flatten)]
        mapping: MappingArgs,

        /// Directory to write the output file to
        #[arg(long, env = "INTENTCSV_EXPORT_DIR", default_value = ".")]
        export_dir: PathBuf,

        /// Output file name (default: output.yml or output.csv)
        #[arg(long, env = "INTENTCSV_FILE_NAME")]
        file_name: Option<String>,
    },

    /// Parse a CSV file and output the table as JSON
    Parse {
        /// Input CSV file
        source: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long, env = "INTENTCSV_DELIMITER")]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a CSV or YAML source and output the grouped document as JSON
    Inspect {
        /// Source file (CSV or YAML depending on direction)
        source: PathBuf,

        #[command(flatten)]
        mapping: MappingArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Field mapping and format options shared by commands.
#[derive(Args)]
struct MappingArgs {
    /// Conversion direction
    #[arg(short = 'D', long, value_enum, env = "INTENTCSV_DIRECTION", default_value = "csv-to-yaml")]
    direction: DirectionArg,

    /// CSV column holding the intents
    #[arg(long, alias = "label-column", env = "INTENTCSV_INTENT_COLUMN", default_value = "intent")]
    intent_column: String,

    /// CSV column holding the texts
    #[arg(long, env = "INTENTCSV_TEXT_COLUMN", default_value = "text")]
    text_column: String,

    /// Document key holding each intent's examples
    #[arg(long, env = "INTENTCSV_EXAMPLES_KEY", default_value = "examples")]
    examples_key: String,

    /// Document key holding each intent's name
    #[arg(long, alias = "label-key", env = "INTENTCSV_INTENT_KEY", default_value = "intent")]
    intent_key: String,

    /// Value written to the document's `version` field
    #[arg(long, alias = "format-version", env = "INTENTCSV_RASA_VERSION", default_value = "3.0")]
    rasa_version: String,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long, env = "INTENTCSV_DELIMITER")]
    delimiter: Option<char>,

    /// Write examples as a literal `|` block instead of a folded `>-` block
    #[arg(long, env = "INTENTCSV_LITERAL_EXAMPLES")]
    literal_examples: bool,
}

impl MappingArgs {
    fn configuration(&self) -> Configuration {
        let block = if self.literal_examples {
            ExampleBlock::Literal
        } else {
            ExampleBlock::Folded
        };

        Configuration::default()
            .with_label_field(&self.intent_column)
            .with_text_field(&self.text_column)
            .with_examples_key(&self.examples_key)
            .with_label_key(&self.intent_key)
            .with_format_version(&self.rasa_version)
            .with_example_block(block)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// CSV rows to a Rasa YAML document
    CsvToYaml,
    /// Rasa YAML document to CSV rows
    YamlToCsv,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::CsvToYaml => Direction::CsvToYaml,
            DirectionArg::YamlToCsv => Direction::YamlToCsv,
        }
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            source,
            mapping,
            export_dir,
            file_name,
        } => cmd_convert(&source, &mapping, export_dir, file_name),

        Commands::Parse {
            source,
            delimiter,
            output,
        } => cmd_parse(&source, delimiter, output.as_deref()),

        Commands::Inspect {
            source,
            mapping,
            output,
        } => cmd_inspect(&source, &mapping, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    source: &Path,
    mapping: &MappingArgs,
    export_dir: PathBuf,
    file_name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let direction = Direction::from(mapping.direction);
    let file_name = file_name.unwrap_or_else(|| direction.default_file_name().to_string());
    let destination = Destination::new(export_dir, file_name);

    eprintln!("📄 Processing: {}", source.display());

    let summary = convert_file(
        source,
        direction,
        &mapping.configuration(),
        &destination,
        mapping.delimiter,
    )?;

    if let Some(ref encoding) = summary.encoding {
        eprintln!("   Encoding: {}", encoding);
    }
    if let Some(delimiter) = summary.delimiter {
        eprintln!("   Delimiter: '{}'", format_delimiter(delimiter));
    }
    eprintln!("   Rows: {}", summary.rows);
    eprintln!("   Intents: {}", summary.groups);

    if let Some(ref path) = summary.destination {
        eprintln!("💾 Output written to: {}", path.display());
    }
    Ok(())
}

fn cmd_parse(
    source: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", source.display());

    let result = parse_csv_file_auto(source, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", result.table.headers().join(", "));
    eprintln!("✅ Parsed {} rows", result.table.len());

    let json = serde_json::to_string_pretty(&result.table)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_inspect(
    source: &Path,
    mapping: &MappingArgs,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = mapping.configuration();

    let document: Document = match Direction::from(mapping.direction) {
        Direction::CsvToYaml => {
            let parsed = parse_csv_file_auto(source, mapping.delimiter)?;
            table_to_document(&parsed.table, &config)?
        }
        Direction::YamlToCsv => {
            let text = fs::read_to_string(source)?;
            parse_document(&text, &config)?
        }
    };

    eprintln!(
        "📦 {} intents, {} examples",
        document.groups.len(),
        document.example_count()
    );

    let json = serde_json::to_string_pretty(&document)?;
    write_output(&json, output)?;

    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(args: &[&str]) -> MappingArgs {
        let argv = ["intentcsv", "convert", "data.csv"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Convert { mapping, .. } => mapping,
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_mapping_flags() {
        let config = mapping(&[
            "--intent-column", "label",
            "--text-column", "utterance",
            "--intent-key", "name",
            "--rasa-version", "2.0",
        ])
        .configuration();

        assert_eq!(config.label_field, "label");
        assert_eq!(config.text_field, "utterance");
        assert_eq!(config.label_key, "name");
        assert_eq!(config.format_version, "2.0");
    }

    #[test]
    fn test_mapping_flag_aliases() {
        let config = mapping(&[
            "--label-column", "label",
            "--label-key", "name",
            "--format-version", "2.0",
        ])
        .configuration();

        assert_eq!(config.label_field, "label");
        assert_eq!(config.label_key, "name");
        assert_eq!(config.format_version, "2.0");
    }

    #[test]
    fn test_mapping_defaults() {
        let config = mapping(&[]).configuration();
        assert_eq!(config.label_field, "intent");
        assert_eq!(config.text_field, "text");
        assert_eq!(config.format_version, "3.0");
    }
}
