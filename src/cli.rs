//! Command-line interface for the extractor.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use console::style;

use crate::config::pattern_file_path;
use crate::error::{ExtractError, Result};
use crate::extractor::{Extractor, Match};
use crate::patterns::load_or_create;

/// Extract element values from XML documents using configurable path patterns.
#[derive(Parser)]
#[command(name = "xmlsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// XML file to extract from
    pub xml_file: PathBuf,

    /// Pattern file with element paths, one per line (default: elements.txt)
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for extracted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `tag: value` line per match
    Text,
    /// JSON array of matches
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    extract_command(&cli.xml_file, cli.patterns.as_deref(), cli.format)
}

/// Execute the extraction.
fn extract_command(xml_file: &Path, patterns: Option<&Path>, format: OutputFormat) -> Result<()> {
    let pattern_path = pattern_file_path(patterns);

    let loaded = load_or_create(&pattern_path)?;
    if loaded.created {
        println!(
            "{} {}",
            style("Created").bold(),
            style(pattern_path.display()).cyan()
        );
        println!("Populate it with the element paths you want to extract, then run again.");
        return Ok(());
    }

    let xml = fs::read_to_string(xml_file).map_err(|source| ExtractError::InputRead {
        path: xml_file.to_path_buf(),
        source,
    })?;

    let matches = Extractor::new(loaded.set).extract(&xml)?;
    print_matches(&matches, format)
}

/// Print matches in the selected format.
fn print_matches(matches: &[Match], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for m in matches {
                println!("{}: {}", style(&m.tag).cyan(), m.value);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(matches)?);
        }
    }
    Ok(())
}
