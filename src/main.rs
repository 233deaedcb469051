//! Mongo Regex CLI
//!
//! Entry point for the `mongo-regex` command-line tool.

use clap::{Parser, Subcommand};
use mongo_regex::{decode_all, encode_to_string, CodecConfig, ConfigError, RegexValue};
use mongo_xml::XmlError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "mongo-regex")]
#[command(about = "Encode and decode document regex values as XML", version)]
struct Cli {
    /// Log codec activity to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a regex value as an XML element
    Encode {
        /// Pattern text (omitted: no element content)
        #[arg(long, short = 'p')]
        pattern: Option<String>,

        /// Flag characters (omitted: no options attribute)
        #[arg(long, short = 'f')]
        flags: Option<String>,

        /// Element name (overrides the config file)
        #[arg(long, short = 'e')]
        element: Option<String>,

        /// Path to codec config file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Read regex elements from XML and print them
    Decode {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Element name (overrides the config file)
        #[arg(long, short = 'e')]
        element: Option<String>,

        /// Path to codec config file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output a JSON array instead of display strings
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error loading config: {0}")]
    Config(#[from] ConfigError),

    #[error("Error reading input: {0}")]
    Io(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    #[error("Error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            pattern,
            flags,
            element,
            config,
        } => run_encode(pattern, flags, element, config),
        Commands::Decode {
            file,
            element,
            config,
            json,
        } => run_decode(file, element, config, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>, element: Option<String>) -> Result<CodecConfig, CliError> {
    let config = CodecConfig::load_or_default(path.as_deref())?.with_overrides(element)?;
    Ok(config)
}

fn run_encode(
    pattern: Option<String>,
    flags: Option<String>,
    element: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config_path, element)?;
    let value = RegexValue::from_parts(pattern, flags);
    debug!(value = %value, "encoding");
    println!("{}", encode_to_string(&value, &config)?);
    Ok(())
}

fn run_decode(
    file: Option<PathBuf>,
    element: Option<String>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path, element)?;
    let input: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let values = decode_all(input, &config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in &values {
            println!("{}", value);
        }
    }
    Ok(())
}
