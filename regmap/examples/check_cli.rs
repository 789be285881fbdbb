#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use regmap::{Document, DocumentError, Region};

#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Regmap CLI - Validate declarative register map documents for schema completeness and address overlap"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Validate a register map document
    Check {
        /// Path to the JSON document
        file: PathBuf,

        /// Stop after schema validation
        #[arg(long)]
        schema_only: bool,
    },
    /// Show document info
    Info {
        /// Path to the JSON document
        file: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { file, schema_only } => handle_check(file, *schema_only),
        Commands::Info { file } => handle_info(file),
    }
}

#[cfg(feature = "cli")]
fn handle_check(file: &Path, schema_only: bool) -> ExitCode {
    let doc = match load(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    if schema_only {
        if doc.validate_schema() {
            println!("Schema OK.");
            return ExitCode::SUCCESS;
        }
        println!("Schema validation failed: a region is missing required attributes.");
        return ExitCode::FAILURE;
    }

    let report = doc.validate();
    println!("{report}");
    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(feature = "cli")]
fn handle_info(file: &Path) -> ExitCode {
    let doc = match load(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    println!("{}: {} regions", file.display(), doc.len());
    for entry in doc.iter() {
        let range = entry.address_range(entry.name());
        let protocol = entry
            .attribute("protocol")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("?");
        let width = entry
            .attribute("widthBits")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(0);
        println!("  {range} protocol={protocol} width={width}");
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "cli")]
fn load(file: &Path) -> Result<Document, ExitCode> {
    match Document::from_path(file) {
        Ok(doc) => Ok(doc),
        Err(DocumentError::Json(err)) => {
            eprintln!("Invalid JSON: {err}");
            Err(ExitCode::FAILURE)
        }
        Err(err) => {
            eprintln!("{err}");
            Err(ExitCode::FAILURE)
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example check_cli");
    std::process::exit(1);
}
