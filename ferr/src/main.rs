//! Inspect the FRR library log-reference catalog.
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ferr_common::config::FerrConfig;
use ferr_common::logref::schema::{export_schemas, generate_log_ref_catalog, generate_log_ref_schema};
use ferr_common::logref::{
    DisplayFormat, LIB_ERRORS, LIB_WARNINGS, LogRefError, LogRefKind, Selector, lib_error_init,
    registry, render, validate_catalog,
};
use ferr_common::{LogConfig, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "ferr", version, about = "Browse FRR log references")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/ferr/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one log reference, or all of them
    Show {
        /// Decimal or 0x-prefixed code, or "all"
        selector: Selector,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List library log references one per line
    List {
        /// Only warnings
        #[arg(long, conflicts_with = "errors")]
        warnings: bool,

        /// Only errors
        #[arg(long)]
        errors: bool,

        /// Print the machine-readable catalog
        #[arg(long)]
        json: bool,
    },

    /// Validate the library tables
    Check,

    /// Print the JSON Schema of `show --json` entries
    Schema {
        /// Write the schema and the catalog into this directory instead
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration and where each value came from
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config =
        FerrConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut log_config = LogConfig::from_config(&config).with_stderr();
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    let _logging_guards = init_logging(&log_config)?;

    for err in &config.env_errors {
        warn!("{}", err);
    }

    lib_error_init();
    debug!(registered = registry::global().len(), "Library log references ready");

    match cli.command {
        Commands::Show { selector, json } => {
            let format = if json {
                DisplayFormat::Json
            } else {
                config.display_format.value
            };
            let width = config.wrap_width.value as usize;
            match render(registry::global(), selector, format, width) {
                Ok(output) => println!("{}", output),
                Err(err @ LogRefError::UnknownCode(_)) => {
                    eprintln!("{}", err);
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::List {
            warnings,
            errors,
            json,
        } => {
            let mut catalog = generate_log_ref_catalog();
            if warnings {
                catalog.entries.retain(|e| e.kind == LogRefKind::Warning);
            } else if errors {
                catalog.entries.retain(|e| e.kind == LogRefKind::Error);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for entry in &catalog.entries {
                    println!("{} {} {} {}", entry.code, entry.hex, entry.kind, entry.title);
                }
            }
        }
        Commands::Check => match validate_catalog(&[LIB_WARNINGS, LIB_ERRORS]) {
            Ok(count) => println!("ok: {} log references in 2 tables", count),
            Err(problems) => {
                for problem in &problems {
                    eprintln!("error: {}", problem);
                }
                eprintln!("{} problem(s) found", problems.len());
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Schema { out } => match out {
            Some(dir) => {
                let result = export_schemas(&dir)
                    .with_context(|| format!("Failed to export schemas to {}", dir.display()))?;
                for file in &result.files {
                    println!("{}", file);
                }
            }
            None => println!("{}", serde_json::to_string_pretty(&generate_log_ref_schema())?),
        },
        Commands::Config => print!("{}", config.describe()),
    }

    Ok(ExitCode::SUCCESS)
}
