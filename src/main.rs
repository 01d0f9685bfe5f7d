//! Compilation Database Generator - Command-line tool.
//!
//! This binary regenerates `compile_commands.json` for a C project by scanning
//! its source tree and synthesizing a compiler command line per file. The
//! output is consumed by clang-tidy and other static-analysis tooling.
//!
//! # Usage
//!
//! ```bash
//! compiledb-from-source [OPTIONS] [PROJECT_PATH]
//! ```
//!
//! # Examples
//!
//! Regenerate the database for the current directory:
//! ```bash
//! compiledb-from-source
//! ```
//!
//! Use a custom toolchain config:
//! ```bash
//! compiledb-from-source ./firmware -c toolchain.yaml
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! compiledb-from-source ./firmware -v
//! ```

mod cli;
mod config;
mod database;
mod scanner;
mod serializer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Compilation Database Generator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Compilation database generation completed successfully");

    Ok(())
}
