//! Compilation Database Generator - compile_commands.json from a C source tree.
//!
//! This library generates a [Clang JSON Compilation Database] for a C project
//! by scanning its source directory and synthesizing one compiler invocation
//! per translation unit. No compiler is run and no build system is consulted:
//! the command lines are materialized from a fixed template plus the project's
//! include directory, which is exactly the context static-analysis tools like
//! clang-tidy need.
//!
//! [Clang JSON Compilation Database]: https://clang.llvm.org/docs/JSONCompilationDatabase.html
//!
//! # Architecture
//!
//! The library is a linear scan-transform-serialize pipeline:
//!
//! 1. [`config`] - Toolchain and layout configuration with firmware defaults
//! 2. [`scanner`] - Recursively scans the source directory for matching files
//! 3. [`database`] - Maps each discovered file to a compilation record
//! 4. [`serializer`] - Serializes the records to JSON and writes atomically
//!
//! # Example Usage
//!
//! ```no_run
//! use compiledb_from_source::{
//!     config::GeneratorConfig,
//!     database::DatabaseBuilder,
//!     scanner::SourceScanner,
//!     serializer::{serialize_json, write_to_file},
//! };
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig::default();
//! let root = PathBuf::from("/proj").canonicalize().unwrap();
//!
//! // Scan the source directory
//! let scanner = SourceScanner::new(root.join(&config.source_dir), config.extension.clone());
//! let scan_result = scanner.scan().unwrap();
//!
//! // Build records and write the database
//! let output = root.join(&config.output_file);
//! let builder = DatabaseBuilder::new(root, config);
//! let records = builder.build(&scan_result.source_files);
//! let json = serialize_json(&records).unwrap();
//! write_to_file(&json, &output).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete
//! CLI application. Running it with no arguments from a project root
//! regenerates `compile_commands.json` in place.

pub mod cli;
pub mod config;
pub mod database;
pub mod scanner;
pub mod serializer;
