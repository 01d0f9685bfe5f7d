use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Compilation Database Generator - Generates compile_commands.json from a C source tree
#[derive(Parser, Debug)]
#[command(name = "compiledb-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the project root directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    /// Toolchain config file (YAML or JSON); defaults cover gcc/c11/STM32F103xB
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output file path (if not specified, compile_commands.json in the project root)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate project path exists
    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    // Validate project path is a directory
    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    if let Some(ref config) = args.config_path {
        info!("Config file: {}", config.display());
    } else {
        info!("Config: built-in defaults");
    }
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::config::GeneratorConfig;
    use crate::database::DatabaseBuilder;
    use crate::scanner::SourceScanner;
    use crate::serializer::{serialize_json, write_to_file};

    info!("Starting compilation database generation...");

    // Step 1: Load configuration
    let config = match &args.config_path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    // Step 2: Resolve the project root to an absolute path
    let root = args.project_path.canonicalize().with_context(|| {
        format!(
            "Failed to resolve project path: {}",
            args.project_path.display()
        )
    })?;
    info!("Resolved project root: {}", root.display());

    // Step 3: Scan the source directory for matching files
    let source_dir = root.join(&config.source_dir);
    info!("Scanning {} for .{} files...", source_dir.display(), config.extension);

    let scanner = SourceScanner::new(source_dir, config.extension.clone());
    let scan_result = scanner.scan()?;

    info!("Found {} source files", scan_result.source_files.len());
    for warning in &scan_result.warnings {
        log::warn!("{}", warning);
    }

    // Step 4: Build compilation records
    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| root.join(&config.output_file));

    let builder = DatabaseBuilder::new(root, config);
    let records = builder.build(&scan_result.source_files);

    for record in &records {
        debug!("Record: {}", record.file);
    }

    // Step 5: Serialize and write the database
    info!("Writing database to: {}", output_path.display());
    let content = serialize_json(&records)?;
    write_to_file(&content, &output_path)?;

    // Step 6: Display summary
    println!(
        "Generated {} with {} entries",
        output_path.display(),
        records.len()
    );

    Ok(())
}
