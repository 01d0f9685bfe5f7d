use crate::config::GeneratorConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry of a compilation database.
///
/// Follows the Clang JSON Compilation Database format: the working directory
/// for the compile step, the full command line, and the translation unit it
/// applies to. Tools such as clang-tidy consume arrays of these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRecord {
    /// Working directory of the compile step (the project root, absolute)
    pub directory: String,
    /// Fully materialized compiler command line
    pub command: String,
    /// Absolute path of the source file this record describes
    pub file: String,
}

/// Builds compilation database records from a project layout and config.
///
/// The builder resolves the project root and include directory once, then
/// materializes one [`CompileRecord`] per source file by substituting the
/// file path into the command template:
///
/// ```text
/// <compiler> -std=<std> -I<include dir> -D<define>... -c <file>
/// ```
///
/// `directory` is the same resolved root for every record produced by one
/// builder.
pub struct DatabaseBuilder {
    root: PathBuf,
    include_dir: PathBuf,
    config: GeneratorConfig,
}

impl DatabaseBuilder {
    /// Creates a builder for the given resolved project root.
    ///
    /// `root` must already be absolute; the include directory is resolved as
    /// `root/<config.include_dir>`.
    pub fn new(root: PathBuf, config: GeneratorConfig) -> Self {
        let include_dir = root.join(&config.include_dir);
        Self {
            root,
            include_dir,
            config,
        }
    }

    /// Renders the compiler command line for a single source file.
    fn command_for(&self, file: &Path) -> String {
        let defines: String = self
            .config
            .defines
            .iter()
            .map(|d| format!(" -D{}", d))
            .collect();

        format!(
            "{} -std={} -I{}{} -c {}",
            self.config.compiler,
            self.config.std,
            self.include_dir.display(),
            defines,
            file.display()
        )
    }

    /// Maps source files to compilation records, preserving input order.
    ///
    /// Every input path yields exactly one record; no de-duplication is
    /// applied beyond the natural uniqueness of filesystem paths.
    pub fn build(&self, source_files: &[PathBuf]) -> Vec<CompileRecord> {
        debug!(
            "Building {} compile records (root: {})",
            source_files.len(),
            self.root.display()
        );

        source_files
            .iter()
            .map(|file| CompileRecord {
                directory: self.root.display().to_string(),
                command: self.command_for(file),
                file: file.display().to_string(),
            })
            .collect()
    }
}
