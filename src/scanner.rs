use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing source directories.
///
/// The `SourceScanner` recursively walks a source directory to find all files
/// with a given extension. Hidden directories (those starting with `.`) are
/// skipped automatically.
///
/// Discovered paths are sorted lexicographically so that repeated scans over
/// an unchanged tree yield the same order regardless of filesystem traversal
/// order.
///
/// # Example
///
/// ```no_run
/// use compiledb_from_source::scanner::SourceScanner;
/// use std::path::PathBuf;
///
/// let scanner = SourceScanner::new(PathBuf::from("./kernel"), "c".to_string());
/// let result = scanner.scan().unwrap();
/// println!("Found {} C files", result.source_files.len());
/// ```
pub struct SourceScanner {
    source_dir: PathBuf,
    extension: String,
}

/// Result of directory scanning operation.
///
/// Contains the sorted list of discovered source files and any warnings
/// encountered during scanning.
pub struct ScanResult {
    /// Paths to all discovered source files, sorted lexicographically
    pub source_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl SourceScanner {
    /// Creates a new `SourceScanner` for the specified source directory.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - The directory to scan recursively
    /// * `extension` - The file extension to match, without the leading dot
    pub fn new(source_dir: PathBuf, extension: String) -> Self {
        Self {
            source_dir,
            extension,
        }
    }

    /// Scans the directory tree and collects all matching files.
    ///
    /// This method recursively traverses the directory tree starting from the
    /// source directory, collecting every file whose extension matches the
    /// configured filter. Hidden directories (starting with `.`) are skipped.
    ///
    /// A missing source directory is not an error: it produces an empty
    /// result with a warning, matching the behavior of an empty tree.
    ///
    /// If individual directories or files cannot be accessed, warnings are
    /// logged and added to the result, but scanning continues.
    ///
    /// # Returns
    ///
    /// Returns a `ScanResult` with the sorted list of discovered files and
    /// any warnings.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut source_files = Vec::new();
        let mut warnings = Vec::new();

        if !self.source_dir.is_dir() {
            let warning = format!(
                "Source directory does not exist: {}",
                self.source_dir.display()
            );
            warn!("{}", warning);
            warnings.push(warning);
            return Ok(ScanResult {
                source_files,
                warnings,
            });
        }

        for entry in WalkDir::new(&self.source_dir)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the source directory itself
                if e.path() == self.source_dir {
                    return true;
                }

                // Skip hidden directories; hidden files still match the filter
                !(e.file_type().is_dir() && e.file_name().to_string_lossy().starts_with('.'))
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    if path.is_file()
                        && path.extension().and_then(|s| s.to_str())
                            == Some(self.extension.as_str())
                    {
                        source_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        // Filesystem order is platform-dependent; sort for stable output
        source_files.sort();

        Ok(ScanResult {
            source_files,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan_for_c(root: &std::path::Path) -> ScanResult {
        let scanner = SourceScanner::new(root.to_path_buf(), "c".to_string());
        scanner.scan().unwrap()
    }

    #[test]
    fn test_scan_normal_directory() {
        // Create temporary test directory structure
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // Create test files
        fs::write(root.join("htos.c"), "int main(void) { return 0; }").unwrap();
        fs::write(root.join("httask.c"), "void task(void) {}").unwrap();
        fs::write(root.join("readme.md"), "# README").unwrap();

        let result = scan_for_c(root);

        // Verify results
        assert_eq!(result.source_files.len(), 2);
        assert!(result.warnings.is_empty());

        let file_names: Vec<String> = result
            .source_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(file_names.contains(&"htos.c".to_string()));
        assert!(file_names.contains(&"httask.c".to_string()));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = scan_for_c(temp_dir.path());

        assert_eq!(result.source_files.len(), 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_yields_empty_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("kernel");

        let scanner = SourceScanner::new(missing, "c".to_string());
        let result = scanner.scan().unwrap();

        // Missing source directory is an empty result, not an error
        assert_eq!(result.source_files.len(), 0);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_scan_nested_directories() {
        // Create temporary test directory structure with nested directories
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("drivers")).unwrap();
        fs::create_dir(root.join("drivers/uart")).unwrap();

        fs::write(root.join("htos.c"), "").unwrap();
        fs::write(root.join("drivers/gpio.c"), "").unwrap();
        fs::write(root.join("drivers/uart/uart.c"), "").unwrap();

        let result = scan_for_c(root);

        assert_eq!(result.source_files.len(), 3);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_skips_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // Create hidden directory with a matching file
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git/hook.c"), "// hook").unwrap();

        fs::write(root.join("htos.c"), "").unwrap();

        let result = scan_for_c(root);

        // Should only find htos.c, not .git/hook.c
        assert_eq!(result.source_files.len(), 1);
        assert!(result.warnings.is_empty());
        assert_eq!(
            result.source_files[0].file_name().unwrap().to_string_lossy(),
            "htos.c"
        );
    }

    #[test]
    fn test_scan_includes_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join(".vers.c"), "").unwrap();
        fs::write(root.join("htos.c"), "").unwrap();

        let result = scan_for_c(root);

        // Only hidden directories are skipped; a hidden file still matches
        assert_eq!(result.source_files.len(), 2);
        let file_names: Vec<String> = result
            .source_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert!(file_names.contains(&".vers.c".to_string()));
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // Create various file types
        fs::write(root.join("htos.c"), "").unwrap();
        fs::write(root.join("htos.h"), "").unwrap();
        fs::write(root.join("htos.o"), "").unwrap();
        fs::write(root.join("Makefile"), "").unwrap();

        let result = scan_for_c(root);

        assert_eq!(result.source_files.len(), 1);
        assert!(result.warnings.is_empty());
        assert_eq!(
            result.source_files[0].file_name().unwrap().to_string_lossy(),
            "htos.c"
        );
    }

    #[test]
    fn test_scan_returns_sorted_paths() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("drivers")).unwrap();
        fs::write(root.join("zeta.c"), "").unwrap();
        fs::write(root.join("alpha.c"), "").unwrap();
        fs::write(root.join("drivers/beta.c"), "").unwrap();

        let result = scan_for_c(root);

        let mut expected = result.source_files.clone();
        expected.sort();
        assert_eq!(result.source_files, expected);
        assert_eq!(
            result.source_files[0].file_name().unwrap().to_string_lossy(),
            "alpha.c"
        );
    }
}
