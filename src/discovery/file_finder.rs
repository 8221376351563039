use crate::config::Config;
use crate::error::ScanError;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// File finder for collecting the source files that form the corpus
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Collect all qualifying files under each root, in traversal order.
    ///
    /// The collector accepts many roots even though the CLI passes a
    /// single one. A root that cannot be traversed aborts the run: a
    /// silently partial corpus would misreport identifiers as unused.
    pub fn find_files(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            self.scan_directory(root, &mut files)?;
        }
        debug!("Collected {} source files", files.len());
        Ok(files)
    }

    /// Recursively scan a single root directory
    fn scan_directory(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        if !root.is_dir() {
            return Err(ScanError::Traversal {
                root: root.to_path_buf(),
                message: "not a directory".to_string(),
            })
            .into_diagnostic();
        }

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry
                .map_err(|e| ScanError::Traversal {
                    root: root.to_path_buf(),
                    message: e.to_string(),
                })
                .into_diagnostic()?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.config.matches_extension(path) {
                continue;
            }
            if self.config.is_excluded(path) {
                trace!("Excluding {}", path.display());
                continue;
            }

            trace!("Found {}", path.display());
            files.push(path.to_path_buf());
        }

        Ok(())
    }
}
