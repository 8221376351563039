//! Identifier extraction from generated definition files.
//!
//! Generated files declare one resource string per line, in the shape
//! `internal static let greeting = "Hi"`. Extraction is line-oriented
//! and purely structural: no parser, no AST, exactly the substring
//! between the declaration prefix and the ` =` token that follows it.

use crate::error::ScanError;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::Path;

/// Extracts declared resource-string identifiers from generated files
pub struct IdentifierExtractor {
    /// Declaration prefix including its trailing space
    prefix: String,
}

impl IdentifierExtractor {
    /// `prefix` is the declaration token without its trailing space,
    /// e.g. `internal static let`.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: format!("{} ", prefix.trim_end()),
        }
    }

    /// Read a generated file and extract one identifier per declaration
    /// line. An unreadable file aborts the run.
    pub fn extract_from_file(&self, path: &Path) -> Result<Vec<String>> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ScanError::UnreadableGenerated {
                path: path.to_path_buf(),
                source,
            })
            .into_diagnostic()?;
        Ok(self.extract(&contents))
    }

    /// Extract identifiers from generated file text.
    ///
    /// Duplicate declarations yield duplicate entries; each one is
    /// evaluated independently downstream.
    pub fn extract(&self, contents: &str) -> Vec<String> {
        contents
            .split('\n')
            .filter_map(|line| self.identifier_of(line))
            .map(str::to_string)
            .collect()
    }

    /// The identifier declared on a line, if the line is a declaration.
    ///
    /// The line is trimmed of surrounding whitespace first; a line that
    /// does not start with the prefix declares nothing. A declaration
    /// line with no ` =` after the prefix yields the empty string: the
    /// corpus lookup treats that as a miss, so the line surfaces in the
    /// unused listing instead of crashing the scan.
    pub fn identifier_of<'l>(&self, line: &'l str) -> Option<&'l str> {
        let trimmed = line.trim();
        if !trimmed.starts_with(&self.prefix) {
            return None;
        }

        let rest = &trimmed[self.prefix.len()..];
        match rest.find(" =") {
            Some(end) => Some(&rest[..end]),
            None => Some(""),
        }
    }
}
