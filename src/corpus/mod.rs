//! Source corpus construction.
//!
//! The corpus is the concatenated text of every collected source file.
//! It is built once per run, before any usage evaluation starts, and is
//! immutable afterwards, which is what lets the per-file evaluations
//! share it across threads without any locking.

use crate::error::ScanError;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Concatenated text of every corpus source file
#[derive(Debug)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Read every file and concatenate contents in list order, with no
    /// separator.
    ///
    /// Any unreadable file aborts the build. A partial corpus would
    /// silently misreport identifiers as unused, so there is no
    /// skip-and-continue mode here.
    pub fn build(files: &[PathBuf]) -> Result<Self> {
        let mut text = String::new();
        for path in files {
            let contents = fs::read_to_string(path)
                .map_err(|source| ScanError::UnreadableSource {
                    path: path.clone(),
                    source,
                })
                .into_diagnostic()?;
            text.push_str(&contents);
        }

        debug!("Corpus built from {} files ({} bytes)", files.len(), text.len());
        Ok(Self { text })
    }

    /// Build a corpus directly from text, bypassing the filesystem
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Case-sensitive raw substring containment.
    ///
    /// An empty needle matches nothing, so the empty identifiers that
    /// malformed declaration lines produce stay reported as unused.
    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.text.contains(needle)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
