//! Typed errors for the scan pipeline.
//!
//! Every variant here aborts the run: a scan over a partial corpus or a
//! partial identifier set would misreport identifiers as unused, so the
//! pipeline refuses to degrade.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan run
#[derive(Error, Debug)]
pub enum ScanError {
    /// A root directory could not be traversed
    #[error("failed to traverse directory {}: {message}", .root.display())]
    Traversal { root: PathBuf, message: String },

    /// A source file could not be read while building the corpus
    #[error("failed to read source file {}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated definition file could not be read
    #[error("failed to read generated file {}", .path.display())]
    UnreadableGenerated {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
