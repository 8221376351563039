//! unusedresources - Unused resource-string detection for Swift projects
//!
//! This library finds SwiftGen-style resource-string constants that are
//! declared in generated definition files but never referenced anywhere
//! in a project's source tree, so dead localization entries can be
//! pruned.
//!
//! # Architecture
//!
//! The detection pipeline consists of:
//! 1. **File Discovery** - Collect the source files that form the corpus
//! 2. **Corpus Building** - Concatenate their text into one searchable string
//! 3. **Identifier Extraction** - Pull declared identifiers out of each generated file
//! 4. **Usage Filtering** - Keep the identifiers the corpus never mentions
//! 5. **Aggregation** - Evaluate generated files in parallel and merge behind one barrier
//! 6. **Reporting** - Render the map sorted by file path, then by identifier
//!
//! Usage detection is a raw substring test over the corpus. That is the
//! whole method: it never parses source code, and an identifier that is
//! a fragment of a longer symbol counts as used.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod prune;
pub mod report;

pub use analysis::{ScanReport, UnusedMap, UnusedStringDetector};
pub use config::Config;
pub use corpus::Corpus;
pub use discovery::FileFinder;
pub use error::ScanError;
pub use extract::IdentifierExtractor;
pub use report::{ReportFormat, Reporter};

use miette::Result;
use std::path::PathBuf;

/// Run the full detection pipeline: collect source files under the
/// roots, build the corpus, evaluate every generated file in parallel,
/// and merge the results into one report.
///
/// This is the single entry point both the CLI and library consumers
/// build on.
pub fn find_unused_identifiers(
    roots: &[PathBuf],
    generated_files: &[PathBuf],
    config: &Config,
) -> Result<ScanReport> {
    let finder = FileFinder::new(config);
    let files = finder.find_files(roots)?;
    let corpus = Corpus::build(&files)?;
    let extractor = IdentifierExtractor::new(&config.declaration_prefix);
    UnusedStringDetector::new(&corpus, &extractor).detect(generated_files)
}
