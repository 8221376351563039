//! Parallel per-file evaluation and aggregation.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use miette::Result;
use rayon::prelude::*;
use tracing::debug;

use super::unused::find_unused;
use crate::corpus::Corpus;
use crate::extract::IdentifierExtractor;

/// Map from generated file path to its unused identifiers, sorted
/// ascending within each file.
///
/// A key is present only when its identifier list is non-empty. The
/// ordered map keeps reporting deterministic no matter which worker
/// finishes first.
pub type UnusedMap = BTreeMap<PathBuf, Vec<String>>;

/// Outcome of evaluating every generated file against the corpus
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Generated files with at least one unused identifier
    pub unused: UnusedMap,
    /// Generated files whose identifiers are all referenced, sorted
    pub clean: Vec<PathBuf>,
}

impl ScanReport {
    /// Total number of unused identifiers across all files
    pub fn total_unused(&self) -> usize {
        self.unused.values().map(Vec::len).sum()
    }
}

/// Runs the per-file evaluations against a shared corpus
pub struct UnusedStringDetector<'a> {
    corpus: &'a Corpus,
    extractor: &'a IdentifierExtractor,
}

impl<'a> UnusedStringDetector<'a> {
    pub fn new(corpus: &'a Corpus, extractor: &'a IdentifierExtractor) -> Self {
        Self { corpus, extractor }
    }

    /// Evaluate every generated file and merge the results.
    ///
    /// Files are independent units of work and run in parallel. The
    /// corpus is shared read-only; the result map is the only contended
    /// state and each merge takes its lock just long enough to insert.
    /// The parallel iterator joins every worker before this returns, and
    /// an unreadable generated file aborts the whole run.
    pub fn detect(&self, generated_files: &[PathBuf]) -> Result<ScanReport> {
        let unused = Mutex::new(UnusedMap::new());
        let clean = Mutex::new(Vec::new());

        generated_files
            .par_iter()
            .try_for_each(|file| -> Result<()> {
                let identifiers = self.extractor.extract_from_file(file)?;
                debug!(
                    "{}: {} declared identifiers",
                    file.display(),
                    identifiers.len()
                );

                let mut abandoned = find_unused(self.corpus, identifiers);
                if abandoned.is_empty() {
                    debug!("{} has no unused identifiers", file.display());
                    clean.lock().unwrap().push(file.clone());
                } else {
                    abandoned.sort();
                    unused.lock().unwrap().insert(file.clone(), abandoned);
                }
                Ok(())
            })?;

        let mut report = ScanReport {
            unused: unused.into_inner().unwrap(),
            clean: clean.into_inner().unwrap(),
        };
        report.clean.sort();
        Ok(report)
    }
}
