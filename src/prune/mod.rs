//! Removal helper for pruning declarations from generated file text.
//!
//! Deliberately not wired into the CLI: the scan itself never mutates
//! its inputs. Callers that want pruning pass the scan's unused list in
//! and write the returned text back themselves.

use crate::extract::IdentifierExtractor;

/// Return `contents` without the declaration lines of the given
/// identifiers.
///
/// Only declaration lines are candidates for removal; every other line
/// passes through untouched, as does a declaration whose identifier is
/// not in the set. Line structure is otherwise preserved.
pub fn without_identifiers(
    contents: &str,
    identifiers: &[String],
    extractor: &IdentifierExtractor,
) -> String {
    contents
        .split('\n')
        .filter(|line| match extractor.identifier_of(line) {
            Some(identifier) => !identifiers.iter().any(|i| i == identifier),
            None => true,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
