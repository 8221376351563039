//! Usage filtering against the source corpus.

use crate::corpus::Corpus;

/// Return the identifiers that occur nowhere in the corpus.
///
/// The test is raw substring containment, case-sensitive, with no word
/// boundary awareness: an identifier that happens to be a fragment of a
/// longer symbol name counts as used. That imprecision is part of the
/// contract; the matching semantics must not be upgraded to token or
/// word-boundary matching.
pub fn find_unused(corpus: &Corpus, identifiers: Vec<String>) -> Vec<String> {
    identifiers
        .into_iter()
        .filter(|identifier| !corpus.contains(identifier))
        .collect()
}
