//! Wordlist generation.
//!
//! Two generators build candidate URL-path wordlists:
//! - [`generate_non_targeted_wordlist`] expands a fixed vocabulary of common
//!   web-application terms and pads with random pairings up to a target size.
//! - [`generate_ai_wordlist`] expands a single keyword against a small set of
//!   web terms (offline stand-in for model-driven generation).
//!
//! Both share [`dedupe_keep_order`] as their only de-duplication primitive.

mod keyword;
mod non_targeted;
mod size;
pub mod vocab;

use std::collections::HashSet;

pub use keyword::{generate_ai_wordlist, keyword_variants};
pub use non_targeted::{
    expand_term, generate_non_targeted_wordlist, generate_non_targeted_wordlist_with_rng,
};
pub use size::{resolve_max_words, resolve_size, MAX_SIZE, MIN_SIZE};

/// A single candidate URL path segment.
pub type Word = String;

/// Ordered list of words, in the order they should be written out.
pub type WordList = Vec<Word>;

/// Returns each distinct item once, in order of first occurrence.
pub fn dedupe_keep_order<I, S>(items: I) -> WordList
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
