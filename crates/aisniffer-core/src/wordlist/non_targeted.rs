//! Offline non-targeted wordlist: prefix/suffix expansion of common terms.

use std::sync::LazyLock;

use itertools::{iproduct, Itertools};
use rand::Rng;
use regex::Regex;

use super::vocab::{COMMON_BASE, PADDING_SEPARATORS, PREFIXES, SEPARATORS, SUFFIXES};
use super::{dedupe_keep_order, WordList, MIN_SIZE};

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]{2,}").expect("separator pattern is valid"));

/// Assembles one expanded term.
///
/// The separator is `sep1` unless it is empty, in which case `sep2` is used.
/// Non-empty parts are joined, runs of `-`/`_` collapse to a single `-`, and
/// leading/trailing separators are stripped. Returns `None` when nothing is left.
pub fn expand_term(
    base: &str,
    prefix: &str,
    suffix: &str,
    sep1: &str,
    sep2: &str,
) -> Option<String> {
    let sep = if sep1.is_empty() { sep2 } else { sep1 };
    let joined = [prefix, base, suffix]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(sep);
    let collapsed = SEPARATOR_RUN.replace_all(&joined, "-");
    let word = collapsed.trim_matches(|c: char| c == '-' || c == '_');
    (!word.is_empty()).then(|| word.to_string())
}

/// Base terms followed by every prefix/suffix/separator expansion, deduped.
fn expanded_terms() -> WordList {
    let expansions = iproduct!(COMMON_BASE, PREFIXES, SUFFIXES, SEPARATORS, SEPARATORS)
        .filter_map(|(base, pre, suf, sep1, sep2)| expand_term(base, pre, suf, sep1, sep2));
    let seeded = COMMON_BASE.iter().map(|s| s.to_string()).chain(expansions);
    dedupe_keep_order(seeded)
}

fn random_pair<R: Rng>(rng: &mut R) -> String {
    let a = COMMON_BASE[rng.gen_range(0..COMMON_BASE.len())];
    let b = COMMON_BASE[rng.gen_range(0..COMMON_BASE.len())];
    let sep = PADDING_SEPARATORS[rng.gen_range(0..PADDING_SEPARATORS.len())];
    format!("{a}{sep}{b}")
}

/// Builds a non-targeted wordlist of exactly `max(size, MIN_SIZE)` entries
/// using the thread-local RNG for padding.
pub fn generate_non_targeted_wordlist(size: usize) -> WordList {
    generate_non_targeted_wordlist_with_rng(size, &mut rand::thread_rng())
}

/// Builds a non-targeted wordlist, drawing padding pairs from `rng`.
///
/// The expansion phase is deterministic and duplicate-free. If it yields fewer
/// than the requested number of words, random two-term pairs are appended;
/// those are not deduplicated. The result is truncated to the requested size.
pub fn generate_non_targeted_wordlist_with_rng<R: Rng>(size: usize, rng: &mut R) -> WordList {
    let size = size.max(MIN_SIZE);
    let mut words = expanded_terms();
    let expanded = words.len();

    while words.len() < size {
        words.push(random_pair(rng));
    }
    words.truncate(size);

    tracing::debug!(
        size,
        expanded,
        padded = size.saturating_sub(expanded),
        "generated non-targeted wordlist"
    );
    words
}
