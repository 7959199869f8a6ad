//! Candidate sources for keyword-targeted wordlists.
//!
//! A [`CandidateSource`] turns a keyword and a word budget into raw candidate
//! strings. Output from any source is treated as untrusted: it is passed
//! through [`sanitize_candidate`] before it reaches a wordlist.

use crate::error::GenerateError;
use crate::sanitize::sanitize_candidate;
use crate::wordlist::{dedupe_keep_order, generate_ai_wordlist, WordList};

/// Something that proposes candidate paths for a keyword.
pub trait CandidateSource {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Returns raw candidates for `keyword`. `max_words` is a budget hint;
    /// sources may return more, since some output is expected to be rejected.
    fn candidates(
        &self,
        keyword: &str,
        max_words: usize,
    ) -> Result<Vec<String>, GenerateError>;
}

/// Offline source that expands the keyword against built-in web terms.
///
/// Returns the full expansion so that variants rejected by the sanitizer
/// (e.g. ones containing spaces) do not eat into the word budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExpansionSource;

impl CandidateSource for KeywordExpansionSource {
    fn name(&self) -> &str {
        "keyword-expansion"
    }

    fn candidates(&self, keyword: &str, _max_words: usize) -> Result<Vec<String>, GenerateError> {
        Ok(generate_ai_wordlist(keyword, usize::MAX))
    }
}

/// Outcome of filtering a batch of raw candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredCandidates {
    pub words: WordList,
    /// Candidates dropped by the sanitizer.
    pub rejected: usize,
}

/// Sanitizes, dedupes and truncates raw candidates.
pub fn filter_candidates<I, S>(raw: I, max_words: usize) -> FilteredCandidates
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rejected = 0usize;
    let accepted = raw.into_iter().filter_map(|c| {
        let sanitized = sanitize_candidate(c.as_ref());
        if sanitized.is_none() {
            tracing::debug!(candidate = c.as_ref(), "rejected candidate");
            rejected += 1;
        }
        sanitized
    });
    let mut words = dedupe_keep_order(accepted);
    words.truncate(max_words);
    FilteredCandidates { words, rejected }
}

/// Fetches candidates from `source` and returns the sanitized wordlist.
///
/// Fails with [`GenerateError::NoUsableCandidates`] when a non-zero budget
/// ends up with no words, so callers never persist an empty list.
pub fn collect_wordlist(
    source: &dyn CandidateSource,
    keyword: &str,
    max_words: usize,
) -> Result<WordList, GenerateError> {
    let raw = source.candidates(keyword, max_words)?;
    let total = raw.len();
    let filtered = filter_candidates(raw, max_words);
    if filtered.rejected > 0 {
        tracing::info!(
            source = source.name(),
            rejected = filtered.rejected,
            total,
            "dropped unsafe candidates"
        );
    }
    if filtered.words.is_empty() && max_words > 0 {
        return Err(GenerateError::NoUsableCandidates {
            keyword: keyword.to_string(),
            rejected: filtered.rejected,
        });
    }
    Ok(filtered.words)
}
