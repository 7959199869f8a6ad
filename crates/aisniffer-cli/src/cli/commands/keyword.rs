//! `aisniffer keyword <KEYWORD>` – keyword-targeted wordlist.

use aisniffer_core::candidates::{collect_wordlist, KeywordExpansionSource};
use aisniffer_core::wordlist::resolve_max_words;
use anyhow::Result;
use std::path::Path;

use crate::cli::output::emit;

pub fn run_keyword(keyword: &str, max_words: i64, output: Option<&Path>) -> Result<()> {
    let max_words = resolve_max_words(max_words)?;
    let words = collect_wordlist(&KeywordExpansionSource, keyword, max_words)?;
    emit(&words, output)
}
