//! `aisniffer sanitize [FILE]` – keep only safe path tokens from candidate lines.

use aisniffer_core::candidates::{filter_candidates, FilteredCandidates};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::cli::output::write_lines;

/// Reads candidate lines and filters them; no word limit applies.
pub fn sanitize_lines<R: BufRead>(input: R) -> Result<FilteredCandidates> {
    let lines = input
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("read candidates")?;
    Ok(filter_candidates(lines, usize::MAX))
}

pub fn run_sanitize(path: Option<&Path>) -> Result<()> {
    let filtered = match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open {}", p.display()))?;
            sanitize_lines(BufReader::new(f))?
        }
        None => sanitize_lines(io::stdin().lock())?,
    };
    write_lines(&filtered.words, io::stdout().lock())?;
    eprintln!(
        "{} accepted, {} rejected",
        filtered.words.len(),
        filtered.rejected
    );
    Ok(())
}
