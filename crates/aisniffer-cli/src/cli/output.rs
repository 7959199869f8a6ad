//! Where command output goes: a wordlist file, or stdout.

use aisniffer_core::storage::write_wordlist;
use anyhow::Result;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `words` to `output`, or one per line to stdout when `None`.
pub fn emit(words: &[String], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_wordlist(words, path)?;
            eprintln!("Saved {} entries to {}", words.len(), path.display());
        }
        None => write_lines(words, &mut io::stdout().lock())?,
    }
    Ok(())
}

pub fn write_lines<W: Write>(words: &[String], out: W) -> Result<()> {
    let mut out = BufWriter::new(out);
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}
