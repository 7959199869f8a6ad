//! Persisting generated wordlists.
//!
//! A wordlist is written as UTF-8, one word per line with a trailing newline.
//! Data goes to a `.part` file first and is renamed into place, so a reader
//! never sees a half-written list.

mod naming;

pub use naming::{keyword_file_name, non_targeted_file_name, timestamp, timestamp_now};

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `list.txt` → `list.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `words` to `path`, creating parent directories as needed.
///
/// An empty list produces a file holding a single newline.
pub fn write_wordlist<S: AsRef<str>>(words: &[S], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let tmp = temp_path(path);
    if let Err(err) = write_and_rename(words, &tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    tracing::info!(path = %path.display(), words = words.len(), "wrote wordlist");
    Ok(())
}

fn write_and_rename<S: AsRef<str>>(words: &[S], tmp: &Path, path: &Path) -> Result<()> {
    let file = fs::File::create(tmp)
        .with_context(|| format!("failed to create temp file: {}", tmp.display()))?;
    let mut out = BufWriter::new(file);
    if words.is_empty() {
        writeln!(out).with_context(|| format!("write {}", tmp.display()))?;
    }
    for word in words {
        writeln!(out, "{}", word.as_ref()).with_context(|| format!("write {}", tmp.display()))?;
    }
    out.into_inner()
        .map_err(|e| e.into_error())
        .and_then(|f| f.sync_all())
        .with_context(|| format!("flush {}", tmp.display()))?;

    fs::rename(tmp, path)
        .with_context(|| format!("failed to rename {} to {}", tmp.display(), path.display()))
}
