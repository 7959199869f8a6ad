//! `aisniffer sniff --url <URL>` – interactive wordlist generation for a target.
//!
//! Asks for a keyword (or `0` for a non-targeted list) unless one was given on
//! the command line, generates the list and saves it under the output
//! directory with a timestamped name.

use aisniffer_core::candidates::{collect_wordlist, KeywordExpansionSource};
use aisniffer_core::storage::{
    keyword_file_name, non_targeted_file_name, timestamp_now, write_wordlist,
};
use aisniffer_core::wordlist::{generate_non_targeted_wordlist, resolve_max_words, resolve_size};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const KEYWORD_PROMPT: &str =
    "Give a keyword to narrow down wordlist, or enter 0 to use a non-targeted wordlist";
const SIZE_PROMPT: &str = "How large should the non-targeted wordlist be?";
const NON_TARGETED_CHOICE: &str = "0";

/// Resolved options for one `sniff` run.
#[derive(Debug, Clone)]
pub struct SniffArgs {
    pub url: String,
    pub outdir: PathBuf,
    pub max_words: i64,
    pub keyword: Option<String>,
    pub size: Option<i64>,
    pub default_size: i64,
}

#[derive(Debug, PartialEq, Eq)]
enum Choice {
    NonTargeted(i64),
    Keyword(String),
}

/// Prints `question [default]: ` and reads one line. Blank input or EOF yields the default.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: &str,
) -> Result<String> {
    write!(out, "{question} [{default}]: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read answer")?;
    let answer = line.trim();
    Ok(if answer.is_empty() { default } else { answer }.to_string())
}

/// Like [`prompt`] but re-asks until the answer parses as an integer.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: i64,
) -> Result<i64> {
    loop {
        let answer = prompt(input, out, question, &default.to_string())?;
        match answer.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(out, "Please enter a valid integer number")?,
        }
    }
}

fn choose<R: BufRead, W: Write>(args: &SniffArgs, input: &mut R, out: &mut W) -> Result<Choice> {
    if let Some(keyword) = &args.keyword {
        let keyword = keyword.trim();
        if !keyword.is_empty() && keyword != NON_TARGETED_CHOICE {
            return Ok(Choice::Keyword(keyword.to_string()));
        }
    } else if args.size.is_none() {
        let answer = prompt(input, out, KEYWORD_PROMPT, NON_TARGETED_CHOICE)?;
        if answer != NON_TARGETED_CHOICE {
            return Ok(Choice::Keyword(answer));
        }
    }

    let size = match args.size {
        Some(size) => size,
        None => prompt_int(input, out, SIZE_PROMPT, args.default_size)?,
    };
    Ok(Choice::NonTargeted(size))
}

/// Runs the sniff flow and returns the path of the saved wordlist.
/// Nothing is written when the keyword yields no usable words.
pub fn run_sniff<R: BufRead, W: Write>(
    args: &SniffArgs,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    writeln!(out, "AISniffer targeting: {}", args.url)?;
    let choice = choose(args, input, out)?;
    let stamp = timestamp_now();

    let (kind, words, outfile) = match choice {
        Choice::NonTargeted(requested) => {
            let size = resolve_size(requested)?;
            let words = generate_non_targeted_wordlist(size);
            let outfile = args.outdir.join(non_targeted_file_name(size, &stamp));
            ("non-targeted", words, outfile)
        }
        Choice::Keyword(keyword) => {
            let max_words = resolve_max_words(args.max_words)?;
            let words = collect_wordlist(&KeywordExpansionSource, &keyword, max_words)?;
            let outfile = args.outdir.join(keyword_file_name(&keyword, &stamp));
            ("keyword-targeted", words, outfile)
        }
    };

    tracing::info!(url = %args.url, kind, words = words.len(), "sniff wordlist ready");
    write_wordlist(&words, &outfile)?;
    writeln!(
        out,
        "Saved {kind} wordlist: {} ({} entries)",
        outfile.display(),
        words.len()
    )?;
    Ok(outfile)
}
