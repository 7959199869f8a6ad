//! CLI for AISniffer.

mod commands;
mod output;

use aisniffer_core::{config, logging};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_generate, run_keyword, run_sanitize, run_sniff, SniffArgs};

/// Top-level CLI for AISniffer.
#[derive(Debug, Parser)]
#[command(name = "aisniffer")]
#[command(about = "AISniffer: wordlist generation for web content discovery", long_about = None)]
pub struct Cli {
    /// More log detail (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a wordlist for a target, prompting for a keyword or size.
    Sniff {
        /// Base URL like http://10.10.10.10
        #[arg(short, long)]
        url: String,

        /// Where to save generated wordlists (default from config).
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// Max words for keyword wordlists (default from config).
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        max_words: Option<i64>,

        /// Keyword to narrow the wordlist; skips the prompt.
        #[arg(short, long, conflicts_with = "size")]
        keyword: Option<String>,

        /// Non-targeted wordlist size; skips the prompt.
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        size: Option<i64>,
    },

    /// Generate a non-targeted wordlist.
    Generate {
        /// Number of words (minimum 50; default from config).
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        size: Option<i64>,

        /// Seed for the padding RNG, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a keyword-targeted wordlist.
    Keyword {
        /// Keyword to expand, e.g. "admin panel".
        keyword: String,

        /// Max words (default from config).
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        max_words: Option<i64>,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter candidate paths (one per line) down to safe path tokens.
    Sanitize {
        /// File with candidates (stdin if omitted).
        path: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let Err(err) = logging::init_logging(cli.verbose) {
            logging::init_logging_stderr(cli.verbose);
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sniff {
                url,
                outdir,
                max_words,
                keyword,
                size,
            } => {
                let args = SniffArgs {
                    url,
                    outdir: outdir.unwrap_or_else(|| cfg.outdir.clone()),
                    max_words: max_words.unwrap_or(cfg.max_words as i64),
                    keyword,
                    size,
                    default_size: cfg.default_size as i64,
                };
                let stdin = io::stdin();
                run_sniff(&args, &mut stdin.lock(), &mut io::stdout())?;
            }
            CliCommand::Generate { size, seed, output } => {
                let size = size.unwrap_or(cfg.default_size as i64);
                run_generate(size, seed, output.as_deref())?;
            }
            CliCommand::Keyword {
                keyword,
                max_words,
                output,
            } => {
                let max_words = max_words.unwrap_or(cfg.max_words as i64);
                run_keyword(&keyword, max_words, output.as_deref())?;
            }
            CliCommand::Sanitize { path } => run_sanitize(path.as_deref())?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
