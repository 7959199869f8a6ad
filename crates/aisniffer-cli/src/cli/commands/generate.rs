//! `aisniffer generate` – non-targeted wordlist to a file or stdout.

use aisniffer_core::wordlist::{
    generate_non_targeted_wordlist, generate_non_targeted_wordlist_with_rng, resolve_size,
};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use crate::cli::output::emit;

pub fn run_generate(size: i64, seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let size = resolve_size(size)?;
    let words = match seed {
        Some(seed) => {
            generate_non_targeted_wordlist_with_rng(size, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_non_targeted_wordlist(size),
    };
    emit(&words, output)
}
