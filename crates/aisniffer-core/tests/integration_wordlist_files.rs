//! Integration test: generate both kinds of wordlist and persist them the way
//! the CLI does, then read the files back.

use aisniffer_core::candidates::{collect_wordlist, filter_candidates, KeywordExpansionSource};
use aisniffer_core::storage::{keyword_file_name, non_targeted_file_name, write_wordlist};
use aisniffer_core::wordlist::{generate_non_targeted_wordlist_with_rng, resolve_size};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

const STAMP: &str = "20250101_120000";

#[test]
fn non_targeted_file_matches_generated_list() {
    let dir = tempdir().unwrap();
    let size = resolve_size(7000).unwrap();
    let words = generate_non_targeted_wordlist_with_rng(size, &mut StdRng::seed_from_u64(3));
    let path = dir.path().join("lists").join(non_targeted_file_name(size, STAMP));

    write_wordlist(&words, &path).unwrap();

    let body = fs::read_to_string(&path).unwrap();
    assert!(body.ends_with('\n'));
    let read_back: Vec<&str> = body.lines().collect();
    assert_eq!(read_back.len(), 7000);
    assert_eq!(read_back, words);
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "nontargeted_7000_20250101_120000.txt"
    );
}

#[test]
fn keyword_file_is_unique_and_safe() {
    let dir = tempdir().unwrap();
    let words = collect_wordlist(&KeywordExpansionSource, "Admin Panel", 2000).unwrap();
    let path = dir.path().join(keyword_file_name("Admin Panel", STAMP));

    write_wordlist(&words, &path).unwrap();

    let body = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), lines.len());
    assert!(lines.contains(&"adminpanel"));
    assert!(lines.contains(&"adminpanel/login"));

    // Every line survives a second pass through the sanitizer unchanged.
    let refiltered = filter_candidates(lines.iter().copied(), usize::MAX);
    assert_eq!(refiltered.rejected, 0);
    assert_eq!(refiltered.words, lines);
}
