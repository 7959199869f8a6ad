//! Keyword-centred wordlist: keyword variants crossed with common web terms.

use super::vocab::WEB_TERMS;
use super::{dedupe_keep_order, WordList};

/// Spelling variants of a keyword: as given, without spaces, with `_` or `-`
/// for spaces, and pluralized. Input is trimmed and lowercased; empty variants
/// are dropped.
pub fn keyword_variants(keyword: &str) -> WordList {
    let keyword = keyword.trim().to_lowercase();
    let variants = [
        keyword.clone(),
        keyword.replace(' ', ""),
        keyword.replace(' ', "_"),
        keyword.replace(' ', "-"),
        format!("{keyword}s"),
    ];
    dedupe_keep_order(variants.into_iter().filter(|v| !v.is_empty()))
}

/// Builds up to `max_words` paths around `keyword`.
///
/// Each variant is emitted alone and then combined with every web term as
/// `v/t`, `t/v`, `v_t` and `v-t`. The list is deduplicated and truncated;
/// it is never padded, so it may be shorter than `max_words`.
pub fn generate_ai_wordlist(keyword: &str, max_words: usize) -> WordList {
    let variants = keyword_variants(keyword);
    let combined = variants.iter().flat_map(|v| {
        std::iter::once(v.clone()).chain(WEB_TERMS.iter().flat_map(move |t| {
            [
                format!("{v}/{t}"),
                format!("{t}/{v}"),
                format!("{v}_{t}"),
                format!("{v}-{t}"),
            ]
        }))
    });

    let mut words = dedupe_keep_order(combined);
    words.truncate(max_words);
    tracing::debug!(
        keyword,
        variants = variants.len(),
        words = words.len(),
        "generated keyword wordlist"
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn variants_for_multi_word_keyword() {
        assert_eq!(
            keyword_variants("  Admin Panel "),
            vec![
                "admin panel",
                "adminpanel",
                "admin_panel",
                "admin-panel",
                "admin panels"
            ]
        );
    }

    #[test]
    fn variants_collapse_for_single_word() {
        assert_eq!(keyword_variants("Invoice"), vec!["invoice", "invoices"]);
    }

    #[test]
    fn blank_keyword_keeps_only_plural_variant() {
        assert_eq!(keyword_variants("   "), vec!["s"]);
    }

    #[test]
    fn admin_panel_contains_expected_entries() {
        let words = generate_ai_wordlist("Admin Panel", 2000);
        assert!(words.contains(&"adminpanel".to_string()));
        assert!(words.contains(&"adminpanel/login".to_string()));
        assert!(words.contains(&"docs/admin-panel".to_string()));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn output_is_unique_and_nonempty() {
        let words = generate_ai_wordlist("Admin Panel", 2000);
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
        assert!(words.iter().all(|w| !w.is_empty()));
        // 5 variants, each alone plus 4 forms per web term.
        assert_eq!(words.len(), 5 * (1 + 4 * WEB_TERMS.len()));
    }

    #[test]
    fn order_follows_variants_then_terms() {
        let words = generate_ai_wordlist("billing", 6);
        assert_eq!(
            words,
            vec![
                "billing",
                "billing/admin",
                "admin/billing",
                "billing_admin",
                "billing-admin",
                "billing/login"
            ]
        );
    }

    #[test]
    fn truncates_without_padding() {
        assert_eq!(generate_ai_wordlist("billing", 10).len(), 10);
        assert!(generate_ai_wordlist("billing", 0).is_empty());
        let all = generate_ai_wordlist("billing", 100_000);
        assert_eq!(all.len(), 2 * (1 + 4 * WEB_TERMS.len()));
    }
}
