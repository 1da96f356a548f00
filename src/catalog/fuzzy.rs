//! Fuzzy product name matching using strsim.
//!
//! CHANGELOG:
//! - 10/18/2026 - Retargeted at product names
//! - 01/10/2026 - Initial stub

use strsim::{jaro_winkler, normalized_levenshtein, sorensen_dice};

/// Below this score a name is not worth suggesting.
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Fuzzy match result.
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    pub score: f64,
    pub strategy: &'static str,
}

/// Score two names with several strategies and keep the best.
///
/// - jaro_winkler: typos near the start weigh more
/// - sorensen_dice: bigram overlap
/// - levenshtein: edit distance ratio
/// - token_sort: word order independent
pub fn multi_match(query: &str, target: &str) -> FuzzyMatch {
    let query_lower = query.to_lowercase();
    let target_lower = target.to_lowercase();

    let strategies = [
        ("jaro_winkler", jaro_winkler(&query_lower, &target_lower)),
        ("sorensen_dice", sorensen_dice(&query_lower, &target_lower)),
        ("levenshtein", normalized_levenshtein(&query_lower, &target_lower)),
        ("token_sort", token_sort_ratio(&query_lower, &target_lower)),
    ];

    strategies
        .into_iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(strategy, score)| FuzzyMatch { score, strategy })
        .unwrap_or(FuzzyMatch {
            score: 0.0,
            strategy: "none",
        })
}

/// Token sort ratio - sort words before comparing.
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let mut a_tokens: Vec<&str> = a.split_whitespace().collect();
    let mut b_tokens: Vec<&str> = b.split_whitespace().collect();
    a_tokens.sort_unstable();
    b_tokens.sort_unstable();

    jaro_winkler(&a_tokens.join(" "), &b_tokens.join(" "))
}
