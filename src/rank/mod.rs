//! Word frequency ranking.
//!
//! Aggregates a token sequence into per-word counts and selects the top N.
//! Ordering is deterministic: count descending, with ties broken by the
//! position of the word's first occurrence in the input. The first-seen index
//! is tracked explicitly alongside each count so the result never depends on
//! map iteration order.

use std::collections::HashMap;

/// A word and its occurrence count in the final top-N output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences in the token sequence.
    pub count: u64,
}

/// Returns the top `n` words of `tokens` by occurrence count.
///
/// Ties rank the word that appeared earliest in the input first. Fewer than
/// `n` distinct words returns all of them; `n` of zero returns an empty
/// ranking.
pub fn top_words(tokens: &[String], n: usize) -> Vec<RankedEntry> {
    if n == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for (index, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(word, count, _)| RankedEntry {
            word: word.to_string(),
            count,
        })
        .collect()
}
