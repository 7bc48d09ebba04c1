//! Word normalization and filtering.
//!
//! Candidate words from body text pass through a fixed pipeline: lowercase and
//! trim, reject anything containing punctuation, reject stopwords, reject
//! words of two characters or fewer. A word is dropped the instant any stage
//! rejects it.

use std::collections::HashSet;
use std::sync::LazyLock;

/// ASCII punctuation characters. A word containing any of these anywhere is
/// rejected entirely, which also discards contractions and hyphenated words.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Minimum surviving word length, in characters. Words at or below this
/// length are rejected.
const MIN_WORD_LENGTH: usize = 2;

/// Common English function words excluded from ranking consideration.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "of",
        "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
        "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
        "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
        "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
        "when", "where", "which", "while", "who", "whom", "why", "will", "with", "you",
        "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Normalizes a candidate word into a token, or rejects it.
///
/// Returns `Some(token)` for words that survive every filter stage, `None`
/// otherwise. The stages run in order and short-circuit on the first
/// rejection.
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }
    if word.chars().any(|c| PUNCTUATION.contains(c)) {
        return None;
    }
    if STOPWORDS.contains(word.as_str()) {
        return None;
    }
    if word.chars().count() <= MIN_WORD_LENGTH {
        return None;
    }
    Some(word)
}
