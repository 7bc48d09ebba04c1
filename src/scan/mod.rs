//! Tokenizing markup scanner.
//!
//! This module performs a single forward pass over a markup document and
//! produces two things:
//! - the page title, assembled from text captured inside the `<title>` element
//! - the ordered sequence of filtered body tokens
//!
//! The scanner accepts arbitrary text. Unclosed tags, unknown entities, and
//! other malformed markup degrade to best-effort results; there is no error
//! path in this module.

mod events;
mod filter;
mod state;

pub use events::{markup_events, MarkupEvent};
pub use filter::normalize_word;
pub use state::Region;

/// The result of one full scan over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The extracted title, trimmed; empty if the document has no title tag.
    pub title: String,
    /// Filtered body tokens, in document order.
    pub tokens: Vec<String>,
}

/// Scans a complete markup document.
///
/// Walks the document's markup events in order, tracking whether text falls
/// inside the title element. Title text is accumulated verbatim (fragments
/// joined with single spaces) and never tokenized; body text is split on
/// whitespace and passed through the word filter pipeline.
pub fn scan_document(document: &str) -> ScanOutcome {
    let mut region = Region::default();
    let mut title_fragments: Vec<&str> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();

    for event in markup_events(document) {
        region = region.on_event(&event);
        if let MarkupEvent::Text(fragment) = event {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            match region {
                Region::Title => title_fragments.push(fragment),
                Region::Body => {
                    for word in fragment.split_whitespace() {
                        if let Some(token) = normalize_word(word) {
                            tokens.push(token);
                        }
                    }
                }
            }
        }
    }

    ScanOutcome {
        title: title_fragments.join(" "),
        tokens,
    }
}
