//! Markup event decomposition.
//!
//! This module splits a raw markup document into a stream of events:
//! - `StartTag` / `EndTag` for element tags (attributes tolerated, any name)
//! - `Text` for character data between tags
//!
//! Comments, doctypes, and processing instructions are consumed silently.
//! The decomposition is a single forward pass and never fails: malformed
//! markup degrades to best-effort text, never to an error.

/// A single event produced while walking a markup document.
///
/// Events borrow from the source document and are consumed immediately;
/// they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    /// An opening tag, carrying the tag name (attributes stripped).
    StartTag(&'a str),
    /// A closing tag, carrying the tag name.
    EndTag(&'a str),
    /// Character data between tags.
    Text(&'a str),
}

/// Iterator over the [`MarkupEvent`]s of a document, in document order.
pub struct MarkupEvents<'a> {
    rest: &'a str,
}

/// Returns an iterator over the markup events of `document`.
pub fn markup_events(document: &str) -> MarkupEvents<'_> {
    MarkupEvents { rest: document }
}

impl<'a> Iterator for MarkupEvents<'a> {
    type Item = MarkupEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() {
                return None;
            }
            match self.rest.find('<') {
                Some(0) => {
                    if let Some(event) = self.consume_tag() {
                        return Some(event);
                    }
                    // Comment/doctype/PI or empty tag: consumed, keep walking.
                }
                Some(idx) => {
                    let (text, rest) = self.rest.split_at(idx);
                    self.rest = rest;
                    return Some(MarkupEvent::Text(text));
                }
                None => {
                    let text = self.rest;
                    self.rest = "";
                    return Some(MarkupEvent::Text(text));
                }
            }
        }
    }
}

impl<'a> MarkupEvents<'a> {
    /// Consumes one construct starting at `<`. Returns `None` for constructs
    /// that carry no event (comments, doctypes, processing instructions,
    /// nameless tags).
    fn consume_tag(&mut self) -> Option<MarkupEvent<'a>> {
        let after = &self.rest[1..];

        if after.starts_with("!--") {
            // Comment: skip to the closing marker. An unterminated comment
            // swallows the remainder of the document.
            match after.find("-->") {
                Some(end) => self.rest = &after[end + 3..],
                None => self.rest = "",
            }
            return None;
        }

        if after.starts_with('!') || after.starts_with('?') {
            // Doctype or processing instruction.
            match after.find('>') {
                Some(end) => self.rest = &after[end + 1..],
                None => self.rest = "",
            }
            return None;
        }

        match after.find('>') {
            Some(end) => {
                let raw = &after[..end];
                self.rest = &after[end + 1..];
                parse_tag(raw)
            }
            None => {
                // A `<` with no closing `>` before EOF: treat the remainder
                // as literal text.
                let text = self.rest;
                self.rest = "";
                Some(MarkupEvent::Text(text))
            }
        }
    }
}

/// Parses the interior of a tag (between `<` and `>`) into an event.
fn parse_tag(raw: &str) -> Option<MarkupEvent<'_>> {
    if let Some(stripped) = raw.strip_prefix('/') {
        let name = tag_name(stripped);
        if name.is_empty() {
            return None;
        }
        return Some(MarkupEvent::EndTag(name));
    }
    let name = tag_name(raw);
    if name.is_empty() {
        return None;
    }
    Some(MarkupEvent::StartTag(name))
}

/// Extracts the tag name: everything up to the first whitespace or `/`.
fn tag_name(raw: &str) -> &str {
    raw.trim_start()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}
