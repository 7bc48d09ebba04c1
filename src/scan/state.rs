//! Region classification state machine.
//!
//! Text inside a document is either part of the `<title>` element or part of
//! the body. Only the title tag's start and end change the region; every other
//! tag is a no-op for state purposes.

use crate::scan::events::MarkupEvent;

const TITLE_TAG: &str = "title";

/// The region a text fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Inside the `<title>` element.
    Title,
    /// Everywhere else.
    #[default]
    Body,
}

impl Region {
    /// Returns the region after observing `event`.
    ///
    /// Tag name comparison is case-insensitive, so `<TITLE>` and `<Title>`
    /// behave like `<title>`. Text events never change the region.
    pub fn on_event(self, event: &MarkupEvent<'_>) -> Region {
        match event {
            MarkupEvent::StartTag(name) if name.eq_ignore_ascii_case(TITLE_TAG) => Region::Title,
            MarkupEvent::EndTag(name) if name.eq_ignore_ascii_case(TITLE_TAG) => Region::Body,
            _ => self,
        }
    }
}
