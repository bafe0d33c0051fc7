//! Segment location inside rendered text.
//!
//! After formatting, segments are found again in two ways: the designator
//! by its surviving sentinel pair, and the weekday/day-month prefixes by
//! searching for their label text. Absence is a valid outcome in both
//! forms, never an error — a missing segment simply receives no styling.

use crate::pattern::{SENTINEL_CLOSE, SENTINEL_OPEN};

/// A half-open byte range `[start, end)` within a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Byte offsets of a surviving sentinel pair in rendered text.
///
/// `open` and `close` address the sentinel characters themselves; the
/// designator text sits strictly between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelSpan {
    pub open: usize,
    pub close: usize,
}

impl SentinelSpan {
    /// The full span including both sentinel characters.
    pub fn outer(&self) -> Span {
        Span::new(self.open, self.close + SENTINEL_CLOSE.len_utf8())
    }

    /// The span strictly between the sentinel characters.
    pub fn inner(&self) -> Span {
        Span::new(self.open + SENTINEL_OPEN.len_utf8(), self.close)
    }
}

/// Finds the sentinel pair in `rendered`, if it survived formatting.
///
/// Returns `None` when either sentinel is missing or they appear out of
/// order — a defined degenerate case (a formatter that stripped or
/// reordered the markers), after which the designator is left unstyled.
pub fn sentinel_span(rendered: &str) -> Option<SentinelSpan> {
    let open = rendered.find(SENTINEL_OPEN)?;
    let close = rendered.find(SENTINEL_CLOSE)?;
    (close > open).then_some(SentinelSpan { open, close })
}

/// Finds the span bracketing every occurrence of `needle` in `rendered`.
///
/// Uses first-occurrence and last-occurrence search independently: the
/// span runs from the start of the first occurrence to the end of the
/// last. When the label appears once (the common case) this is an exact
/// match; a coincidentally repeated label widens the span to cover all of
/// them rather than picking one arbitrarily.
pub fn bracket_span(rendered: &str, needle: &str) -> Option<Span> {
    if needle.is_empty() {
        return None;
    }
    let first = rendered.find(needle)?;
    let last = rendered.rfind(needle)?;
    Some(Span::new(first, last + needle.len()))
}
