//! Pattern annotation and sentinel wrapping.
//!
//! Locale time patterns mark the AM/PM designator with a single specifier
//! character (`a` in the stock patterns). To restyle the rendered
//! designator we have to find it again *after* formatting, so the pattern
//! is rewritten with a pair of sentinel characters bracketing the
//! specifier and any whitespace immediately before it. The sentinels come
//! from a private-use range no formatter output ever contains, survive
//! formatting untouched, and are stripped before display.

/// Opening sentinel inserted before the designator span.
pub const SENTINEL_OPEN: char = '\u{EF00}';

/// Closing sentinel inserted after the designator specifier.
pub const SENTINEL_CLOSE: char = '\u{EF01}';

/// The quote character toggling literal runs in a pattern.
const QUOTE: char = '\'';

/// Location of a specifier inside a pattern.
///
/// Both fields are byte offsets into the pattern string. `start` is the
/// beginning of the span to bracket: the specifier itself, pulled back
/// over any whitespace immediately preceding it so that the whitespace
/// shares the designator's styling. `specifier` is the offset of the
/// specifier character proper; `start <= specifier` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecifierPos {
    pub start: usize,
    pub specifier: usize,
}

/// Finds the first unquoted occurrence of `specifier` in `pattern`.
///
/// Quoting state is a parity flag toggled on every quote character and
/// reset at the start of the string; specifier characters inside a quoted
/// run are not significant. Returns `None` when the pattern contains no
/// unquoted specifier, which is a valid degenerate case (the pattern is
/// then formatted unwrapped and the designator is never restyled).
///
/// # Example
///
/// ```rust
/// use clockspan::pattern::{locate_specifier, SpecifierPos};
///
/// assert_eq!(
///     locate_specifier("h:mm a", 'a'),
///     Some(SpecifierPos { start: 4, specifier: 5 })
/// );
/// assert_eq!(locate_specifier("HH:mm", 'a'), None);
/// assert_eq!(locate_specifier("'a la carte' HH:mm", 'a'), None);
/// ```
pub fn locate_specifier(pattern: &str, specifier: char) -> Option<SpecifierPos> {
    let mut quoted = false;
    let mut found = None;
    for (i, c) in pattern.char_indices() {
        if c == QUOTE {
            quoted = !quoted;
        }
        if !quoted && c == specifier {
            found = Some(i);
            break;
        }
    }
    let at = found?;

    // Pull the start back over whitespace so "3:05 PM" resizes " PM",
    // not just "PM".
    let mut start = at;
    while let Some(prev) = pattern[..start].chars().next_back() {
        if !prev.is_whitespace() {
            break;
        }
        start -= prev.len_utf8();
    }

    Some(SpecifierPos {
        start,
        specifier: at,
    })
}

/// Rewrites `pattern` with sentinels bracketing the located specifier.
///
/// Produces `pattern[..start]` + open sentinel + leading whitespace +
/// specifier + close sentinel + the rest. Idempotent for identical inputs;
/// callers cache the result keyed on the raw pattern string.
///
/// Stripping both sentinels and the specifier from the result reproduces
/// the original pattern character-for-character.
pub fn wrap_specifier(pattern: &str, pos: SpecifierPos, specifier: char) -> String {
    let mut out = String::with_capacity(
        pattern.len() + SENTINEL_OPEN.len_utf8() + SENTINEL_CLOSE.len_utf8(),
    );
    out.push_str(&pattern[..pos.start]);
    out.push(SENTINEL_OPEN);
    out.push_str(&pattern[pos.start..pos.specifier]);
    out.push(specifier);
    out.push(SENTINEL_CLOSE);
    out.push_str(&pattern[pos.specifier + specifier.len_utf8()..]);
    out
}
