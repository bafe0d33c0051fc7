//! Time formatting.
//!
//! The clock consumes formatting as a capability: anything implementing
//! [`TimeFormatter`] that renders literal text — sentinel characters
//! included — byte-for-byte unchanged will do. [`ChronoFormatter`] is the
//! default implementation, interpreting the date-format pattern subset
//! the stock clock patterns use on top of chrono.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use thiserror::Error;

/// The pattern character marking the AM/PM designator.
pub const DESIGNATOR_SPECIFIER: char = 'a';

/// Stock pattern for locales using the 12-hour convention.
pub const TWELVE_HOUR_PATTERN: &str = "h:mm a";

/// Stock pattern for locales using the 24-hour convention.
pub const TWENTY_FOUR_HOUR_PATTERN: &str = "HH:mm";

/// Error compiling a time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An unquoted reserved letter outside the supported subset.
    #[error("unsupported pattern letter '{letter}' at byte {index}")]
    UnsupportedLetter { letter: char, index: usize },
    /// A quoted literal with no closing quote.
    #[error("unterminated quoted literal starting at byte {index}")]
    UnterminatedQuote { index: usize },
}

/// Renders a time pattern against a point in time.
///
/// Implementations must pass every non-field character through unchanged;
/// the render pass relies on sentinel characters surviving formatting
/// exactly where the pattern put them.
pub trait TimeFormatter {
    fn format(&self, pattern: &str, at: &DateTime<FixedOffset>) -> Result<String, PatternError>;
}

/// Chrono-backed formatter for the clock-pattern subset.
///
/// Supported fields: `a` (AM/PM), `h`/`H` (12/24-hour), `m`, `s`, `d`,
/// `M` (numeric, or `MMM`/`MMMM` names), `E` (weekday name), `y`.
/// Repeating a numeric letter zero-pads to the repeat count. Literals are
/// quoted with `'`, and `''` is a literal apostrophe. Non-letter
/// characters pass through untouched.
///
/// # Example
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use clockspan::format::{ChronoFormatter, TimeFormatter};
///
/// let at = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2013, 7, 7, 15, 5, 0)
///     .unwrap();
/// let formatter = ChronoFormatter;
/// assert_eq!(formatter.format("h:mm a", &at).unwrap(), "3:05 PM");
/// assert_eq!(formatter.format("HH:mm", &at).unwrap(), "15:05");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter;

impl TimeFormatter for ChronoFormatter {
    fn format(&self, pattern: &str, at: &DateTime<FixedOffset>) -> Result<String, PatternError> {
        let mut out = String::with_capacity(pattern.len());
        let mut chars = pattern.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if c == '\'' {
                if matches!(chars.peek(), Some(&(_, '\''))) {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some((_, lit)) = chars.next() {
                    if lit == '\'' {
                        if matches!(chars.peek(), Some(&(_, '\''))) {
                            chars.next();
                            out.push('\'');
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        out.push(lit);
                    }
                }
                if !closed {
                    return Err(PatternError::UnterminatedQuote { index: i });
                }
            } else if c.is_ascii_alphabetic() {
                let mut count = 1;
                while matches!(chars.peek(), Some(&(_, next)) if next == c) {
                    chars.next();
                    count += 1;
                }
                emit_field(&mut out, c, count, i, at)?;
            } else {
                out.push(c);
            }
        }
        Ok(out)
    }
}

fn emit_field(
    out: &mut String,
    letter: char,
    count: usize,
    index: usize,
    at: &DateTime<FixedOffset>,
) -> Result<(), PatternError> {
    match letter {
        'a' => out.push_str(if at.hour12().0 { "PM" } else { "AM" }),
        'h' => push_padded(out, at.hour12().1, count),
        'H' => push_padded(out, at.hour(), count),
        'm' => push_padded(out, at.minute(), count),
        's' => push_padded(out, at.second(), count),
        'd' => push_padded(out, at.day(), count),
        'y' => {
            if count == 2 {
                let _ = write!(out, "{:02}", at.year().rem_euclid(100));
            } else {
                let _ = write!(out, "{:04}", at.year());
            }
        }
        'M' => match count {
            1 | 2 => push_padded(out, at.month(), count),
            3 => out.push_str(&at.format("%b").to_string()),
            _ => out.push_str(&at.format("%B").to_string()),
        },
        'E' => {
            if count <= 3 {
                out.push_str(&at.format("%a").to_string());
            } else {
                out.push_str(&at.format("%A").to_string());
            }
        }
        _ => return Err(PatternError::UnsupportedLetter { letter, index }),
    }
    Ok(())
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    let _ = write!(out, "{value:0width$}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2013, 7, 7, h, m, 9)
            .unwrap()
    }

    #[test]
    fn test_twelve_hour_pattern() {
        let formatted = ChronoFormatter.format(TWELVE_HOUR_PATTERN, &at(15, 5)).unwrap();
        assert_eq!(formatted, "3:05 PM");
    }

    #[test]
    fn test_twelve_hour_morning() {
        let formatted = ChronoFormatter.format(TWELVE_HOUR_PATTERN, &at(9, 30)).unwrap();
        assert_eq!(formatted, "9:30 AM");
    }

    #[test]
    fn test_twenty_four_hour_pattern() {
        let formatted = ChronoFormatter
            .format(TWENTY_FOUR_HOUR_PATTERN, &at(15, 5))
            .unwrap();
        assert_eq!(formatted, "15:05");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(
            ChronoFormatter.format("h a", &at(0, 0)).unwrap(),
            "12 AM"
        );
        assert_eq!(
            ChronoFormatter.format("h a", &at(12, 0)).unwrap(),
            "12 PM"
        );
    }

    #[test]
    fn test_padding_follows_repeat_count() {
        assert_eq!(ChronoFormatter.format("H:m:s", &at(7, 5)).unwrap(), "7:5:9");
        assert_eq!(
            ChronoFormatter.format("HH:mm:ss", &at(7, 5)).unwrap(),
            "07:05:09"
        );
    }

    #[test]
    fn test_date_fields() {
        // 2013-07-07 was a Sunday.
        assert_eq!(
            ChronoFormatter.format("EEE d MMM yyyy", &at(12, 0)).unwrap(),
            "Sun 7 Jul 2013"
        );
        assert_eq!(
            ChronoFormatter.format("EEEE", &at(12, 0)).unwrap(),
            "Sunday"
        );
        assert_eq!(ChronoFormatter.format("MMMM", &at(12, 0)).unwrap(), "July");
        assert_eq!(ChronoFormatter.format("yy", &at(12, 0)).unwrap(), "13");
    }

    #[test]
    fn test_quoted_literal_passthrough() {
        assert_eq!(
            ChronoFormatter.format("'at' H:mm", &at(15, 5)).unwrap(),
            "at 15:05"
        );
    }

    #[test]
    fn test_escaped_apostrophe() {
        assert_eq!(
            ChronoFormatter.format("H 'o''clock'", &at(15, 5)).unwrap(),
            "15 o'clock"
        );
        assert_eq!(ChronoFormatter.format("H''", &at(15, 5)).unwrap(), "15'");
    }

    #[test]
    fn test_sentinels_pass_through_unchanged() {
        use crate::pattern::{SENTINEL_CLOSE, SENTINEL_OPEN};
        let pattern = format!("h:mm{} a{}", SENTINEL_OPEN, SENTINEL_CLOSE);
        let formatted = ChronoFormatter.format(&pattern, &at(15, 5)).unwrap();
        assert_eq!(
            formatted,
            format!("3:05{} PM{}", SENTINEL_OPEN, SENTINEL_CLOSE)
        );
    }

    #[test]
    fn test_unsupported_letter_errors() {
        assert_eq!(
            ChronoFormatter.format("HH:mm z", &at(15, 5)),
            Err(PatternError::UnsupportedLetter {
                letter: 'z',
                index: 6
            })
        );
    }

    #[test]
    fn test_unterminated_quote_errors() {
        assert_eq!(
            ChronoFormatter.format("HH:mm 'oops", &at(15, 5)),
            Err(PatternError::UnterminatedQuote { index: 6 })
        );
    }
}
