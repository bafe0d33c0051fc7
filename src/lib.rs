//! Styled text-run rendering for configurable status-bar clocks.
//!
//! `clockspan` renders a time-of-day label whose AM/PM designator,
//! weekday prefix, and day+month prefix are independently sized and
//! toggled at runtime. The trick is that those segments must be found
//! again *inside the formatted output*: the locale pattern is rewritten
//! with private-use sentinel characters around the designator specifier,
//! formatted, and the surviving sentinels mark the designator's rendered
//! text. Prefix segments are located by label search. The result is an
//! ordered list of [`StyledRun`]s — plain slices, small-size slices, and
//! a whole-string foreground color — ready for a host label.
//!
//! # Example
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use clockspan::{runs, ClockRenderer, DisplayConfig, SizeMode};
//!
//! let mut renderer = ClockRenderer::new(true);
//! renderer.set_config(DisplayConfig {
//!     show_designator: true,
//!     designator_size: SizeMode::Small,
//!     ..DisplayConfig::default()
//! });
//!
//! let at = FixedOffset::east_opt(0)
//!     .unwrap()
//!     .with_ymd_and_hms(2013, 7, 7, 15, 5, 0)
//!     .unwrap();
//! let runs = renderer.render_at(&at).unwrap();
//!
//! assert_eq!(runs::visible_text(&runs), "3:05 PM");
//! assert_eq!(runs[1].text, " PM");
//! assert_eq!(runs[1].size, Some(0.7));
//! ```
//!
//! The pieces compose independently: [`pattern`] locates and wraps the
//! specifier, [`format`] renders patterns against an instant, [`segment`]
//! finds segments in the output, and [`runs`] turns segments plus a
//! [`DisplayConfig`] into the final run list. [`ClockRenderer`] wires
//! them into one cached render pass driven by [`ClockSignal`]s.

pub mod clock;
pub mod color;
pub mod config;
pub mod format;
pub mod names;
pub mod pattern;
pub mod runs;
pub mod segment;
pub mod sink;

pub use clock::{set_time_source, ClockRenderer, ClockSignal};
pub use color::{ColorMode, Rgb};
pub use config::{DisplayConfig, SettingKey, Settings, SizeMode, WeekdayForm};
pub use format::{ChronoFormatter, PatternError, TimeFormatter};
pub use names::{EnglishNames, NameTable};
pub use runs::{StyledRun, SMALL_SIZE_FACTOR};
pub use segment::Span;
pub use sink::{DisplaySink, TermSink};
