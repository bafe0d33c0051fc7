//! Display sinks.
//!
//! The host label is abstracted behind [`DisplaySink`]: it receives the
//! final run list (or a plain-text fallback) and owns presentation.
//! [`TermSink`] is a console-backed implementation that paints runs into
//! an ANSI string, mostly useful for demos and snapshot-style tests.

use console::{Color, Style};

use crate::color::rgb_to_ansi256;
use crate::runs::StyledRun;

/// Receiver of rendered clock output.
pub trait DisplaySink {
    /// Replaces the displayed content with a styled run list.
    fn set_runs(&mut self, runs: &[StyledRun]);

    /// Replaces the displayed content with unstyled text. Used as the
    /// fallback when a render pass cannot produce runs.
    fn set_text(&mut self, text: &str);
}

/// Paints runs into an ANSI-styled string via `console`.
///
/// Terminals have no relative text sizing, so small-size runs are drawn
/// dim instead; the color override maps onto the nearest 256-color
/// palette entry.
#[derive(Debug, Default)]
pub struct TermSink {
    painted: String,
}

impl TermSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently painted string.
    pub fn text(&self) -> &str {
        &self.painted
    }
}

impl DisplaySink for TermSink {
    fn set_runs(&mut self, runs: &[StyledRun]) {
        self.painted.clear();
        for run in runs {
            let mut style = Style::new().force_styling(true);
            if let Some(color) = run.color {
                style = style.fg(Color::Color256(rgb_to_ansi256(color)));
            }
            if run.size.is_some() {
                style = style.dim();
            }
            self.painted
                .push_str(&style.apply_to(&run.text).to_string());
        }
    }

    fn set_text(&mut self, text: &str) {
        self.painted.clear();
        self.painted.push_str(text);
    }
}
