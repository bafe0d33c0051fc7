//! Styled run construction — the core of the render pass.
//!
//! [`RunBuilder`] turns a rendered string plus a set of segment spans into
//! an ordered list of [`StyledRun`]s. Deletions and size spans are all
//! computed against the immutable input string first, then the output is
//! assembled by copying only the retained slices — no in-place mutation,
//! so no index-invalidation arithmetic.
//!
//! [`build_runs`] layers the segment policy on top: hide beats resize in
//! every branch, absent spans are skipped silently, and the foreground
//! color is attached last so it always covers the entire surviving text.

use std::collections::BTreeSet;

use crate::color::Rgb;
use crate::config::{DisplayConfig, SizeMode};
use crate::segment::{SentinelSpan, Span};

/// Scale factor for segments displayed at the small size.
pub const SMALL_SIZE_FACTOR: f32 = 0.7;

/// One styled slice of the final display string.
///
/// Runs are contiguous: concatenating `text` over a run list yields the
/// full visible string with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    /// Relative size multiplier, `None` for surrounding-text size.
    pub size: Option<f32>,
    /// Foreground color override, `None` when no color is applied.
    pub color: Option<Rgb>,
}

/// Collects edits against an immutable rendered string and assembles the
/// run list.
///
/// # Example
///
/// ```rust
/// use clockspan::runs::{RunBuilder, SMALL_SIZE_FACTOR};
/// use clockspan::segment::Span;
///
/// let runs = RunBuilder::new("3:05 PM")
///     .resize(Span::new(4, 7), SMALL_SIZE_FACTOR)
///     .build(None);
///
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].text, "3:05");
/// assert_eq!(runs[1].text, " PM");
/// assert_eq!(runs[1].size, Some(SMALL_SIZE_FACTOR));
/// ```
#[derive(Debug)]
pub struct RunBuilder<'a> {
    rendered: &'a str,
    deletions: Vec<Span>,
    size_spans: Vec<(Span, f32)>,
}

impl<'a> RunBuilder<'a> {
    pub fn new(rendered: &'a str) -> Self {
        Self {
            rendered,
            deletions: Vec::new(),
            size_spans: Vec::new(),
        }
    }

    /// Marks a span for deletion from the output.
    pub fn delete(mut self, span: Span) -> Self {
        if !span.is_empty() {
            self.deletions.push(span);
        }
        self
    }

    /// Attaches a relative-size multiplier over a span.
    ///
    /// A span that also falls inside a deletion produces nothing; deleted
    /// text never reaches the output regardless of styling.
    pub fn resize(mut self, span: Span, factor: f32) -> Self {
        if !span.is_empty() {
            self.size_spans.push((span, factor));
        }
        self
    }

    /// Assembles the ordered run list, attaching `color` to the entire
    /// surviving text as the final step.
    pub fn build(self, color: Option<Rgb>) -> Vec<StyledRun> {
        // Every span boundary is a potential style transition; walk the
        // sorted unique boundaries and emit each retained interval.
        let mut cuts = BTreeSet::new();
        cuts.insert(0);
        cuts.insert(self.rendered.len());
        for span in &self.deletions {
            cuts.insert(span.start);
            cuts.insert(span.end);
        }
        for (span, _) in &self.size_spans {
            cuts.insert(span.start);
            cuts.insert(span.end);
        }

        let bounds: Vec<usize> = cuts.into_iter().collect();
        let mut runs: Vec<StyledRun> = Vec::new();
        for pair in bounds.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if start >= end || end > self.rendered.len() {
                continue;
            }
            if self
                .deletions
                .iter()
                .any(|d| d.start <= start && end <= d.end)
            {
                continue;
            }
            let size = self
                .size_spans
                .iter()
                .find(|(s, _)| s.start <= start && end <= s.end)
                .map(|&(_, factor)| factor);

            match runs.last_mut() {
                // Adjacent intervals with identical styling collapse into
                // one run.
                Some(last) if last.size == size => {
                    last.text.push_str(&self.rendered[start..end]);
                }
                _ => runs.push(StyledRun {
                    text: self.rendered[start..end].to_string(),
                    size,
                    color: None,
                }),
            }
        }

        // Color goes on last, spanning everything that survived, so no
        // earlier deletion can clip it.
        if let Some(color) = color {
            for run in &mut runs {
                run.color = Some(color);
            }
        }
        runs
    }
}

/// Applies the segment policy and builds the final run list.
///
/// `rendered` is the fully prefixed string (weekday and day-month labels
/// already prepended); the spans are all byte ranges within it. Each span
/// is optional and skipped when absent.
///
/// Policy, per segment:
/// - designator: hidden deletes the whole sentinel span including the
///   markers; otherwise a small size mode shrinks the text between the
///   markers, and the two marker characters are always deleted.
/// - weekday and day-month: only touched when their size mode is
///   non-default; hidden deletes the span, small shrinks it.
///
/// Hide takes precedence over resize in every branch.
pub fn build_runs(
    rendered: &str,
    designator: Option<SentinelSpan>,
    weekday: Option<Span>,
    daymonth: Option<Span>,
    config: &DisplayConfig,
) -> Vec<StyledRun> {
    let mut builder = RunBuilder::new(rendered);

    if let Some(span) = designator {
        if !config.show_designator {
            builder = builder.delete(span.outer());
        } else {
            if config.designator_size == SizeMode::Small {
                builder = builder.resize(span.inner(), SMALL_SIZE_FACTOR);
            }
            builder = builder
                .delete(Span::new(span.open, span.inner().start))
                .delete(Span::new(span.close, span.outer().end));
        }
    }

    if config.show_extended {
        if config.weekday_size != SizeMode::Normal {
            if let Some(span) = weekday {
                if !config.show_weekday {
                    builder = builder.delete(span);
                } else if config.weekday_size == SizeMode::Small {
                    builder = builder.resize(span, SMALL_SIZE_FACTOR);
                }
            }
        }

        if config.daymonth_size != SizeMode::Normal {
            if let Some(span) = daymonth {
                if !config.show_daymonth {
                    builder = builder.delete(span);
                } else if config.daymonth_size == SizeMode::Small {
                    builder = builder.resize(span, SMALL_SIZE_FACTOR);
                }
            }
        }
    }

    builder.build(Some(config.foreground))
}

/// Concatenates the visible text of a run list.
pub fn visible_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
