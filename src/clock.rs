//! The render pass.
//!
//! [`ClockRenderer`] owns everything a refresh needs: the locale pattern
//! and its compiled (possibly sentinel-wrapped) template, the current
//! time zone, and the [`DisplayConfig`] snapshot. External events arrive
//! as typed [`ClockSignal`]s through [`ClockRenderer::handle`], the single
//! entry point; every signal runs one complete pass and pushes the result
//! to the sink.
//!
//! The whole model is single-threaded and cooperative: a pass runs to
//! completion before the next signal is processed, and a superseded
//! pass's output is simply overwritten by the next one.

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::config::{DisplayConfig, SettingKey, Settings, SizeMode};
use crate::format::{
    ChronoFormatter, PatternError, TimeFormatter, DESIGNATOR_SPECIFIER, TWELVE_HOUR_PATTERN,
};
use crate::names::{prefix_label, EnglishNames, NameTable};
use crate::pattern::{locate_specifier, wrap_specifier};
use crate::runs::{build_runs, StyledRun};
use crate::segment::{bracket_span, sentinel_span};
use crate::sink::DisplaySink;

/// A discrete "refresh now" event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockSignal {
    /// The minute rolled over.
    MinuteTick,
    /// The wall clock was adjusted.
    TimeChanged,
    /// The device moved to a new zone.
    TimezoneChanged(FixedOffset),
    /// The locale convention changed, carrying the pattern now in effect.
    LocaleChanged { pattern: String },
    /// A watched setting changed.
    SettingChanged(SettingKey),
}

type TimeSource = fn() -> DateTime<Utc>;

static TIME_SOURCE: Lazy<Mutex<TimeSource>> = Lazy::new(|| Mutex::new(Utc::now));

/// Overrides the wall-clock source used by [`ClockRenderer::refresh`].
///
/// Useful for tests or hosts that drive rendering from a simulated clock.
pub fn set_time_source(source: TimeSource) {
    let mut guard = TIME_SOURCE.lock().unwrap();
    *guard = source;
}

fn current_time() -> DateTime<Utc> {
    let source = TIME_SOURCE.lock().unwrap();
    (*source)()
}

/// Renders the configurable clock label.
///
/// # Example
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use clockspan::{runs, ClockRenderer, DisplayConfig, SizeMode};
///
/// let mut renderer = ClockRenderer::new(true);
/// renderer.set_config(DisplayConfig {
///     show_designator: true,
///     designator_size: SizeMode::Small,
///     ..DisplayConfig::default()
/// });
///
/// let at = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2013, 7, 7, 15, 5, 0)
///     .unwrap();
/// let runs = renderer.render_at(&at).unwrap();
/// assert_eq!(runs::visible_text(&runs), "3:05 PM");
/// ```
pub struct ClockRenderer<F = ChronoFormatter, N = EnglishNames> {
    formatter: F,
    names: N,
    config: DisplayConfig,
    zone: FixedOffset,
    pattern: String,
    /// Raw pattern the compiled template was built from; `None` forces a
    /// rebuild on the next pass.
    cache_key: Option<String>,
    compiled: String,
}

impl ClockRenderer {
    /// Creates a renderer with the default formatter and name table.
    ///
    /// `show_extended` controls whether the weekday/day-month prefixes
    /// participate at all; some placements of the label never show them.
    pub fn new(show_extended: bool) -> Self {
        Self::with_parts(ChronoFormatter, EnglishNames, show_extended)
    }
}

impl<F: TimeFormatter, N: NameTable> ClockRenderer<F, N> {
    /// Creates a renderer with an explicit formatter and name table.
    pub fn with_parts(formatter: F, names: N, show_extended: bool) -> Self {
        Self {
            formatter,
            names,
            config: DisplayConfig {
                show_extended,
                ..DisplayConfig::default()
            },
            zone: FixedOffset::east_opt(0).expect("zero offset is valid"),
            pattern: TWELVE_HOUR_PATTERN.to_string(),
            cache_key: None,
            compiled: String::new(),
        }
    }

    /// The configuration snapshot currently in effect.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Installs a new configuration snapshot wholesale.
    ///
    /// The compiled template depends on the designator flags, so changes
    /// to either invalidate the template cache.
    pub fn set_config(&mut self, config: DisplayConfig) {
        if config.show_designator != self.config.show_designator
            || config.designator_size != self.config.designator_size
        {
            self.cache_key = None;
        }
        self.config = config;
    }

    /// Rebuilds the snapshot from the settings store, preserving the
    /// host-assigned extended-segments flag.
    pub fn reload_settings<S: Settings + ?Sized>(&mut self, settings: &S) {
        let show_extended = self.config.show_extended;
        self.set_config(DisplayConfig::from_settings(settings, show_extended));
    }

    /// Replaces the locale pattern in effect.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Replaces the time zone used for subsequent refreshes.
    pub fn set_zone(&mut self, zone: FixedOffset) {
        self.zone = zone;
    }

    /// Processes one signal: applies its state change, then runs a full
    /// render pass against the current wall clock and pushes the result
    /// into `sink`.
    ///
    /// On a pattern compilation error the sink receives an empty
    /// plain-text fallback and the error is returned.
    pub fn handle<S, D>(
        &mut self,
        signal: ClockSignal,
        settings: &S,
        sink: &mut D,
    ) -> Result<(), PatternError>
    where
        S: Settings + ?Sized,
        D: DisplaySink + ?Sized,
    {
        match signal {
            ClockSignal::MinuteTick | ClockSignal::TimeChanged => {}
            ClockSignal::TimezoneChanged(zone) => self.set_zone(zone),
            ClockSignal::LocaleChanged { pattern } => self.set_pattern(pattern),
            ClockSignal::SettingChanged(_) => self.reload_settings(settings),
        }
        self.refresh(sink)
    }

    /// Runs a render pass against the current wall clock.
    pub fn refresh<D: DisplaySink + ?Sized>(&mut self, sink: &mut D) -> Result<(), PatternError> {
        let at = current_time().with_timezone(&self.zone);
        match self.render_at(&at) {
            Ok(runs) => {
                sink.set_runs(&runs);
                Ok(())
            }
            Err(err) => {
                sink.set_text("");
                Err(err)
            }
        }
    }

    /// Runs a render pass against an explicit instant.
    pub fn render_at(&mut self, at: &DateTime<FixedOffset>) -> Result<Vec<StyledRun>, PatternError> {
        self.ensure_compiled();
        let mut rendered = self.formatter.format(&self.compiled, at)?;

        // Prefixes go on before any span is located, so every offset is
        // taken from the final concatenated string.
        let mut weekday_label = None;
        let mut month_label = None;
        if self.config.show_extended {
            if self.config.show_daymonth {
                if let Some(name) = self.names.month(at.month0() as u8) {
                    let label = prefix_label(name);
                    rendered = format!("{} {label}{rendered}", at.day());
                    month_label = Some(label);
                }
            }
            if self.config.show_weekday {
                let index = at.weekday().number_from_sunday() as u8;
                if let Some(name) = self.names.weekday(index, self.config.weekday_form) {
                    let label = prefix_label(name);
                    rendered = format!("{label}{rendered}");
                    weekday_label = Some(label);
                }
            }
        }

        let designator = sentinel_span(&rendered);
        let weekday = weekday_label
            .as_deref()
            .and_then(|label| bracket_span(&rendered, label));
        let daymonth = month_label
            .as_deref()
            .and_then(|label| bracket_span(&rendered, label));

        Ok(build_runs(&rendered, designator, weekday, daymonth, &self.config))
    }

    /// Recompiles the template when the raw pattern changed since the
    /// last pass.
    ///
    /// Wrapping is skipped entirely when the designator is shown at
    /// normal size; the raw pattern is then used as-is.
    fn ensure_compiled(&mut self) {
        if self.cache_key.as_deref() == Some(self.pattern.as_str()) {
            return;
        }
        let wrap = !self.config.show_designator
            || self.config.designator_size != SizeMode::Normal;
        self.compiled = match wrap
            .then(|| locate_specifier(&self.pattern, DESIGNATOR_SPECIFIER))
            .flatten()
        {
            Some(pos) => wrap_specifier(&self.pattern, pos, DESIGNATOR_SPECIFIER),
            None => self.pattern.clone(),
        };
        self.cache_key = Some(self.pattern.clone());
    }
}
