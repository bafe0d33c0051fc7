//! Display configuration snapshots and the settings collaborator.
//!
//! All visibility and sizing decisions for one render pass come from a
//! single immutable [`DisplayConfig`] snapshot. The snapshot is rebuilt
//! wholesale whenever a setting change is observed, then passed by
//! reference through the pass — there is exactly one source of truth and
//! it never mutates mid-render.

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};

/// Relative size applied to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeMode {
    /// Same size as the surrounding text.
    Normal,
    /// Scaled down by [`crate::runs::SMALL_SIZE_FACTOR`].
    Small,
}

impl SizeMode {
    /// Maps a raw integer setting value (0 = normal, anything else = small,
    /// matching the stored-setting convention).
    pub fn from_setting(value: i64) -> Self {
        if value == 0 {
            SizeMode::Normal
        } else {
            SizeMode::Small
        }
    }
}

/// Length tier of the weekday label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekdayForm {
    Short,
    Medium,
    Long,
}

impl WeekdayForm {
    /// Maps a raw integer setting value; out-of-range values fall back to
    /// the medium form, the stored-setting default.
    pub fn from_setting(value: i64) -> Self {
        match value {
            0 => WeekdayForm::Short,
            2 => WeekdayForm::Long,
            _ => WeekdayForm::Medium,
        }
    }
}

/// Identifiers for the settings the clock observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ShowDesignator,
    DesignatorSize,
    ShowWeekday,
    WeekdaySize,
    WeekdayForm,
    ShowDayMonth,
    DayMonthSize,
    DisplayColor,
}

/// Read access to the host's settings store.
///
/// The clock treats every value as already validated by the store. The
/// color setting arrives in packed `AARRGGBB` hex form (see
/// [`Rgb::from_argb_hex`]).
pub trait Settings {
    fn flag(&self, key: SettingKey) -> bool;
    fn int(&self, key: SettingKey) -> i64;
    fn color_setting(&self) -> String;
}

/// Immutable per-refresh snapshot of everything that shapes the output.
///
/// `foreground` is the already-sampled text color: the packed color
/// setting is run through [`color::sample`] when the snapshot is built,
/// so the render pass only ever sees the final binary choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub show_designator: bool,
    pub designator_size: SizeMode,
    pub show_weekday: bool,
    pub weekday_size: SizeMode,
    pub weekday_form: WeekdayForm,
    pub show_daymonth: bool,
    pub daymonth_size: SizeMode,
    /// Whether the weekday/day-month prefixes participate at all. Set by
    /// the host at construction, not by a runtime setting.
    pub show_extended: bool,
    pub foreground: Rgb,
}

impl DisplayConfig {
    /// Builds a snapshot from the settings store.
    ///
    /// `show_extended` comes from the host container (some placements
    /// never show the date prefixes); when it is off the weekday and
    /// day-month settings are not even read.
    pub fn from_settings<S: Settings + ?Sized>(settings: &S, show_extended: bool) -> Self {
        let mut config = Self {
            show_designator: settings.flag(SettingKey::ShowDesignator),
            designator_size: SizeMode::from_setting(settings.int(SettingKey::DesignatorSize)),
            show_extended,
            foreground: Self::sample_foreground(settings),
            ..Self::default()
        };
        if show_extended {
            config.show_weekday = settings.flag(SettingKey::ShowWeekday);
            config.weekday_size = SizeMode::from_setting(settings.int(SettingKey::WeekdaySize));
            config.weekday_form = WeekdayForm::from_setting(settings.int(SettingKey::WeekdayForm));
            config.show_daymonth = settings.flag(SettingKey::ShowDayMonth);
            config.daymonth_size =
                SizeMode::from_setting(settings.int(SettingKey::DayMonthSize));
        }
        config
    }

    fn sample_foreground<S: Settings + ?Sized>(settings: &S) -> Rgb {
        let packed = settings.color_setting();
        let background = Rgb::from_argb_hex(&packed).unwrap_or(color::BLACK);
        color::sample(background).foreground()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_designator: false,
            designator_size: SizeMode::Small,
            show_weekday: false,
            weekday_size: SizeMode::Small,
            weekday_form: WeekdayForm::Medium,
            show_daymonth: false,
            daymonth_size: SizeMode::Small,
            show_extended: true,
            foreground: color::WHITE,
        }
    }
}
