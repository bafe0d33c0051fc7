//! Weekday and month label lookup.
//!
//! The clock treats label lookup as an opaque function keyed by small
//! integers: weekdays 1–7 (1 = Sunday) in three length tiers, months
//! 0–11 in one. A built-in English table is provided; hosts with real
//! localization implement [`NameTable`] over their own resources.
//!
//! Indices outside the domain are an upstream contract violation: they
//! assert in debug builds and yield `None` in release, which the render
//! pass treats as "prefix unavailable" and skips.

use crate::config::WeekdayForm;

/// Localized label source for the weekday and day-month prefixes.
pub trait NameTable {
    /// Label for `weekday` in 1–7 (1 = Sunday), in the requested form.
    fn weekday(&self, weekday: u8, form: WeekdayForm) -> Option<&str>;

    /// Label for `month` in 0–11 (0 = January).
    fn month(&self, month: u8) -> Option<&str>;
}

/// Built-in English labels using the CLDR short/abbreviated/wide forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

const WEEKDAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const WEEKDAYS_MEDIUM: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl NameTable for EnglishNames {
    fn weekday(&self, weekday: u8, form: WeekdayForm) -> Option<&str> {
        debug_assert!(
            (1..=7).contains(&weekday),
            "weekday index out of domain: {weekday}"
        );
        let table = match form {
            WeekdayForm::Short => &WEEKDAYS_SHORT,
            WeekdayForm::Medium => &WEEKDAYS_MEDIUM,
            WeekdayForm::Long => &WEEKDAYS_LONG,
        };
        table.get(usize::from(weekday).checked_sub(1)?).copied()
    }

    fn month(&self, month: u8) -> Option<&str> {
        debug_assert!(month < 12, "month index out of domain: {month}");
        MONTHS.get(usize::from(month)).copied()
    }
}

/// Upper-cases a label and appends the trailing space used when the label
/// is prefixed onto the time text.
pub(crate) fn prefix_label(label: &str) -> String {
    let mut out = label.to_uppercase();
    out.push(' ');
    out
}
