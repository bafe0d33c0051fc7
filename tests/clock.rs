//! End-to-end render-pass scenarios: signals in, styled runs out.

use chrono::{FixedOffset, TimeZone, Utc};
use clockspan::format::TWENTY_FOUR_HOUR_PATTERN;
use clockspan::runs::visible_text;
use clockspan::{
    ClockRenderer, ClockSignal, DisplayConfig, DisplaySink, Rgb, SettingKey, Settings, SizeMode,
    StyledRun, WeekdayForm, SMALL_SIZE_FACTOR,
};

#[derive(Default)]
struct FakeSettings {
    show_designator: bool,
    designator_size: i64,
    show_weekday: bool,
    weekday_size: i64,
    weekday_form: i64,
    show_daymonth: bool,
    daymonth_size: i64,
    color: String,
}

impl FakeSettings {
    fn new() -> Self {
        Self {
            designator_size: 1,
            weekday_size: 1,
            weekday_form: 1,
            daymonth_size: 1,
            color: "ff000000".to_string(),
            ..Self::default()
        }
    }
}

impl Settings for FakeSettings {
    fn flag(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::ShowDesignator => self.show_designator,
            SettingKey::ShowWeekday => self.show_weekday,
            SettingKey::ShowDayMonth => self.show_daymonth,
            _ => false,
        }
    }

    fn int(&self, key: SettingKey) -> i64 {
        match key {
            SettingKey::DesignatorSize => self.designator_size,
            SettingKey::WeekdaySize => self.weekday_size,
            SettingKey::WeekdayForm => self.weekday_form,
            SettingKey::DayMonthSize => self.daymonth_size,
            _ => 0,
        }
    }

    fn color_setting(&self) -> String {
        self.color.clone()
    }
}

/// Records whatever the renderer pushes at it.
#[derive(Default)]
struct CaptureSink {
    runs: Vec<StyledRun>,
    fallback: Option<String>,
}

impl DisplaySink for CaptureSink {
    fn set_runs(&mut self, runs: &[StyledRun]) {
        self.runs = runs.to_vec();
        self.fallback = None;
    }

    fn set_text(&mut self, text: &str) {
        self.runs.clear();
        self.fallback = Some(text.to_string());
    }
}

// 2013-07-07 15:05 UTC was a Sunday afternoon.
fn sunday_afternoon() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2013, 7, 7, 15, 5, 0)
        .unwrap()
}

#[test]
fn hidden_designator_leaves_bare_time() {
    let mut renderer = ClockRenderer::new(true);
    renderer.set_config(DisplayConfig::default());

    let runs = renderer.render_at(&sunday_afternoon()).unwrap();
    assert_eq!(visible_text(&runs), "3:05");
}

#[test]
fn small_designator_keeps_space_and_letters() {
    let mut renderer = ClockRenderer::new(true);
    renderer.set_config(DisplayConfig {
        show_designator: true,
        designator_size: SizeMode::Small,
        foreground: Rgb::new(255, 255, 255),
        ..DisplayConfig::default()
    });

    let runs = renderer.render_at(&sunday_afternoon()).unwrap();
    assert_eq!(visible_text(&runs), "3:05 PM");

    // A 0.7x run covering the space plus the two letters, with the
    // full-string color layered over every run.
    assert_eq!(runs[1].text, " PM");
    assert_eq!(runs[1].size, Some(SMALL_SIZE_FACTOR));
    assert!(runs.iter().all(|r| r.color == Some(Rgb::new(255, 255, 255))));
}

#[test]
fn weekday_prefix_is_uppercased_short_label() {
    let mut renderer = ClockRenderer::new(true);
    renderer.set_config(DisplayConfig {
        show_weekday: true,
        weekday_size: SizeMode::Small,
        weekday_form: WeekdayForm::Short,
        ..DisplayConfig::default()
    });

    let runs = renderer.render_at(&sunday_afternoon()).unwrap();
    assert_eq!(visible_text(&runs), "SU 3:05");
    assert_eq!(runs[0].text, "SU ");
    assert_eq!(runs[0].size, Some(SMALL_SIZE_FACTOR));
}

#[test]
fn signals_drive_the_full_pipeline() {
    let settings = FakeSettings::new();
    let mut renderer = ClockRenderer::new(true);
    let mut sink = CaptureSink::default();

    // Freeze the wall clock for the refresh path.
    clockspan::set_time_source(|| {
        Utc.with_ymd_and_hms(2013, 7, 7, 15, 5, 0).unwrap()
    });

    renderer
        .handle(ClockSignal::MinuteTick, &settings, &mut sink)
        .unwrap();
    assert_eq!(visible_text(&sink.runs), "3:05");

    // Moving one zone east shifts the displayed hour.
    renderer
        .handle(
            ClockSignal::TimezoneChanged(FixedOffset::east_opt(3600).unwrap()),
            &settings,
            &mut sink,
        )
        .unwrap();
    assert_eq!(visible_text(&sink.runs), "4:05");

    // Switching to the 24-hour locale convention drops the designator
    // machinery entirely.
    renderer
        .handle(
            ClockSignal::LocaleChanged {
                pattern: TWENTY_FOUR_HOUR_PATTERN.to_string(),
            },
            &settings,
            &mut sink,
        )
        .unwrap();
    assert_eq!(visible_text(&sink.runs), "16:05");
}

#[test]
fn setting_change_rebuilds_snapshot_and_cache() {
    let mut settings = FakeSettings::new();
    let mut renderer = ClockRenderer::new(true);
    let mut sink = CaptureSink::default();
    let at = sunday_afternoon();

    renderer.reload_settings(&settings);
    assert_eq!(visible_text(&renderer.render_at(&at).unwrap()), "3:05");

    settings.show_designator = true;
    settings.designator_size = 0;
    renderer
        .handle(
            ClockSignal::SettingChanged(SettingKey::ShowDesignator),
            &settings,
            &mut sink,
        )
        .unwrap();
    assert_eq!(visible_text(&renderer.render_at(&at).unwrap()), "3:05 PM");
}

#[test]
fn foreground_follows_color_setting() {
    let mut settings = FakeSettings::new();
    settings.color = "ffffffff".to_string(); // white background
    let mut renderer = ClockRenderer::new(true);
    renderer.reload_settings(&settings);

    let runs = renderer.render_at(&sunday_afternoon()).unwrap();
    assert!(runs.iter().all(|r| r.color == Some(Rgb::new(0, 0, 0))));
}

#[test]
fn pattern_error_falls_back_to_plain_text() {
    let settings = FakeSettings::new();
    let mut renderer = ClockRenderer::new(true);
    let mut sink = CaptureSink::default();

    renderer
        .handle(
            ClockSignal::LocaleChanged {
                pattern: "HH:mm z".to_string(),
            },
            &settings,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(sink.fallback.as_deref(), Some(""));
    assert!(sink.runs.is_empty());
}
