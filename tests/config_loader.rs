use pomodo::config::{ConfigError, SessionState, Settings};
use pomodo::timer::TimerState;
use tempfile::TempDir;

/// A missing settings file yields the defaults, not an error.
#[test]
fn missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");

    let settings = Settings::load_from(&path).expect("load should succeed");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.durations.work_minutes, 25);
    assert_eq!(settings.durations.rest_minutes, 5);
}

/// Saving creates the parent directory and loading reads back an equal
/// value.
#[test]
fn save_then_load_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("pomodo").join("settings.toml");

    let mut settings = Settings::default();
    settings.durations.work_minutes = 30;
    settings.durations.rest_minutes = 10;
    settings.session = SessionState {
        paused: true,
        resting: true,
        minute: 3,
        second: 41,
        cycle: 2,
    };

    settings.save_to(&path).expect("save should succeed");
    let loaded = Settings::load_from(&path).expect("load should succeed");

    assert_eq!(loaded, settings);
}

/// Persisting a running timer and restoring it yields an identical
/// snapshot.
#[test]
fn timer_round_trips_through_persistence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");

    let mut timer = TimerState::new(25, 5);
    for _ in 0..754 {
        timer.advance();
    }
    timer.toggle_pause();
    let expected = timer.snapshot();

    let mut settings = Settings::default();
    settings.session = timer.to_session();
    settings.save_to(&path).expect("save should succeed");

    let loaded = Settings::load_from(&path).expect("load should succeed");
    let restored = TimerState::restore(
        &loaded.session,
        loaded.durations.work_minutes,
        loaded.durations.rest_minutes,
    );

    assert_eq!(restored.snapshot(), expected);
    assert_eq!(restored.cycle(), timer.cycle());
}

/// Unparseable TOML surfaces a ParseError with the offending path.
#[test]
fn malformed_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "this is not toml = [").expect("write should succeed");

    let result = Settings::load_from(&path);

    match result {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn validation_rejects_zero_durations() {
    let mut settings = Settings::default();
    settings.durations.work_minutes = 0;

    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn validation_rejects_out_of_range_seconds() {
    let mut settings = Settings::default();
    settings.session.second = 60;

    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn validation_rejects_minutes_past_the_phase_boundary() {
    let mut settings = Settings::default();
    settings.session.resting = true;
    settings.session.minute = 5; // rest runs to 5, so elapsed 5 is past it

    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// During the long rest the elapsed minute may run past the configured
/// rest duration, up to the fixed long-rest boundary.
#[test]
fn validation_allows_long_rest_progress() {
    let mut settings = Settings::default();
    settings.session.resting = true;
    settings.session.cycle = 4;
    settings.session.minute = 12;

    assert!(settings.validate().is_ok());
}

#[test]
fn validation_rejects_impossible_cycle_counts() {
    let mut settings = Settings::default();
    settings.session.cycle = 5;

    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn settings_path_ends_with_expected() {
    let path = Settings::settings_path();
    assert!(path.ends_with("pomodo/settings.toml"));
}
