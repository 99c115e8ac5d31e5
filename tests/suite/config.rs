//! Config file to engine options.

use std::fs;
use std::time::{Duration, Instant};

use safeguard_config::{ConfigError, SafeguardConfig};
use safeguard_engine::{Amount, App, AppOptions, ReportDetails, TrackingStatus};
use tempfile::tempdir;

use crate::common::submit_case;

#[test]
fn configured_interval_drives_progression() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[tracking]\nstep_interval_secs = 2\n").expect("write config");

    let config = SafeguardConfig::load_from(&path).expect("valid config");
    let options = AppOptions::from_config(config.as_ref());
    assert_eq!(options.step_interval, Duration::from_secs(2));

    let mut app = App::new(options);
    let now = Instant::now();
    submit_case(
        &mut app,
        "+91 98765 43210",
        ReportDetails::with_amount(Amount::new(1)),
        now,
    );

    app.tick_at(now + Duration::from_secs(2));
    assert_eq!(
        app.active_case().map(|case| case.tracking_status()),
        Some(TrackingStatus::UnderReview)
    );
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = SafeguardConfig::load_from(&dir.path().join("absent.toml")).expect("no error");
    assert!(config.is_none());
    assert_eq!(
        AppOptions::from_config(config.as_ref()).step_interval,
        Duration::from_secs(8)
    );
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[tracking\nstep_interval_secs = ").expect("write config");

    let err = SafeguardConfig::load_from(&path).expect_err("parse error");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}
