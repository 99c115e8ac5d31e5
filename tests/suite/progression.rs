//! Status timeline timing.

use std::time::{Duration, Instant};

use safeguard_engine::{Amount, ReportDetails, Stage, TrackingStatus};

use crate::common::{STEP, app_with_step, submit_case};

fn status_after(ticks: &[Duration]) -> TrackingStatus {
    let mut app = app_with_step(STEP);
    let t0 = Instant::now();
    submit_case(
        &mut app,
        "a@b.com",
        ReportDetails::with_amount(Amount::new(500)),
        t0,
    );
    for offset in ticks {
        app.tick_at(t0 + *offset);
    }
    app.active_case().expect("case").tracking_status()
}

#[test]
fn nothing_advances_before_the_interval() {
    let ticks: Vec<Duration> = (0..8).map(|ms| Duration::from_millis(ms * 999)).collect();
    assert_eq!(status_after(&ticks), TrackingStatus::Submitted);
}

#[test]
fn a_late_tick_advances_only_one_step() {
    assert_eq!(status_after(&[STEP * 5]), TrackingStatus::UnderReview);
}

#[test]
fn each_interval_advances_one_step_until_terminal() {
    let mut app = app_with_step(STEP);
    let t0 = Instant::now();
    submit_case(&mut app, "a@b.com", ReportDetails::default(), t0);

    let mut seen = vec![TrackingStatus::Submitted];
    let mut now = t0;
    for _ in 0..10 {
        now += STEP;
        app.tick_at(now);
        let status = app.active_case().expect("case").tracking_status();
        if seen.last() != Some(&status) {
            seen.push(status);
        }
    }

    assert_eq!(seen, TrackingStatus::ALL.to_vec());
    assert!(app.active_case().expect("case").is_terminal());
    assert!(!app.progression().is_pending());
    assert_eq!(app.stage(), Stage::Success);
}

#[test]
fn reset_at_the_deadline_wins() {
    let mut app = app_with_step(STEP);
    let t0 = Instant::now();
    submit_case(&mut app, "a@b.com", ReportDetails::default(), t0);

    // Input is handled before the tick in the same frame.
    app.reset();
    app.tick_at(t0 + STEP);

    assert_eq!(app.stage(), Stage::Intro);
    assert!(app.active_case().is_none());
}
