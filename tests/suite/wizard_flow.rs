//! End-to-end wizard behavior through the engine's public API.

use std::sync::Arc;
use std::time::{Duration, Instant};

use safeguard_engine::{
    Amount, App, ReportDetails, ScamType, SearchOutcome, Stage, StageAccess, THEME_ATTRIBUTE,
    Theme, TrackingStatus,
};

use crate::common::{STEP, app_with_step, submit_case};

fn report(amount: u64) -> ReportDetails {
    ReportDetails {
        scam_type: ScamType::InvestmentScam,
        description: "Promised 30% monthly returns".to_string(),
        ..ReportDetails::with_amount(Amount::new(amount))
    }
}

#[test]
fn submitted_case_carries_contact_and_report() {
    let mut app = app_with_step(STEP);
    let now = Instant::now();
    let id = submit_case(&mut app, "a@b.com", report(500), now);

    assert_eq!(app.stage(), Stage::Success);
    let case = app.active_case().expect("case after submit");
    assert_eq!(case.id(), id);
    assert_eq!(case.contact_info(), "a@b.com");
    assert_eq!(case.report().amount, Amount::new(500));
    assert_eq!(case.report().scam_type, ScamType::InvestmentScam);
    assert_eq!(case.tracking_status(), TrackingStatus::FIRST);
    assert!(app.progression().is_pending());
}

#[test]
fn reset_returns_home_and_drops_case() {
    let mut app = app_with_step(STEP);
    let now = Instant::now();
    submit_case(&mut app, "a@b.com", report(500), now);

    match app.stage_mut() {
        StageAccess::Success(success) => success.reset(),
        _ => panic!("expected success stage"),
    }

    assert_eq!(app.stage(), Stage::Intro);
    assert!(app.active_case().is_none());
    assert!(!app.progression().is_pending());

    app.tick_at(now + STEP * 4);
    assert_eq!(app.stage(), Stage::Intro);
    assert!(app.active_case().is_none());
}

#[test]
fn resubmission_starts_a_fresh_timeline() {
    let mut app = app_with_step(STEP);
    let t0 = Instant::now();
    let first = submit_case(&mut app, "a@b.com", report(500), t0);
    app.tick_at(t0 + STEP);
    app.tick_at(t0 + STEP * 2);
    assert_eq!(
        app.active_case().map(|case| case.tracking_status()),
        Some(TrackingStatus::EvidenceVerified)
    );

    app.reset();
    let t1 = t0 + STEP * 2 + Duration::from_secs(1);
    let second = submit_case(&mut app, "a@b.com", report(900), t1);
    assert!(second > first);

    // The first case's next deadline would have been t0 + 3 * STEP.
    app.tick_at(t0 + STEP * 3);
    let case = app.active_case().expect("second case");
    assert_eq!(case.id(), second);
    assert_eq!(case.tracking_status(), TrackingStatus::Submitted);

    app.tick_at(t1 + STEP);
    assert_eq!(
        app.active_case().map(|case| case.tracking_status()),
        Some(TrackingStatus::UnderReview)
    );
}

#[test]
fn report_is_shared_not_copied_across_advances() {
    let mut app = app_with_step(STEP);
    let now = Instant::now();
    submit_case(&mut app, "a@b.com", report(500), now);
    let before = Arc::clone(app.active_case().expect("case").report_handle());

    for step in 1..=3 {
        app.tick_at(now + STEP * step);
    }

    let after = app.active_case().expect("case").report_handle();
    assert!(Arc::ptr_eq(&before, after));
}

#[test]
fn theme_attribute_tracks_switches_across_stages() {
    let mut app = App::default();
    assert_eq!(app.theme_attribute().name(), THEME_ATTRIBUTE);
    assert_eq!(app.theme_attribute().value(), Some("light"));

    app.set_theme(Theme::Olive);
    submit_case(&mut app, "a@b.com", report(500), Instant::now());
    assert_eq!(app.theme(), Theme::Olive);

    app.set_theme(Theme::Dark);
    app.set_theme(Theme::Dark);
    app.reset();
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.theme_attribute().value(), Some("dark"));
    assert_eq!(app.theme_attribute().writes(), 3);
}

#[test]
fn search_reports_active_case_without_navigating() {
    let mut app = app_with_step(STEP);
    assert_eq!(app.submit_search("FP-000001"), SearchOutcome::NoActiveCase);

    let now = Instant::now();
    let id = submit_case(&mut app, "a@b.com", report(500), now);
    app.tick_at(now + STEP);

    let outcome = app.submit_search(&id.to_string().to_lowercase());
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            case_id: id,
            status: TrackingStatus::UnderReview,
        }
    );
    assert_eq!(app.stage(), Stage::Success);
    let notice = app.current_notice().expect("search posts a notice");
    assert!(notice.text().contains("Under Review"));

    assert!(matches!(
        app.submit_search("FP-999999"),
        SearchOutcome::NotFound { .. }
    ));
    assert_eq!(app.submit_search("   "), SearchOutcome::Empty);
}
