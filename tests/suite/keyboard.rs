//! Full keyboard sessions through the TUI input layer.

use std::time::Duration;

use crossterm::event::KeyCode;
use safeguard_engine::{Amount, ScamType, Stage, Theme, TrackingStatus};
use safeguard_tui::{Focus, IntakeField};

use crate::common::Driver;

fn to_form(driver: &mut Driver, contact: &str) {
    driver.key(KeyCode::Enter);
    driver.type_text(contact);
    driver.key(KeyCode::Enter);
    assert_eq!(driver.app.stage(), Stage::Form);
}

#[test]
fn keyboard_session_files_a_report() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");

    driver.key(KeyCode::Right);
    driver.key(KeyCode::Tab);
    driver.type_text("₹1,25,000");
    driver.key(KeyCode::Tab);
    driver.type_text("2026-10-01");
    driver.key(KeyCode::Tab);
    driver.type_text("Fake trading app");
    driver.key(KeyCode::Tab);
    driver.paste("UTR 4521,\tscreenshot.png\n");
    driver.ctrl('s');

    assert_eq!(driver.app.stage(), Stage::Success);
    let case = driver.app.active_case().expect("case");
    assert_eq!(case.contact_info(), "a@b.com");
    assert_eq!(case.report().scam_type, ScamType::ALL[1]);
    assert_eq!(case.report().amount, Amount::new(125_000));
    assert_eq!(case.report().description, "Fake trading app");
    assert_eq!(case.report().evidence, ["UTR 4521", "screenshot.png"]);
    assert_eq!(case.tracking_status(), TrackingStatus::Submitted);
}

#[test]
fn blank_contact_stays_on_login() {
    let mut driver = Driver::new();
    driver.key(KeyCode::Enter);
    driver.type_text("   ");
    driver.key(KeyCode::Enter);

    assert_eq!(driver.app.stage(), Stage::Login);
    assert!(driver.screens.login.error.is_some());
}

#[test]
fn invalid_amount_keeps_the_form_open() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");

    driver.key(KeyCode::Tab);
    driver.type_text("lots");
    driver.key(KeyCode::Tab);
    driver.key(KeyCode::Tab);
    driver.type_text("Loan app threats");
    driver.ctrl('s');

    assert_eq!(driver.app.stage(), Stage::Form);
    let error = driver.screens.intake.error.as_ref().expect("amount error");
    assert_eq!(error.field(), IntakeField::Amount);
}

#[test]
fn ctrl_r_from_form_discards_the_draft() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");
    driver.key(KeyCode::Tab);
    driver.type_text("500");

    driver.ctrl('r');
    assert_eq!(driver.app.stage(), Stage::Intro);

    driver.key(KeyCode::Enter);
    driver.key(KeyCode::Enter);
    assert_eq!(driver.app.stage(), Stage::Form);
    assert!(driver.screens.intake.amount.is_blank());
}

#[test]
fn theme_keys_work_while_typing() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");
    driver.key(KeyCode::Tab);
    driver.type_text("12");
    driver.key(KeyCode::F(3));
    driver.type_text("0");

    assert_eq!(driver.app.theme(), Theme::Dark);
    assert_eq!(driver.screens.intake.amount.text(), "120");
}

#[test]
fn search_box_looks_up_the_case() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");
    driver.key(KeyCode::Tab);
    driver.type_text("500");
    driver.key(KeyCode::Tab);
    driver.key(KeyCode::Tab);
    driver.type_text("Courier customs call");
    driver.ctrl('s');
    let id = driver.app.active_case().expect("case").id();

    driver.ctrl('f');
    assert_eq!(driver.screens.focus, Focus::Search);
    driver.type_text(&id.to_string());
    driver.key(KeyCode::Enter);

    let notice = driver.app.current_notice().expect("notice");
    assert!(notice.text().contains(&id.to_string()));
    assert!(driver.screens.search.is_blank());
    assert_eq!(driver.app.stage(), Stage::Success);

    driver.key(KeyCode::Esc);
    assert_eq!(driver.screens.focus, Focus::Content);
}

#[test]
fn success_enter_starts_over_and_stops_tracking() {
    let mut driver = Driver::new();
    to_form(&mut driver, "a@b.com");
    driver.key(KeyCode::Tab);
    driver.type_text("500");
    driver.key(KeyCode::Tab);
    driver.key(KeyCode::Tab);
    driver.type_text("Fake KYC link");
    driver.ctrl('s');
    let due = driver.app.progression().due_at().expect("pending advance");

    driver.key(KeyCode::Enter);
    driver.app.tick_at(due + Duration::from_secs(1));

    assert_eq!(driver.app.stage(), Stage::Intro);
    assert!(driver.app.active_case().is_none());
}

#[test]
fn quit_keys_report_quit() {
    let mut driver = Driver::new();
    assert!(!driver.key(KeyCode::Char('q')));
    assert!(driver.ctrl('q'));
    assert!(driver.ctrl('c'));
}
