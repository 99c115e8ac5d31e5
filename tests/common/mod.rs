//! Shared test utilities and fixtures
//!
//! Drives the wizard through the same entry points the binary uses.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use safeguard_engine::{App, AppOptions, CaseId, ReportDetails, StageAccess, UiOptions};
use safeguard_tui::{Screens, apply_event};

pub const STEP: Duration = Duration::from_secs(8);

pub fn app_with_step(step_interval: Duration) -> App {
    App::new(AppOptions {
        step_interval,
        ui_options: UiOptions::default(),
    })
}

/// Intro -> Login -> Form -> Success with a fixed clock.
pub fn submit_case(app: &mut App, contact: &str, report: ReportDetails, now: Instant) -> CaseId {
    if let StageAccess::Intro(intro) = app.stage_mut() {
        intro.proceed();
    }
    if let StageAccess::Login(login) = app.stage_mut() {
        login.continue_with(contact);
    }
    match app.stage_mut() {
        StageAccess::Form(form) => form.submit_at(report, now),
        _ => panic!("expected form stage"),
    }
}

pub struct Driver {
    pub app: App,
    pub screens: Screens,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            app: app_with_step(STEP),
            screens: Screens::new(),
        }
    }

    /// Returns `true` if the key asked to quit.
    pub fn key(&mut self, code: KeyCode) -> bool {
        self.send(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn ctrl(&mut self, c: char) -> bool {
        self.send(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    pub fn paste(&mut self, text: &str) {
        apply_event(
            &mut self.app,
            &mut self.screens,
            Event::Paste(text.to_string()),
        );
    }

    fn send(&mut self, key: KeyEvent) -> bool {
        apply_event(&mut self.app, &mut self.screens, Event::Key(key))
    }
}
