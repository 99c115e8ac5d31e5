//! Stage guards for type-safe wizard transitions.
//!
//! This module provides borrow-scoped guards that ensure a transition is only
//! performed from the stage that owns it. Each transition consumes its guard,
//! so it can fire at most once per borrow.

use std::time::Instant;

use safeguard_types::{CaseId, ReportDetails, ScamCase};

use crate::App;
use crate::state::WizardState;

pub struct IntroStage<'a> {
    app: &'a mut App,
}

pub struct LoginStage<'a> {
    app: &'a mut App,
}

pub struct FormStage<'a> {
    app: &'a mut App,
}

pub struct SuccessStage<'a> {
    app: &'a mut App,
}

/// The transitions available from the current stage.
pub enum StageAccess<'a> {
    Intro(IntroStage<'a>),
    Login(LoginStage<'a>),
    Form(FormStage<'a>),
    Success(SuccessStage<'a>),
}

impl App {
    /// Borrow-scoped access to the current stage's transitions.
    ///
    /// The returned guard holds `&mut App`, so the stage cannot change while
    /// the guard exists.
    pub fn stage_mut(&mut self) -> StageAccess<'_> {
        match &self.state {
            WizardState::Intro => StageAccess::Intro(IntroStage { app: self }),
            WizardState::Login => StageAccess::Login(LoginStage { app: self }),
            WizardState::Form => StageAccess::Form(FormStage { app: self }),
            WizardState::Success(_) => StageAccess::Success(SuccessStage { app: self }),
        }
    }
}

impl IntroStage<'_> {
    pub fn proceed(self) {
        self.app.state = WizardState::Login;
        tracing::info!("Intro -> login");
    }
}

impl LoginStage<'_> {
    /// Record the contact info and move on to the report form.
    ///
    /// The text is kept verbatim; there is no verification.
    pub fn continue_with(self, contact_info: impl Into<String>) {
        self.app.contact_info = contact_info.into();
        self.app.state = WizardState::Form;
        tracing::info!("Login -> form");
    }
}

impl FormStage<'_> {
    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.app.contact_info
    }

    pub fn submit(self, report: ReportDetails) -> CaseId {
        self.submit_at(report, Instant::now())
    }

    /// Create the active case from `report` and the contact info captured at
    /// login, then move to the success stage.
    ///
    /// The first status advance is scheduled relative to `now`, and the
    /// renderer is asked to scroll back to the top.
    pub fn submit_at(self, report: ReportDetails, now: Instant) -> CaseId {
        let app = self.app;
        let id = app.allocate_case_id();
        let case = ScamCase::new(id, report, app.contact_info.clone());
        app.progression.schedule(&case, now);
        app.state = WizardState::Success(case);
        app.scroll_to_top = true;
        tracing::info!(case = %id, "Form -> success: case submitted");
        id
    }
}

impl SuccessStage<'_> {
    #[must_use]
    pub fn case(&self) -> &ScamCase {
        match &self.app.state {
            WizardState::Success(case) => case,
            // The guard is only constructed from the Success variant and holds
            // the only mutable borrow of the app.
            WizardState::Intro | WizardState::Login | WizardState::Form => {
                unreachable!("SuccessStage without an active case")
            }
        }
    }

    /// "File another report": clear the case and return to the intro.
    pub fn reset(self) {
        self.app.reset();
    }
}
