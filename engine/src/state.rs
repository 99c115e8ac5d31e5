//! Wizard state machine type.

use safeguard_types::{ScamCase, Stage};

/// Which stage is active, carrying the data only that stage owns.
///
/// Transitions: Intro -> Login -> Form -> Success(case) -> Intro, plus a
/// reset from any variant back to Intro.
#[derive(Debug)]
pub(crate) enum WizardState {
    Intro,
    Login,
    Form,
    /// The only variant that holds a case.
    Success(ScamCase),
}

impl WizardState {
    pub(crate) fn stage(&self) -> Stage {
        match self {
            WizardState::Intro => Stage::Intro,
            WizardState::Login => Stage::Login,
            WizardState::Form => Stage::Form,
            WizardState::Success(_) => Stage::Success,
        }
    }

    pub(crate) fn active_case(&self) -> Option<&ScamCase> {
        match self {
            WizardState::Success(case) => Some(case),
            WizardState::Intro | WizardState::Login | WizardState::Form => None,
        }
    }

    pub(crate) fn active_case_mut(&mut self) -> Option<&mut ScamCase> {
        match self {
            WizardState::Success(case) => Some(case),
            WizardState::Intro | WizardState::Login | WizardState::Form => None,
        }
    }
}
