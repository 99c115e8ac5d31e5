//! Core engine for Safeguard - wizard state machine and case tracking.
//!
//! This crate contains the [`App`] state machine without TUI dependencies:
//!
//! - **Wizard Controller**: sequences the user through [`Stage::Intro`],
//!   [`Stage::Login`], [`Stage::Form`] and [`Stage::Success`]
//! - **Status progression**: advances the active case's [`TrackingStatus`]
//!   one step per fixed interval until it reaches the terminal status
//! - **Theme store**: the process-wide [`Theme`] and its mirrored
//!   presentation attribute
//! - **Notices and case lookup**: transient informational messages, including
//!   the result of the search box
//!
//! The TUI layer (`safeguard_tui`) reads state from `App` and forwards input
//! back to it. No rendering logic lives in this crate.
//!
//! # Type-Driven Design
//!
//! - The active case lives inside the `Success` state variant, so "a case is
//!   active iff the stage is `Success`" holds by construction.
//! - Stage transitions go through borrow-scoped guards ([`StageAccess`]); each
//!   transition consumes its guard, so a trigger can only be issued from the
//!   stage that owns it, and only once.
//! - Scheduled advances are keyed to a [`CaseId`]; resetting or replacing the
//!   case cancels the pending advance, and a stale one can never write.

use std::mem;
use std::time::{Duration, Instant};

use safeguard_config::SafeguardConfig;

pub use safeguard_types::ui::{LineInput, UiOptions};
pub use safeguard_types::{
    Amount, AmountError, CaseId, ReportDetails, ScamCase, ScamType, Stage, Theme, TrackingStatus,
};

mod notifications;
mod progression;
mod search;
mod stages;
mod state;
mod theme;


pub use notifications::{NOTICE_TTL, Notice, NoticeBoard};
pub use progression::{AdvanceOutcome, DEFAULT_STEP_INTERVAL, StatusProgression};
pub use search::SearchOutcome;
pub use stages::{FormStage, IntroStage, LoginStage, StageAccess, SuccessStage};
pub use theme::{PresentationAttribute, THEME_ATTRIBUTE, ThemeStore};

use state::WizardState;

/// Startup options for [`App`], fixed for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    /// Delay between automatic status advances.
    pub step_interval: Duration,
    pub ui_options: UiOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            step_interval: DEFAULT_STEP_INTERVAL,
            ui_options: UiOptions::default(),
        }
    }
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: Option<&SafeguardConfig>) -> Self {
        let fallback = SafeguardConfig::default();
        let config = config.unwrap_or(&fallback);
        Self {
            step_interval: config.step_interval(),
            ui_options: UiOptions {
                ascii_only: config.ascii_only(),
            },
        }
    }
}

/// The Wizard Controller: single owner of all application state.
#[derive(Debug)]
pub struct App {
    state: WizardState,
    /// Captured at login; copied into the case at submission.
    contact_info: String,
    theme: ThemeStore,
    progression: StatusProgression,
    last_case_id: u64,
    notices: NoticeBoard,
    /// Request for the renderer to scroll the content back to the top.
    scroll_to_top: bool,
    ui_options: UiOptions,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        tracing::debug!(
            step_interval_ms = options.step_interval.as_millis() as u64,
            ascii_only = options.ui_options.ascii_only,
            "Creating app"
        );
        Self {
            state: WizardState::Intro,
            contact_info: String::new(),
            theme: ThemeStore::new(Theme::default()),
            progression: StatusProgression::new(options.step_interval),
            last_case_id: 0,
            notices: NoticeBoard::default(),
            scroll_to_top: false,
            ui_options: options.ui_options,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// The case under management, present only in [`Stage::Success`].
    ///
    /// Read on every frame, so it always reflects the latest status.
    #[must_use]
    pub fn active_case(&self) -> Option<&ScamCase> {
        self.state.active_case()
    }

    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn theme_attribute(&self) -> &PresentationAttribute {
        self.theme.attribute()
    }

    /// Select a theme. Available from every stage; never changes the stage.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme.set(theme) {
            tracing::info!(theme = %theme, "Theme changed");
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn progression(&self) -> &StatusProgression {
        &self.progression
    }

    /// Return to the intro, dropping the active case (brand click).
    ///
    /// Any pending status advance is cancelled before the case is dropped.
    pub fn reset(&mut self) {
        let cancelled = self.progression.cancel();
        let from = self.stage();
        let previous = mem::replace(&mut self.state, WizardState::Intro);
        if let WizardState::Success(case) = previous {
            tracing::info!(
                case = %case.id(),
                status = %case.tracking_status(),
                pending_cancelled = cancelled,
                "Active case cleared"
            );
        }
        tracing::info!(from = %from, "Wizard reset");
    }

    /// Consume the one-shot scroll-to-top request raised by a submission.
    pub fn take_scroll_to_top(&mut self) -> bool {
        mem::take(&mut self.scroll_to_top)
    }

    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.notices.push(text, Instant::now());
    }

    #[must_use]
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss_current();
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance time-driven state to `now`: expire notices and fire a due
    /// status advance.
    pub fn tick_at(&mut self, now: Instant) {
        self.notices.prune(now);

        match self.progression.fire(self.state.active_case_mut(), now) {
            AdvanceOutcome::Idle => {}
            AdvanceOutcome::Advanced { case_id, from, to } => {
                tracing::info!(case = %case_id, from = %from, to = %to, "Case status advanced");
            }
            AdvanceOutcome::Stale { case_id } => {
                tracing::debug!(case = %case_id, "Discarded advance for inactive case");
            }
            AdvanceOutcome::Terminal { case_id } => {
                tracing::debug!(case = %case_id, "Case already terminal");
            }
        }
    }

    fn allocate_case_id(&mut self) -> CaseId {
        self.last_case_id = self.last_case_id.saturating_add(1);
        CaseId::new(self.last_case_id)
    }
}
