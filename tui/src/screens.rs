//! Per-stage component state: the text fields behind the login slide, the
//! intake form and the search box.
//!
//! Components are remounted whenever the wizard enters their stage. The
//! only carried-over text is the contact field, refilled from the engine.

use safeguard_engine::{
    Amount, AmountError, App, LineInput, ReportDetails, ScamType, Stage, StageAccess,
};
use thiserror::Error;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Content,
    Search,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub contact: LineInput,
    pub error: Option<String>,
}

impl LoginForm {
    /// Hand the contact to the engine. Blank input stays on the slide.
    pub fn submit(&mut self, app: &mut App) {
        if self.contact.is_blank() {
            self.error = Some("Enter an email address or phone number.".to_string());
            return;
        }
        if let StageAccess::Login(login) = app.stage_mut() {
            login.continue_with(self.contact.take());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeField {
    #[default]
    ScamType,
    Amount,
    IncidentDate,
    Description,
    Evidence,
}

impl IntakeField {
    pub const ALL: [Self; 5] = [
        Self::ScamType,
        Self::Amount,
        Self::IncidentDate,
        Self::Description,
        Self::Evidence,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ScamType => "Type of scam",
            Self::Amount => "Amount lost (₹)",
            Self::IncidentDate => "Date of incident",
            Self::Description => "What happened",
            Self::Evidence => "Evidence (comma separated)",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::ScamType => "",
            Self::Amount => "e.g. 25,000",
            Self::IncidentDate => "e.g. 12 Oct 2026",
            Self::Description => "Who contacted you, how, and what you paid",
            Self::Evidence => "UPI ref, screenshot names, phone numbers",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::ALL[Self::ALL.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("describe what happened")]
    MissingDescription,
}

impl IntakeError {
    #[must_use]
    pub fn field(&self) -> IntakeField {
        match self {
            IntakeError::Amount(_) => IntakeField::Amount,
            IntakeError::MissingDescription => IntakeField::Description,
        }
    }
}

#[derive(Debug, Default)]
pub struct IntakeForm {
    pub scam_type: ScamType,
    pub amount: LineInput,
    pub incident_date: LineInput,
    pub description: LineInput,
    pub evidence: LineInput,
    pub focused: IntakeField,
    pub error: Option<IntakeError>,
}

impl IntakeForm {
    /// Text buffer behind `field`; `None` for the scam type selector.
    pub fn input_mut(&mut self, field: IntakeField) -> Option<&mut LineInput> {
        match field {
            IntakeField::ScamType => None,
            IntakeField::Amount => Some(&mut self.amount),
            IntakeField::IncidentDate => Some(&mut self.incident_date),
            IntakeField::Description => Some(&mut self.description),
            IntakeField::Evidence => Some(&mut self.evidence),
        }
    }

    #[must_use]
    pub fn input(&self, field: IntakeField) -> Option<&LineInput> {
        match field {
            IntakeField::ScamType => None,
            IntakeField::Amount => Some(&self.amount),
            IntakeField::IncidentDate => Some(&self.incident_date),
            IntakeField::Description => Some(&self.description),
            IntakeField::Evidence => Some(&self.evidence),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn cycle_scam_type(&mut self, step: isize) {
        self.scam_type = self.scam_type.cycle(step);
    }

    /// Assemble the payload handed to the engine.
    pub fn build_report(&self) -> Result<ReportDetails, IntakeError> {
        let amount = Amount::parse(self.amount.text())?;
        if self.description.is_blank() {
            return Err(IntakeError::MissingDescription);
        }
        let evidence = self
            .evidence
            .text()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(ReportDetails {
            scam_type: self.scam_type,
            amount,
            incident_date: self.incident_date.trimmed().to_string(),
            description: self.description.trimmed().to_string(),
            evidence,
        })
    }

    /// Validate and submit. On a validation error the form stays mounted
    /// with focus on the offending field.
    pub fn submit(&mut self, app: &mut App) {
        match self.build_report() {
            Ok(report) => {
                if let StageAccess::Form(form) = app.stage_mut() {
                    form.submit(report);
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "Intake form rejected");
                self.focused = err.field();
                self.error = Some(err);
            }
        }
    }
}

/// Component state for everything the engine treats as opaque UI.
#[derive(Debug)]
pub struct Screens {
    pub focus: Focus,
    pub search: LineInput,
    pub login: LoginForm,
    pub intake: IntakeForm,
    /// Vertical scroll of the content area.
    pub scroll: u16,
    mounted: Stage,
}

impl Default for Screens {
    fn default() -> Self {
        Self::new()
    }
}

impl Screens {
    #[must_use]
    pub fn new() -> Self {
        Self {
            focus: Focus::Content,
            search: LineInput::default(),
            login: LoginForm::default(),
            intake: IntakeForm::default(),
            scroll: 0,
            mounted: Stage::Intro,
        }
    }

    #[must_use]
    pub fn mounted(&self) -> Stage {
        self.mounted
    }

    /// Remount components after a stage change and honour the engine's
    /// scroll-to-top request.
    pub fn sync(&mut self, app: &mut App) {
        let stage = app.stage();
        if stage != self.mounted {
            match stage {
                Stage::Login => {
                    // Contact details survive a reset; offer them again.
                    self.login = LoginForm::default();
                    self.login.contact.replace(app.contact_info());
                }
                Stage::Form => self.intake = IntakeForm::default(),
                Stage::Intro | Stage::Success => {}
            }
            self.scroll = 0;
            self.mounted = stage;
        }
        if app.take_scroll_to_top() {
            self.scroll = 0;
        }
    }
}
