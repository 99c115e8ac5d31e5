use std::fmt;

/// A case's position in its simulated resolution pipeline.
///
/// Declaration order is the canonical progression order. A case starts at
/// [`TrackingStatus::FIRST`] and moves one index at a time until it reaches
/// [`TrackingStatus::TERMINAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackingStatus {
    Submitted,
    UnderReview,
    EvidenceVerified,
    ForwardedToBank,
    InvestigationOpened,
    CallbackScheduled,
}

impl TrackingStatus {
    pub const ALL: [Self; 6] = [
        Self::Submitted,
        Self::UnderReview,
        Self::EvidenceVerified,
        Self::ForwardedToBank,
        Self::InvestigationOpened,
        Self::CallbackScheduled,
    ];

    pub const FIRST: Self = Self::ALL[0];
    pub const TERMINAL: Self = Self::ALL[Self::ALL.len() - 1];

    /// Position in [`TrackingStatus::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|status| *status == self)
            .unwrap_or_default()
    }

    /// The status one step further along, or `None` at the terminal status.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Report Submitted",
            Self::UnderReview => "Under Review",
            Self::EvidenceVerified => "Evidence Verified",
            Self::ForwardedToBank => "Forwarded to Bank",
            Self::InvestigationOpened => "Investigation Opened",
            Self::CallbackScheduled => "Callback Scheduled",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Submitted => "Your report has been logged with a case reference.",
            Self::UnderReview => "A case officer is reading your report.",
            Self::EvidenceVerified => "Transaction details and evidence have been checked.",
            Self::ForwardedToBank => "Your bank has been asked to freeze the beneficiary account.",
            Self::InvestigationOpened => "The cyber cell has opened an investigation.",
            Self::CallbackScheduled => "An officer will call you on the contact you provided.",
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
