//! The case record: report fields supplied by the intake form merged with
//! the tracking fields owned by the engine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::{CaseId, TrackingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScamType {
    #[default]
    UpiFraud,
    InvestmentScam,
    PhishingLink,
    LoanApp,
    Impersonation,
    Other,
}

impl ScamType {
    pub const ALL: [Self; 6] = [
        Self::UpiFraud,
        Self::InvestmentScam,
        Self::PhishingLink,
        Self::LoanApp,
        Self::Impersonation,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpiFraud => "UPI / payment fraud",
            Self::InvestmentScam => "Investment or trading scam",
            Self::PhishingLink => "Phishing link or fake website",
            Self::LoanApp => "Loan app harassment",
            Self::Impersonation => "Impersonation (bank, police, courier)",
            Self::Other => "Other",
        }
    }

    /// Cycle forward (`step > 0`) or backward through [`ScamType::ALL`].
    #[must_use]
    pub fn cycle(self, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let current = Self::ALL.iter().position(|t| *t == self).unwrap_or(0) as isize;
        Self::ALL[(current + step).rem_euclid(len) as usize]
    }
}

/// Amount lost, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is required")]
    Empty,
    #[error("amount must be a whole number of rupees, got `{0}`")]
    NotANumber(String),
}

impl Amount {
    #[must_use]
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    #[must_use]
    pub const fn rupees(self) -> u64 {
        self.0
    }

    /// Parse user input such as `500`, `1,25,000`, `₹ 2,000` or `Rs.750`.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        let without_symbol = trimmed
            .strip_prefix('₹')
            .or_else(|| trimmed.strip_prefix("Rs."))
            .or_else(|| trimmed.strip_prefix("Rs"))
            .unwrap_or(trimmed)
            .trim();
        if without_symbol.is_empty() {
            return Err(AmountError::Empty);
        }
        let digits: String = without_symbol.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountError::NotANumber(trimmed.to_string()));
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AmountError::NotANumber(trimmed.to_string()))
    }
}

impl fmt::Display for Amount {
    /// Indian digit grouping: `1,25,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        if digits.len() <= 3 {
            return write!(f, "₹{digits}");
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        write!(f, "₹{},{tail}", groups.join(","))
    }
}

/// Report fields supplied wholesale by the intake form.
///
/// The engine never inspects or validates these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDetails {
    pub scam_type: ScamType,
    pub amount: Amount,
    pub incident_date: String,
    pub description: String,
    pub evidence: Vec<String>,
}

impl ReportDetails {
    /// A report carrying only an amount; the remaining fields are empty.
    #[must_use]
    pub fn with_amount(amount: Amount) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }
}

/// A submitted scam report under tracking.
///
/// Built once by [`ScamCase::new`]. Only [`ScamCase::advance`] mutates it
/// afterwards, and only the tracking status.
#[derive(Debug, Clone)]
pub struct ScamCase {
    id: CaseId,
    report: Arc<ReportDetails>,
    contact_info: String,
    tracking_status: TrackingStatus,
    submitted_at: DateTime<Local>,
}

impl ScamCase {
    /// Merge the form's report with the contact info captured at login.
    /// The status starts at [`TrackingStatus::FIRST`].
    #[must_use]
    pub fn new(id: CaseId, report: ReportDetails, contact_info: impl Into<String>) -> Self {
        Self {
            id,
            report: Arc::new(report),
            contact_info: contact_info.into(),
            tracking_status: TrackingStatus::FIRST,
            submitted_at: Local::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CaseId {
        self.id
    }

    #[must_use]
    pub fn report(&self) -> &ReportDetails {
        &self.report
    }

    /// Shared handle to the report part, for identity checks.
    #[must_use]
    pub fn report_handle(&self) -> &Arc<ReportDetails> {
        &self.report
    }

    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    #[must_use]
    pub fn tracking_status(&self) -> TrackingStatus {
        self.tracking_status
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Local> {
        self.submitted_at
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.tracking_status.is_terminal()
    }

    /// Move the status one step forward.
    ///
    /// Returns the new status, or `None` (and changes nothing) when the case
    /// is already terminal.
    pub fn advance(&mut self) -> Option<TrackingStatus> {
        let next = self.tracking_status.next()?;
        self.tracking_status = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Amount, AmountError, ReportDetails, ScamCase, ScamType};
    use crate::{CaseId, TrackingStatus};

    #[test]
    fn new_case_starts_submitted_with_verbatim_contact() {
        let case = ScamCase::new(
            CaseId::new(1),
            ReportDetails::with_amount(Amount::new(500)),
            "  a@b.com ",
        );
        assert_eq!(case.tracking_status(), TrackingStatus::Submitted);
        assert_eq!(case.contact_info(), "  a@b.com ");
        assert_eq!(case.report().amount, Amount::new(500));
    }

    #[test]
    fn advance_only_touches_status() {
        let mut case = ScamCase::new(CaseId::new(3), ReportDetails::default(), "x");
        let report = Arc::clone(case.report_handle());
        let submitted_at = case.submitted_at();

        assert_eq!(case.advance(), Some(TrackingStatus::UnderReview));
        assert!(Arc::ptr_eq(&report, case.report_handle()));
        assert_eq!(case.contact_info(), "x");
        assert_eq!(case.id(), CaseId::new(3));
        assert_eq!(case.submitted_at(), submitted_at);
    }

    #[test]
    fn advance_stops_at_terminal() {
        let mut case = ScamCase::new(CaseId::new(1), ReportDetails::default(), "");
        let steps = std::iter::from_fn(|| case.advance()).count();
        assert_eq!(steps, TrackingStatus::ALL.len() - 1);
        assert!(case.is_terminal());
        assert_eq!(case.advance(), None);
        assert_eq!(case.tracking_status(), TrackingStatus::TERMINAL);
    }

    #[test]
    fn amount_parses_common_inputs() {
        assert_eq!(Amount::parse("500"), Ok(Amount::new(500)));
        assert_eq!(Amount::parse("1,25,000"), Ok(Amount::new(125_000)));
        assert_eq!(Amount::parse("₹ 2,000"), Ok(Amount::new(2_000)));
        assert_eq!(Amount::parse("Rs.750"), Ok(Amount::new(750)));
        assert_eq!(Amount::parse("   "), Err(AmountError::Empty));
        assert!(matches!(
            Amount::parse("12.50"),
            Err(AmountError::NotANumber(_))
        ));
        assert!(matches!(Amount::parse("-5"), Err(AmountError::NotANumber(_))));
    }

    #[test]
    fn amount_display_uses_indian_grouping() {
        assert_eq!(Amount::new(500).to_string(), "₹500");
        assert_eq!(Amount::new(2_000).to_string(), "₹2,000");
        assert_eq!(Amount::new(125_000).to_string(), "₹1,25,000");
        assert_eq!(Amount::new(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn scam_type_cycles_both_ways() {
        assert_eq!(ScamType::UpiFraud.cycle(1), ScamType::InvestmentScam);
        assert_eq!(ScamType::UpiFraud.cycle(-1), ScamType::Other);
        assert_eq!(ScamType::Other.cycle(1), ScamType::UpiFraud);
    }
}
