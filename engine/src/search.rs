//! Case lookup behind the search box.
//!
//! Cases are never persisted, so the only case that can be found is the
//! active one. A lookup only ever posts a notice; it never changes the stage.

use safeguard_types::{CaseId, TrackingStatus};

use crate::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; nothing posted.
    Empty,
    /// No case has been submitted in this wizard run.
    NoActiveCase,
    Found {
        case_id: CaseId,
        status: TrackingStatus,
    },
    NotFound {
        query: String,
    },
}

impl SearchOutcome {
    /// Notice text for the status line, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            SearchOutcome::Empty => None,
            SearchOutcome::NoActiveCase => {
                Some("Case search: please submit a case first.".to_string())
            }
            SearchOutcome::Found { case_id, status } => {
                Some(format!("Case {case_id}: {}", status.label()))
            }
            SearchOutcome::NotFound { query } => Some(format!("No case found for \"{query}\".")),
        }
    }
}

impl App {
    /// Look up a case by reference (`FP-000001`) or number and post the
    /// result as a notice.
    pub fn submit_search(&mut self, query: &str) -> SearchOutcome {
        let query = query.trim();
        let outcome = if query.is_empty() {
            SearchOutcome::Empty
        } else {
            match self.active_case() {
                None => SearchOutcome::NoActiveCase,
                Some(case) if case.id().matches(query) => SearchOutcome::Found {
                    case_id: case.id(),
                    status: case.tracking_status(),
                },
                Some(_) => SearchOutcome::NotFound {
                    query: query.to_string(),
                },
            }
        };

        tracing::debug!(outcome = ?outcome, "Case search submitted");
        if let Some(text) = outcome.notice() {
            self.push_notice(text);
        }
        outcome
    }
}
