//! Automatic case status progression.
//!
//! Simulates external case processing: while a case is active and not
//! terminal, one advance is pending at a time, due a fixed interval after it
//! was scheduled. The pending advance is a deadline keyed to the [`CaseId`] it
//! was scheduled for, not a spawned task, so cancelling it is just dropping
//! the record and a stale one is recognised by id before anything is written.

use std::time::{Duration, Instant};

use safeguard_types::{CaseId, ScamCase, TrackingStatus};

/// Delay between automatic status advances (8 seconds of monotonic time).
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingAdvance {
    case_id: CaseId,
    due: Instant,
}

/// Result of polling the progression at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Nothing pending, or the pending advance is not yet due.
    Idle,
    /// The active case moved one step forward.
    Advanced {
        case_id: CaseId,
        from: TrackingStatus,
        to: TrackingStatus,
    },
    /// The advance came due but its case is no longer active. Nothing written.
    Stale { case_id: CaseId },
    /// The advance came due on a case that was already terminal.
    Terminal { case_id: CaseId },
}

#[derive(Debug)]
pub struct StatusProgression {
    interval: Duration,
    pending: Option<PendingAdvance>,
}

impl StatusProgression {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Case the pending advance belongs to, if any.
    #[must_use]
    pub fn pending_case(&self) -> Option<CaseId> {
        self.pending.map(|pending| pending.case_id)
    }

    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Schedule the next advance for `case`, replacing whatever was pending.
    ///
    /// Returns `false` (leaving nothing pending) when the case is terminal.
    pub fn schedule(&mut self, case: &ScamCase, now: Instant) -> bool {
        self.cancel();
        if case.is_terminal() {
            return false;
        }
        self.pending = Some(PendingAdvance {
            case_id: case.id(),
            due: now + self.interval,
        });
        true
    }

    /// Drop the pending advance. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire the pending advance if it is due at `now`.
    ///
    /// The write only happens when `active` is the very case the advance was
    /// scheduled for. After a successful advance the next one is scheduled
    /// unless the new status is terminal.
    pub fn fire(&mut self, active: Option<&mut ScamCase>, now: Instant) -> AdvanceOutcome {
        let pending = match self.pending {
            Some(pending) if now >= pending.due => pending,
            _ => return AdvanceOutcome::Idle,
        };
        self.pending = None;

        let case = match active {
            Some(case) if case.id() == pending.case_id => case,
            _ => {
                return AdvanceOutcome::Stale {
                    case_id: pending.case_id,
                };
            }
        };

        let from = case.tracking_status();
        let Some(to) = case.advance() else {
            return AdvanceOutcome::Terminal {
                case_id: pending.case_id,
            };
        };

        if !to.is_terminal() {
            self.schedule(case, now);
        }

        AdvanceOutcome::Advanced {
            case_id: pending.case_id,
            from,
            to,
        }
    }
}
