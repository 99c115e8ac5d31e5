//! Transient informational notices shown in the status line.
//!
//! Notices never block navigation and carry no error state; they expire on
//! their own after [`NOTICE_TTL`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

const MAX_NOTICES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    posted_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn posted_at(&self) -> Instant {
        self.posted_at
    }

    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= NOTICE_TTL
    }
}

/// Queue of notices; the newest is the one displayed.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    /// Post a notice.
    ///
    /// Posting text identical to a visible notice refreshes it instead of
    /// stacking a duplicate. Blank text is ignored.
    pub fn push(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        self.notices.retain(|notice| notice.text != text);
        self.notices.push_back(Notice {
            text,
            posted_at: now,
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|notice| !notice.expired(now));
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn dismiss_current(&mut self) {
        self.notices.pop_back();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
