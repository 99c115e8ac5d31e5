use std::fmt;

/// Per-process case number.
///
/// Allocated in increasing order by the engine, so it also serves as the
/// generation counter for scheduled status advances: an advance recorded
/// against one id can never land on a case created later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId(u64);

impl CaseId {
    pub const PREFIX: &'static str = "FP-";

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether `query` names this case, either as the full reference
    /// (`FP-000042`, any case) or as the bare number (`42`).
    #[must_use]
    pub fn matches(self, query: &str) -> bool {
        let query = query.trim();
        let digits = match query.get(..Self::PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(Self::PREFIX) => {
                &query[Self::PREFIX.len()..]
            }
            _ => query,
        };
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits.parse::<u64>().is_ok_and(|n| n == self.0)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:06}", Self::PREFIX, self.0)
    }
}
