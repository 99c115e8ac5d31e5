use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The wizard's current screen identity.
///
/// Exactly one stage is active at a time. The order of [`Stage::ALL`] is the
/// order a user walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Intro,
    Login,
    Form,
    Success,
}

impl Stage {
    pub const ALL: [Self; 4] = [Self::Intro, Self::Login, Self::Form, Self::Success];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Login => "login",
            Self::Form => "form",
            Self::Success => "success",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Intro => "Report a Financial Scam",
            Self::Login => "Your Contact Details",
            Self::Form => "Incident Report",
            Self::Success => "Report Received",
        }
    }

    /// 1-based step number shown in the progress header.
    #[must_use]
    pub const fn step(self) -> usize {
        match self {
            Self::Intro => 1,
            Self::Login => 2,
            Self::Form => 3,
            Self::Success => 4,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide UI preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Olive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected light, dark or olive)")]
pub struct UnknownThemeError(pub String);

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Olive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Olive => "olive",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Olive => "Olive",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "olive" => Ok(Self::Olive),
            other => Err(UnknownThemeError(other.to_string())),
        }
    }
}
