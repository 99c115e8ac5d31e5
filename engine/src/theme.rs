//! Theme store and its presentation attribute mirror.

use safeguard_types::Theme;

/// Name of the attribute the styling layer reads the theme from.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// One process-wide string attribute read by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationAttribute {
    name: &'static str,
    value: Option<&'static str>,
    writes: u64,
}

impl PresentationAttribute {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            value: None,
            writes: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&'static str> {
        self.value
    }

    /// Total number of writes since creation.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn write(&mut self, value: &'static str) {
        self.value = Some(value);
        self.writes += 1;
    }
}

/// Holds the current [`Theme`] and mirrors it to [`THEME_ATTRIBUTE`].
///
/// The attribute is written once at construction and once per actual
/// change; re-selecting the current theme writes nothing.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    current: Theme,
    attribute: PresentationAttribute,
}

impl ThemeStore {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        let mut attribute = PresentationAttribute::new(THEME_ATTRIBUTE);
        attribute.write(initial.as_str());
        Self {
            current: initial,
            attribute,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn attribute(&self) -> &PresentationAttribute {
        &self.attribute
    }

    /// Total: accepts every theme. Returns whether the value changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        self.attribute.write(theme.as_str());
        true
    }
}
