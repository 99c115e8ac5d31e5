//! Palettes and glyphs for the Safeguard TUI.
//!
//! The palette is chosen from the engine's `data-theme` presentation
//! attribute, not from the theme store directly.

use ratatui::style::{Color, Modifier, Style};

use safeguard_engine::{PresentationAttribute, Theme, UiOptions};

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_main: Color,
    pub bg_card: Color,
    pub border: Color,
    pub text_main: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            bg_main: Color::Rgb(248, 250, 252),
            bg_card: Color::Rgb(255, 255, 255),
            border: Color::Rgb(203, 213, 225),
            text_main: Color::Rgb(15, 23, 42),
            text_muted: Color::Rgb(100, 116, 139),
            accent: Color::Rgb(37, 99, 235),
            accent_text: Color::Rgb(255, 255, 255),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg_main: Color::Rgb(2, 6, 23),
            bg_card: Color::Rgb(15, 23, 42),
            border: Color::Rgb(51, 65, 85),
            text_main: Color::Rgb(241, 245, 249),
            text_muted: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(59, 130, 246),
            accent_text: Color::Rgb(255, 255, 255),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
        }
    }

    #[must_use]
    pub fn olive() -> Self {
        Self {
            bg_main: Color::Rgb(26, 31, 22),
            bg_card: Color::Rgb(38, 45, 31),
            border: Color::Rgb(74, 85, 58),
            text_main: Color::Rgb(236, 238, 223),
            text_muted: Color::Rgb(163, 170, 140),
            accent: Color::Rgb(132, 153, 78),
            accent_text: Color::Rgb(20, 24, 16),
            success: Color::Rgb(163, 190, 110),
            warning: Color::Rgb(222, 184, 92),
            error: Color::Rgb(214, 110, 90),
        }
    }

    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
            Theme::Olive => Self::olive(),
        }
    }
}

/// Palette for the theme named by the presentation attribute.
///
/// An unset or unrecognised value falls back to the light palette.
#[must_use]
pub fn palette(attribute: &PresentationAttribute) -> Palette {
    let theme = attribute
        .value()
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or_default();
    Palette::for_theme(theme)
}

#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub brand: &'static str,
    pub lock: &'static str,
    pub search: &'static str,
    pub done: &'static str,
    pub current: &'static str,
    pub pending: &'static str,
    pub rail: &'static str,
    pub bullet: &'static str,
    pub selector_left: &'static str,
    pub selector_right: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            brand: "[#]",
            lock: "*",
            search: "?",
            done: "[x]",
            current: "[>]",
            pending: "[ ]",
            rail: " | ",
            bullet: "-",
            selector_left: "<",
            selector_right: ">",
        }
    } else {
        Glyphs {
            brand: "⛨",
            lock: "🔒",
            search: "⌕",
            done: "✔",
            current: "●",
            pending: "○",
            rail: "│",
            bullet: "•",
            selector_left: "◀",
            selector_right: "▶",
        }
    }
}

pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn base(palette: &Palette) -> Style {
        Style::default().fg(palette.text_main).bg(palette.bg_main)
    }

    #[must_use]
    pub fn card(palette: &Palette) -> Style {
        Style::default().fg(palette.text_main).bg(palette.bg_card)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn accent_bold(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent_text)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        }
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }
}

#[cfg(test)]
mod tests {
    use safeguard_engine::{App, Theme};

    use super::{Palette, palette};

    #[test]
    fn palette_follows_attribute() {
        let mut app = App::default();
        assert_eq!(palette(app.theme_attribute()), Palette::light());

        app.set_theme(Theme::Olive);
        assert_eq!(palette(app.theme_attribute()), Palette::olive());

        app.set_theme(Theme::Dark);
        assert_eq!(palette(app.theme_attribute()), Palette::dark());
    }
}
