//! TUI rendering for SafeGuard using ratatui.

mod input;
mod screens;
mod theme;
mod views;

pub use input::{InputPump, apply_event, handle_events, handle_key};
pub use screens::{Focus, IntakeError, IntakeField, IntakeForm, LoginForm, Screens};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use safeguard_engine::{App, Stage, Theme};

const CONTENT_MAX_WIDTH: u16 = 84;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, screens: &Screens) {
    let palette = palette(app.theme_attribute());
    let glyphs = glyphs(app.ui_options());

    frame.render_widget(Block::default().style(styles::base(&palette)), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Length(2), // Step header
            Constraint::Min(1),    // Stage content
            Constraint::Length(1), // Notice / key hints
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_nav(frame, app, screens, chunks[0], &palette, &glyphs);
    draw_step_header(frame, app.stage(), chunks[1], &palette);

    let content = views::centered(chunks[2], CONTENT_MAX_WIDTH);
    match app.stage() {
        Stage::Intro => views::draw_intro(frame, content, &palette, &glyphs),
        Stage::Login => views::draw_login(frame, content, screens, &palette),
        Stage::Form => views::draw_form(frame, content, screens, &palette, &glyphs),
        Stage::Success => views::draw_success(frame, content, app, screens, &palette, &glyphs),
    }

    draw_status_line(frame, app, screens, chunks[3], &palette);
    draw_footer(frame, chunks[4], &palette, &glyphs);
}

fn draw_nav(
    frame: &mut Frame,
    app: &App,
    screens: &Screens,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border(palette, false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(22),
            Constraint::Length(28),
            Constraint::Length(34),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(views::brand_line(palette, glyphs)),
        columns[0],
    );

    let searching = screens.focus == Focus::Search;
    let query = screens.search.text();
    let search = if query.is_empty() && !searching {
        Span::styled("Track Case ID (Ctrl-F)", styles::muted(palette))
    } else {
        Span::raw(query.to_string())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.search),
                styles::border(palette, searching),
            ),
            search,
        ])),
        columns[1],
    );
    if searching {
        let before_cursor = screens.search.before_cursor();
        let offset = (glyphs.search.width() + 1 + before_cursor.width()) as u16;
        let x = columns[1].x + offset.min(columns[1].width.saturating_sub(1));
        frame.set_cursor_position((x, columns[1].y));
    }

    let mut tabs = Vec::new();
    for (key, theme) in ["F2", "F3", "F4"].into_iter().zip(Theme::ALL) {
        let style = if theme == app.theme() {
            styles::button(palette)
        } else {
            styles::muted(palette)
        };
        tabs.push(Span::styled(format!(" {key} {} ", theme.label()), style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), columns[2]);
}

fn draw_step_header(frame: &mut Frame, stage: Stage, area: Rect, palette: &Palette) {
    let mut spans = Vec::new();
    for (index, step) in Stage::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  >  ", styles::muted(palette)));
        }
        let style = match step.step().cmp(&stage.step()) {
            std::cmp::Ordering::Less => Style::default().fg(palette.success),
            std::cmp::Ordering::Equal => styles::accent_bold(palette),
            std::cmp::Ordering::Greater => styles::muted(palette),
        };
        spans.push(Span::styled(format!("{}. {}", step.step(), step.title()), style));
    }
    let area = views::centered(area, CONTENT_MAX_WIDTH);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_line(
    frame: &mut Frame,
    app: &App,
    screens: &Screens,
    area: Rect,
    palette: &Palette,
) {
    let line = if let Some(notice) = app.current_notice() {
        Line::from(Span::styled(
            notice.text().to_string(),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = match (screens.focus, app.stage()) {
            (Focus::Search, _) => "Enter search  Esc back",
            (_, Stage::Intro) => "Enter start  Ctrl-F track  Ctrl-R home  Ctrl-Q quit",
            (_, Stage::Login) => "Enter continue  Ctrl-R home  Ctrl-Q quit",
            (_, Stage::Form) => "Tab next  Shift-Tab back  Left/Right scam type  Ctrl-S submit",
            (_, Stage::Success) => "Enter new report  Up/Down scroll  Ctrl-F track  Ctrl-Q quit",
        };
        Line::from(Span::styled(hints, styles::muted(palette)))
    };
    frame.render_widget(
        Paragraph::new(line),
        views::centered(area, CONTENT_MAX_WIDTH),
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.lock),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                "256-bit SSL Secure  |  Official Reporting Portal",
                styles::muted(palette),
            ),
        ]),
        Line::from(Span::styled(
            "Documentation and preliminary assessment only. We never charge recovery fees.",
            styles::muted(palette),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default()),
        views::centered(area, CONTENT_MAX_WIDTH),
    );
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use safeguard_engine::{Amount, App, AppOptions, ReportDetails, StageAccess, Theme, UiOptions};

    use super::{Screens, draw};

    fn render(app: &App, screens: &Screens) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| draw(frame, app, screens))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn submitted_app(now: Instant) -> App {
        let mut app = App::default();
        if let StageAccess::Intro(intro) = app.stage_mut() {
            intro.proceed();
        }
        if let StageAccess::Login(login) = app.stage_mut() {
            login.continue_with("a@b.com");
        }
        if let StageAccess::Form(form) = app.stage_mut() {
            form.submit_at(ReportDetails::with_amount(Amount::new(500)), now);
        }
        app
    }

    #[test]
    fn intro_shows_brand_steps_and_footer() {
        let app = App::default();
        let screen = render(&app, &Screens::new());
        assert!(screen.contains("FINANCIAL"));
        assert!(screen.contains("PROTECTION"));
        assert!(screen.contains("1. "));
        assert!(screen.contains("Start a report"));
        assert!(screen.contains("Official Reporting Portal"));
        assert!(screen.contains("Track Case ID"));
    }

    #[test]
    fn success_shows_case_reference_and_timeline() {
        let now = Instant::now();
        let mut app = submitted_app(now);
        let mut screens = Screens::new();
        screens.sync(&mut app);

        let screen = render(&app, &screens);
        assert!(screen.contains("FP-000001"));
        assert!(screen.contains("a@b.com"));
        assert!(screen.contains("500"));
        assert!(screen.contains("Report received"));
        assert!(screen.contains("Next update in"));

        app.tick_at(now + Duration::from_secs(9));
        let screen = render(&app, &screens);
        assert!(screen.contains("Under Review"));
    }

    #[test]
    fn ascii_mode_uses_plain_glyphs() {
        let app = App::new(AppOptions {
            ui_options: UiOptions { ascii_only: true },
            ..AppOptions::default()
        });
        let screen = render(&app, &Screens::new());
        assert!(screen.contains("[#]"));
        assert!(!screen.contains('⛨'));
    }

    #[test]
    fn theme_switch_changes_background() {
        let mut app = App::default();
        let screens = Screens::new();
        let light = render_buffer(&app, &screens);
        app.set_theme(Theme::Dark);
        let dark = render_buffer(&app, &screens);
        assert_ne!(light[(0, 0)].bg, dark[(0, 0)].bg);
    }

    fn render_buffer(app: &App, screens: &Screens) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal
            .draw(|frame| draw(frame, app, screens))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn search_notice_replaces_key_hints() {
        let mut app = App::default();
        app.submit_search("FP-000009");
        let screen = render(&app, &Screens::new());
        assert!(screen.contains("please submit a case first"));
    }
}
