//! One render function per wizard stage.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use safeguard_engine::{App, LineInput, ScamCase, TrackingStatus};

use crate::screens::{IntakeField, Screens};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw_intro(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {} ", glyphs.bullet),
                styles::accent_bold(palette),
            ),
            Span::raw(text),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "Lost money to a scam? Report it in three steps.",
            Style::default()
                .fg(palette.text_main)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Acting within the first hours gives your bank the best chance to freeze the funds.",
            styles::muted(palette),
        )),
        Line::from(""),
        Line::from("Have these ready:"),
        bullet("An email address or phone number we can reach you on"),
        bullet("The amount lost and the date it happened"),
        bullet("Transaction references, screenshots or the scammer's numbers"),
        Line::from(""),
        Line::from(Span::styled(
            "We never charge recovery fees and will never ask for your OTP or PIN.",
            Style::default().fg(palette.warning),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter  ", styles::button(palette)),
            Span::raw("  Start a report"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card(palette, " Report a Financial Scam ")),
        area,
    );
}

pub(crate) fn draw_login(frame: &mut Frame, area: Rect, screens: &Screens, palette: &Palette) {
    let outer = card(palette, " Your Contact Details ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // explanation
            Constraint::Length(3), // field
            Constraint::Length(1), // error
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("How can a case officer reach you?"),
            Line::from(Span::styled(
                "This is only used to contact you about this report. No password needed.",
                styles::muted(palette),
            )),
        ])
        .wrap(Wrap { trim: false }),
        rows[0],
    );

    draw_text_field(
        frame,
        rows[1],
        palette,
        "Email or phone",
        &screens.login.contact,
        "name@example.com or +91 ...",
        true,
    );

    if let Some(error) = &screens.login.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), styles::error(palette))),
            rows[2],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  Enter  ", styles::button(palette)),
            Span::raw("  Continue"),
        ])),
        rows[3],
    );
}

pub(crate) fn draw_form(
    frame: &mut Frame,
    area: Rect,
    screens: &Screens,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let form = &screens.intake;
    let outer = card(palette, " Incident Report ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = IntakeField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(1)); // error
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in IntakeField::ALL.into_iter().zip(rows.iter()) {
        let focused = form.focused == field;
        match form.input(field) {
            Some(input) => draw_text_field(
                frame,
                *row,
                palette,
                field.label(),
                input,
                field.placeholder(),
                focused,
            ),
            None => {
                let selector = Line::from(vec![
                    Span::styled(glyphs.selector_left, styles::muted(palette)),
                    Span::raw(" "),
                    Span::styled(
                        form.scam_type.label(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(glyphs.selector_right, styles::muted(palette)),
                ]);
                frame.render_widget(
                    Paragraph::new(selector).block(field_block(palette, field.label(), focused)),
                    *row,
                );
            }
        }
    }

    let error_row = rows[IntakeField::ALL.len()];
    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{}: {error}", error.field().label()),
                styles::error(palette),
            )),
            error_row,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  Ctrl-S  ", styles::button(palette)),
            Span::raw("  Submit report"),
        ])),
        rows[IntakeField::ALL.len() + 1],
    );
}

pub(crate) fn draw_success(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    screens: &Screens,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(case) = app.active_case() else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.done),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                "Report received",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(case_summary(case, palette));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Tracking", styles::accent_bold(palette))));
    lines.extend(status_timeline(case.tracking_status(), palette, glyphs));

    if let Some(due) = app.progression().due_at() {
        let remaining = due.saturating_duration_since(Instant::now());
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Next update in {secs}s"),
            styles::muted(palette),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Enter  ", styles::button(palette)),
        Span::raw("  File another report"),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((screens.scroll, 0))
            .block(card(palette, " Report Received ")),
        area,
    );
}

fn case_summary(case: &ScamCase, palette: &Palette) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), styles::muted(palette)),
            Span::raw(value),
        ])
    };
    let report = case.report();
    let mut lines = vec![
        row("Case reference", case.id().to_string()),
        row(
            "Submitted",
            case.submitted_at().format("%d %b %Y, %H:%M").to_string(),
        ),
        row("Contact", case.contact_info().to_string()),
        row("Scam type", report.scam_type.label().to_string()),
        row("Amount lost", report.amount.to_string()),
    ];
    if !report.incident_date.is_empty() {
        lines.push(row("Date", report.incident_date.clone()));
    }
    if !report.evidence.is_empty() {
        lines.push(row("Evidence", report.evidence.join(", ")));
    }
    lines
}

fn status_timeline(
    current: TrackingStatus,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for status in TrackingStatus::ALL {
        let (glyph, style) = match status.cmp(&current) {
            std::cmp::Ordering::Less => (glyphs.done, Style::default().fg(palette.success)),
            std::cmp::Ordering::Equal => (glyphs.current, styles::accent_bold(palette)),
            std::cmp::Ordering::Greater => (glyphs.pending, styles::muted(palette)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {glyph} "), style),
            Span::styled(status.label(), style),
        ]));
        if status == current {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", glyphs.rail), styles::muted(palette)),
                Span::styled(status.description(), styles::muted(palette)),
            ]));
        }
    }
    lines
}

fn card<'a>(palette: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette, false))
        .style(styles::card(palette))
        .title(Span::styled(title, styles::accent_bold(palette)))
}

fn field_block<'a>(palette: &Palette, label: &'a str, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette, focused))
        .title(format!(" {label} "))
}

fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    label: &str,
    input: &LineInput,
    placeholder: &str,
    focused: bool,
) {
    let content = if input.text().is_empty() {
        Span::styled(placeholder.to_string(), styles::muted(palette))
    } else {
        Span::raw(input.text().to_string())
    };
    let block = field_block(palette, label, focused);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let before_cursor = input.before_cursor();
        let offset = (before_cursor.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

/// Centered column of at most `max_width` cells.
pub(crate) fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect { x, width, ..area }
}

pub(crate) fn brand_line(palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", glyphs.brand), styles::button(palette)),
        Span::styled(
            " FINANCIAL ",
            Style::default()
                .fg(palette.text_main)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("PROTECTION", styles::accent_bold(palette)),
    ])
    .alignment(Alignment::Left)
}
