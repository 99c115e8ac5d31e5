//! Input handling for the Safeguard TUI.
//!
//! Key events are routed to the search box when it has focus, otherwise to
//! the component of the current stage. Only the active stage's component can
//! raise its completion callback.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use safeguard_engine::{App, LineInput, Stage, StageAccess, Theme};

use crate::screens::{Focus, IntakeField, Screens};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking thread and queues them for the
/// render loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input without blocking. Returns `true` when the user asked
/// to quit.
pub fn handle_events(app: &mut App, screens: &mut Screens, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, screens, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// Apply one terminal event. Returns `true` on quit.
pub fn apply_event(app: &mut App, screens: &mut Screens, ev: Event) -> bool {
    let quit = match ev {
        Event::Key(key) => handle_key(app, screens, key),
        Event::Paste(text) => {
            handle_paste(app, screens, &text);
            false
        }
        _ => false,
    };
    screens.sync(app);
    quit
}

fn handle_paste(app: &App, screens: &mut Screens, text: &str) {
    if let Some(field) = focused_field(app.stage(), screens) {
        field.insert_str(text);
    }
}

/// The text buffer keystrokes currently edit, if any.
fn focused_field(stage: Stage, screens: &mut Screens) -> Option<&mut LineInput> {
    if screens.focus == Focus::Search {
        return Some(&mut screens.search);
    }
    match stage {
        Stage::Login => Some(&mut screens.login.contact),
        Stage::Form => {
            let field = screens.intake.focused;
            screens.intake.input_mut(field)
        }
        Stage::Intro | Stage::Success => None,
    }
}

/// Returns `true` when the key was consumed as a text edit.
fn edit_field(input: &mut LineInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

/// Route one key press. Returns `true` on quit.
pub fn handle_key(app: &mut App, screens: &mut Screens, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => return true,
        KeyCode::Char('r') if ctrl => {
            screens.focus = Focus::Content;
            app.reset();
            return false;
        }
        KeyCode::Char('f') if ctrl => {
            screens.focus = Focus::Search;
            return false;
        }
        KeyCode::F(2) => {
            app.set_theme(Theme::Light);
            return false;
        }
        KeyCode::F(3) => {
            app.set_theme(Theme::Dark);
            return false;
        }
        KeyCode::F(4) => {
            app.set_theme(Theme::Olive);
            return false;
        }
        _ => {}
    }

    if screens.focus == Focus::Search {
        handle_search_key(app, screens, key);
        return false;
    }

    match app.stage() {
        Stage::Intro => handle_intro_key(app, key),
        Stage::Login => handle_login_key(app, screens, key),
        Stage::Form => handle_form_key(app, screens, key),
        Stage::Success => handle_success_key(app, screens, key),
    }
    false
}

fn handle_search_key(app: &mut App, screens: &mut Screens, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => screens.focus = Focus::Content,
        KeyCode::Enter => {
            let query = screens.search.take();
            app.submit_search(&query);
            screens.focus = Focus::Content;
        }
        _ => {
            edit_field(&mut screens.search, key);
        }
    }
}

fn handle_intro_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let StageAccess::Intro(intro) = app.stage_mut() {
                intro.proceed();
            }
        }
        KeyCode::Esc => app.dismiss_notice(),
        _ => {}
    }
}

fn handle_login_key(app: &mut App, screens: &mut Screens, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => screens.login.submit(app),
        KeyCode::Esc => app.dismiss_notice(),
        _ => {
            if edit_field(&mut screens.login.contact, key) {
                screens.login.error = None;
            }
        }
    }
}

fn handle_form_key(app: &mut App, screens: &mut Screens, key: KeyEvent) {
    let form = &mut screens.intake;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => form.submit(app),
        KeyCode::Enter if form.focused.is_last() => form.submit(app),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Esc => app.dismiss_notice(),
        KeyCode::Left if form.focused == IntakeField::ScamType => form.cycle_scam_type(-1),
        KeyCode::Right | KeyCode::Char(' ') if form.focused == IntakeField::ScamType => {
            form.cycle_scam_type(1);
        }
        _ => {
            let field = form.focused;
            let edited = form
                .input_mut(field)
                .is_some_and(|input| edit_field(input, key));
            if edited && form.error.as_ref().is_some_and(|err| err.field() == field) {
                form.error = None;
            }
        }
    }
}

fn handle_success_key(app: &mut App, screens: &mut Screens, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => {
            if let StageAccess::Success(success) = app.stage_mut() {
                success.reset();
            }
        }
        KeyCode::Up => screens.scroll = screens.scroll.saturating_sub(1),
        KeyCode::Down => screens.scroll = screens.scroll.saturating_add(1),
        KeyCode::Esc => app.dismiss_notice(),
        _ => {}
    }
}
