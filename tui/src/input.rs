//! Input handling for the onboarding screen.
//!
//! A blocking thread polls crossterm and forwards events over a bounded
//! channel; the frame loop drains it without blocking.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use onboard_engine::{App, SwipeDirection, UserAction};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

enum InputMsg {
    Event(Event),
    Error(String),
}

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
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(SHUTDOWN_TIMEOUT, join).await;
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
        // Best-effort stop if caller exits early; do not block in Drop.
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

/// Map a key press to a screen action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<UserAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(UserAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
            Some(UserAction::Swipe(SwipeDirection::Forward))
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            Some(UserAction::Swipe(SwipeDirection::Backward))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(UserAction::Activate),
        KeyCode::Char('n') => Some(UserAction::Next),
        KeyCode::Char('g') => Some(UserAction::GetStarted),
        KeyCode::Char('s') | KeyCode::Esc => Some(UserAction::Skip),
        KeyCode::Char('q') => Some(UserAction::Quit),
        _ => None,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.pointer_down(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(gesture) = app.pointer_up(mouse.column, mouse.row) {
                debug!(?gesture, "Pointer gesture");
            }
        }
        MouseEventKind::ScrollRight => {
            app.dispatch(UserAction::Swipe(SwipeDirection::Forward));
        }
        MouseEventKind::ScrollLeft => {
            app.dispatch(UserAction::Swipe(SwipeDirection::Backward));
        }
        _ => {}
    }
}

/// Apply one terminal event to the app.
pub fn apply_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            if let Some(action) = action_for_key(key) {
                debug!(?action, "Key action");
                app.dispatch(action);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::FocusLost => app.pointer_cancel(),
        _ => {}
    }
}

/// Drain pending input. Returns true when the screen should close.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
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
        apply_event(app, ev);
        processed += 1;

        if app.should_exit() {
            break;
        }
    }

    Ok(app.should_exit())
}
