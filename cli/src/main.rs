//! Onboard CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`onboard_engine`] (screen state) and [`onboard_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> load config -> App::new(deck, holder, callbacks) -> TerminalSession -> run_app()
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`onboard_tui::InputPump`])
//! 3. Advance animations (`app.tick()`)
//! 4. Render frame
//! 5. Stop once the flow has finished or been aborted

mod host;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use onboard_config::OnboardConfig;
use onboard_engine::{App, COMPLETION_MESSAGE, FlowStatus, PageDeck, PageStateHolder};
use onboard_tui::{InputPump, draw, handle_events};

const ASCII_ENV_VAR: &str = "ONBOARD_ASCII";
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file (~/.onboard/logs/onboard.log)
    if let Some(config_path) = OnboardConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("onboard.log"));
    }

    // Fallback: ./.onboard/logs/onboard.log (useful in constrained environments)
    candidates.push(PathBuf::from(".onboard").join("logs").join("onboard.log"));

    candidates
}

fn ascii_forced_by_env() -> bool {
    env::var(ASCII_ENV_VAR).is_ok_and(|raw| {
        matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    })
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages the terminal lifecycle including:
/// - Raw mode (disables line buffering and echo)
/// - Alternate screen
/// - Mouse capture (taps and horizontal drags)
/// - Focus change reporting (cancels a drag when the window loses focus)
///
/// On drop, all terminal state is restored to its original configuration,
/// ensuring the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        ) {
            let _ = disable_raw_mode();
            let _ = execute!(
                out,
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(
                    stdout(),
                    DisableFocusChange,
                    DisableMouseCapture,
                    LeaveAlternateScreen
                );
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

fn build_app() -> Result<(App, host::CompletionFlag)> {
    let config = match OnboardConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            None
        }
    };

    let mut options = config
        .as_ref()
        .map(OnboardConfig::ui_options)
        .unwrap_or_default();
    if ascii_forced_by_env() {
        options.ascii_only = true;
    }

    // Validated in `load`; fall back to the built-in pages regardless.
    let deck = config
        .as_ref()
        .and_then(|cfg| cfg.deck().ok())
        .unwrap_or_else(PageDeck::builtin);
    let skip = config
        .as_ref()
        .map(OnboardConfig::skip_behavior)
        .unwrap_or_default();
    tracing::info!(pages = deck.len(), skip = skip.as_str(), "Starting onboarding");

    let (callbacks, completed) = host::callbacks(skip);
    let state = PageStateHolder::new(deck.len());
    let mut app = App::new(deck, state, callbacks, options)?;
    app.subscribe(|change| {
        tracing::info!(from = change.previous, to = change.current, "Page shown");
    });

    Ok((app, completed))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (mut app, completed) = build_app()?;

    let run_result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = run_result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    match app.status() {
        FlowStatus::Finished if completed.is_set() => println!("{COMPLETION_MESSAGE}"),
        status => tracing::info!(?status, "Onboarding screen closed"),
    }

    Ok(())
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let exit_now = match handle_events(app, &mut input) {
            Ok(exit) => exit,
            Err(e) => break Err(e),
        };

        if exit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }

        if app.should_exit() {
            break Ok(());
        }
    };

    input.shutdown().await;
    result
}
