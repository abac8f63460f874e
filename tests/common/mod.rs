//! Shared fixtures for integration tests.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use onboard_config::{OnboardConfig, SkipBehavior};
use onboard_engine::{App, FlowCallbacks, PageChange, SkipOutcome};
use tempfile::TempDir;

/// A config file written into its own temporary directory.
pub struct ConfigFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFixture {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn load(&self) -> OnboardConfig {
        OnboardConfig::load_from(&self.path).unwrap().unwrap()
    }
}

/// Observations made by host callbacks during a run.
#[derive(Default, Clone)]
pub struct HostLog {
    pub skips: Rc<Cell<usize>>,
    pub completions: Rc<Cell<usize>>,
    pub changes: Rc<RefCell<Vec<PageChange>>>,
}

/// Build the screen the way the binary does, from a loaded config.
pub fn app_from_config(config: &OnboardConfig) -> (App, HostLog) {
    let log = HostLog::default();
    let outcome = match config.skip_behavior() {
        SkipBehavior::LastPage => SkipOutcome::JumpToLast,
        SkipBehavior::Finish => SkipOutcome::Finish,
        SkipBehavior::Ignore => SkipOutcome::Stay,
    };

    let skips = Rc::clone(&log.skips);
    let completions = Rc::clone(&log.completions);
    let callbacks = FlowCallbacks::new()
        .on_skip(move |_| {
            skips.set(skips.get() + 1);
            outcome
        })
        .on_complete(move || completions.set(completions.get() + 1));

    let deck = config.deck().unwrap();
    let mut app = App::with_deck(deck, callbacks, config.ui_options()).unwrap();
    let changes = Rc::clone(&log.changes);
    app.subscribe(move |change| changes.borrow_mut().push(change));
    (app, log)
}
