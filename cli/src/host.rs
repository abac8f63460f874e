//! Host-side decisions the screen delegates: what Skip means and what
//! happens once the flow completes.

use std::cell::Cell;
use std::rc::Rc;

use onboard_config::SkipBehavior;
use onboard_engine::{FlowCallbacks, SkipOutcome, SkipRequest};

/// Shared flag flipped by the completion hook, read after the loop ends.
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag(Rc<Cell<bool>>);

impl CompletionFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

pub fn skip_outcome(behavior: SkipBehavior) -> SkipOutcome {
    match behavior {
        SkipBehavior::LastPage => SkipOutcome::JumpToLast,
        SkipBehavior::Finish => SkipOutcome::Finish,
        SkipBehavior::Ignore => SkipOutcome::Stay,
    }
}

pub fn callbacks(behavior: SkipBehavior) -> (FlowCallbacks, CompletionFlag) {
    let flag = CompletionFlag::default();
    let done = Rc::clone(&flag.0);
    let callbacks = FlowCallbacks::new()
        .on_skip(move |request: SkipRequest| {
            tracing::debug!(
                from = request.from,
                behavior = behavior.as_str(),
                "Applying configured skip behavior"
            );
            skip_outcome(behavior)
        })
        .on_complete(move || done.set(true));
    (callbacks, flag)
}
