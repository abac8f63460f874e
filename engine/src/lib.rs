//! Screen controller for Onboard.
//!
//! [`App`] owns everything the onboarding screen needs: the page deck, the
//! [`PageStateHolder`] handed in by the host, the host callbacks, and the
//! transient animation state. It contains no terminal code; the TUI crate
//! reads from it to draw and feeds user input back through [`App::dispatch`].
//!
//! Every navigation path (keyboard, tap, swipe, skip) writes through the state
//! holder. The pager is a pure reflection of the holder's index: `App` learns
//! about changes only through its own subscription, the same way any other
//! observer does.

mod gesture;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use thiserror::Error;

pub use gesture::{Gesture, SWIPE_THRESHOLD, SwipeDirection};
pub use onboard_types::{
    ImageRef, IndicatorMarker, OnboardPage, PageChange, PageDeck, PageStateHolder, PagerState,
    StateError, SubscriptionId,
    ui::{AnimPhase, ControlKind, HitRegion, SlideDirection, Toast, UiOptions},
};

use gesture::GestureTracker;
use onboard_types::{PageIndicator, ui::PagerTransition};

/// Duration of the horizontal slide between pages.
pub const PAGE_SLIDE_DURATION: Duration = Duration::from_millis(250);
/// Duration of the indicator width interpolation.
pub const INDICATOR_DURATION: Duration = Duration::from_millis(200);
/// Acknowledgement shown when the user finishes the flow.
pub const COMPLETION_MESSAGE: &str = "Start the Screen";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("state holder tracks {holder} pages but the deck has {deck}")]
    PageCountMismatch { holder: usize, deck: usize },
}

/// Everything the user can ask the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Tap on "Next".
    Next,
    Swipe(SwipeDirection),
    /// Tap on "Skip".
    Skip,
    /// Tap on "Get Started".
    GetStarted,
    /// The primary control for the current page: "Next" or "Get Started".
    Activate,
    /// Leave without completing.
    Quit,
}

/// What the host wants after a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipOutcome {
    Stay,
    JumpToLast,
    /// Same as tapping "Get Started".
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRequest {
    pub from: usize,
    pub page_count: usize,
}

type SkipHook = Box<dyn FnMut(SkipRequest) -> SkipOutcome>;
type CompleteHook = Box<dyn FnMut()>;

/// Host-supplied hooks for the two exits the screen cannot decide on its own.
#[derive(Default)]
pub struct FlowCallbacks {
    on_skip: Option<SkipHook>,
    on_complete: Option<CompleteHook>,
}

impl FlowCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_skip(mut self, hook: impl FnMut(SkipRequest) -> SkipOutcome + 'static) -> Self {
        self.on_skip = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_complete(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for FlowCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowCallbacks")
            .field("on_skip", &self.on_skip.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    Active,
    /// "Get Started" was activated (or a skip finished the flow).
    Finished,
    Aborted,
}

/// Which controls the bottom row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControls {
    SkipAndNext,
    GetStarted,
}

impl NavControls {
    #[must_use]
    pub fn controls(self) -> &'static [ControlKind] {
        match self {
            NavControls::SkipAndNext => &[ControlKind::Skip, ControlKind::Next],
            NavControls::GetStarted => &[ControlKind::GetStarted],
        }
    }
}

/// What the pager should show this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerView {
    Settled {
        page: usize,
    },
    Sliding {
        from: usize,
        to: usize,
        direction: SlideDirection,
        /// `[0.0, 1.0)`; how far the incoming page has travelled.
        progress: f32,
    },
}

/// Rendering-side state: timers and geometry, never the page index itself.
#[derive(Debug)]
struct ViewState {
    options: UiOptions,
    transition: Option<PagerTransition>,
    indicator: PageIndicator,
    toast: Option<Toast>,
    /// Control geometry from the last frame, for pointer taps.
    hit_regions: Vec<HitRegion>,
    /// Timestamp of last frame (for animation timing).
    last_frame: Instant,
}

pub struct App {
    deck: PageDeck,
    state: PageStateHolder,
    subscription: SubscriptionId,
    /// Changes observed through `subscription`, not yet reflected in the view.
    pending: Rc<RefCell<VecDeque<PageChange>>>,
    callbacks: FlowCallbacks,
    view: ViewState,
    gestures: GestureTracker,
    status: FlowStatus,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("status", &self.status)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build the screen around a caller-owned state holder.
    ///
    /// The holder must track exactly as many pages as the deck contains.
    pub fn new(
        deck: PageDeck,
        mut state: PageStateHolder,
        callbacks: FlowCallbacks,
        options: UiOptions,
    ) -> Result<Self, AppError> {
        if state.page_count() != deck.len() {
            return Err(AppError::PageCountMismatch {
                holder: state.page_count(),
                deck: deck.len(),
            });
        }

        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending);
        let subscription = state.subscribe(move |change| sink.borrow_mut().push_back(change));

        let indicator = PageIndicator::new(deck.len(), state.current_index());
        tracing::debug!(pages = deck.len(), start = state.current_index(), "Onboarding screen created");

        Ok(Self {
            deck,
            state,
            subscription,
            pending,
            callbacks,
            view: ViewState {
                options,
                transition: None,
                indicator,
                toast: None,
                hit_regions: Vec::new(),
                last_frame: Instant::now(),
            },
            gestures: GestureTracker::default(),
            status: FlowStatus::Active,
        })
    }

    /// Convenience constructor: fresh holder on page 0, sized to the deck.
    pub fn with_deck(
        deck: PageDeck,
        callbacks: FlowCallbacks,
        options: UiOptions,
    ) -> Result<Self, AppError> {
        let state = PageStateHolder::new(deck.len());
        Self::new(deck, state, callbacks, options)
    }

    /// Tear down the screen and hand the holder back, minus our observer.
    #[must_use]
    pub fn into_state(mut self) -> PageStateHolder {
        self.state.unsubscribe(self.subscription);
        self.state
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    #[must_use]
    pub fn deck(&self) -> &PageDeck {
        &self.deck
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn current_page(&self) -> &OnboardPage {
        // The holder index is always < deck.len(); checked in `new`.
        self.deck.clamped(self.state.current_index())
    }

    #[must_use]
    pub fn page_at(&self, index: usize) -> Option<&OnboardPage> {
        self.deck.get(index)
    }

    #[must_use]
    pub fn pager_state(&self) -> PagerState {
        self.state.snapshot()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.options
    }

    #[must_use]
    pub fn status(&self) -> FlowStatus {
        self.status
    }

    #[must_use]
    pub fn nav_controls(&self) -> NavControls {
        if self.state.is_last() {
            NavControls::GetStarted
        } else {
            NavControls::SkipAndNext
        }
    }

    #[must_use]
    pub fn indicator(&self) -> Vec<IndicatorMarker> {
        self.view.indicator.markers()
    }

    #[must_use]
    pub fn pager_view(&self) -> PagerView {
        match &self.view.transition {
            Some(transition) => match transition.phase() {
                AnimPhase::Running { progress } => PagerView::Sliding {
                    from: transition.from(),
                    to: transition.to(),
                    direction: transition.direction(),
                    progress,
                },
                AnimPhase::Completed => PagerView::Settled {
                    page: self.state.current_index(),
                },
            },
            None => PagerView::Settled {
                page: self.state.current_index(),
            },
        }
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.view.toast.as_ref()
    }

    /// True once the host should tear the screen down.
    ///
    /// A finished flow stays up until its acknowledgement toast expires.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        match self.status {
            FlowStatus::Active => false,
            FlowStatus::Aborted => true,
            FlowStatus::Finished => self.view.toast.is_none(),
        }
    }

    /// Register an additional observer on the owned state holder.
    pub fn subscribe(&mut self, observer: impl FnMut(PageChange) + 'static) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if id == self.subscription {
            return false;
        }
        self.state.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Write side
    // ------------------------------------------------------------------

    /// Apply one user action. Returns true if the page index changed.
    pub fn dispatch(&mut self, action: UserAction) -> bool {
        if self.status != FlowStatus::Active {
            tracing::debug!(?action, status = ?self.status, "Ignoring action after flow ended");
            return false;
        }

        let changed = match action {
            UserAction::Next => self.next(),
            UserAction::Swipe(SwipeDirection::Forward) => self.state.advance().is_some(),
            UserAction::Swipe(SwipeDirection::Backward) => self.state.retreat().is_some(),
            UserAction::Skip => self.skip(),
            UserAction::GetStarted => {
                self.get_started();
                false
            }
            UserAction::Activate => {
                if self.state.is_last() {
                    self.get_started();
                    false
                } else {
                    self.next()
                }
            }
            UserAction::Quit => {
                tracing::info!(page = self.state.current_index(), "Onboarding aborted");
                self.status = FlowStatus::Aborted;
                false
            }
        };

        self.apply_pending_changes();
        changed
    }

    /// Jump directly to a page, e.g. from a host deep link.
    pub fn go_to(&mut self, index: i64) -> Result<bool, StateError> {
        let changed = self.state.set_current_index(index)?.is_some();
        self.apply_pending_changes();
        Ok(changed)
    }

    fn next(&mut self) -> bool {
        if self.state.is_last() {
            tracing::debug!("Next ignored on last page");
            return false;
        }
        let target = self.state.current_index() + 1;
        match i64::try_from(target).map(|target| self.state.set_current_index(target)) {
            Ok(Ok(change)) => change.is_some(),
            Ok(Err(err)) => {
                tracing::warn!("Next rejected: {err}");
                false
            }
            Err(_) => false,
        }
    }

    fn skip(&mut self) -> bool {
        if self.state.is_last() {
            tracing::debug!("Skip ignored on last page");
            return false;
        }
        let request = SkipRequest {
            from: self.state.current_index(),
            page_count: self.state.page_count(),
        };
        let Some(hook) = self.callbacks.on_skip.as_mut() else {
            tracing::debug!("Skip tapped with no handler installed");
            return false;
        };

        let outcome = hook(request);
        tracing::info!(from = request.from, ?outcome, "Skip");
        match outcome {
            SkipOutcome::Stay => false,
            SkipOutcome::JumpToLast => {
                let last = self.deck.last_index();
                i64::try_from(last)
                    .ok()
                    .and_then(|last| self.state.set_current_index(last).ok())
                    .flatten()
                    .is_some()
            }
            SkipOutcome::Finish => {
                self.finish();
                false
            }
        }
    }

    fn get_started(&mut self) {
        if !self.state.is_last() {
            tracing::debug!("Get Started ignored before last page");
            return;
        }
        self.finish();
    }

    fn finish(&mut self) {
        tracing::info!(page = self.state.current_index(), "Onboarding completed");
        self.status = FlowStatus::Finished;
        if let Some(hook) = self.callbacks.on_complete.as_mut() {
            hook();
        }
        self.view.toast = Some(Toast::new(COMPLETION_MESSAGE, Toast::DEFAULT_LIFETIME));
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, column: u16, row: u16) {
        self.gestures.press(column, row);
    }

    /// Resolve a press/release pair and dispatch the resulting action.
    pub fn pointer_up(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let gesture = self
            .gestures
            .release(column, row, &self.view.hit_regions)?;
        let action = match gesture {
            Gesture::Swipe(direction) => UserAction::Swipe(direction),
            Gesture::Tap(ControlKind::Skip) => UserAction::Skip,
            Gesture::Tap(ControlKind::Next) => UserAction::Next,
            Gesture::Tap(ControlKind::GetStarted) => UserAction::GetStarted,
        };
        self.dispatch(action);
        Some(gesture)
    }

    pub fn pointer_cancel(&mut self) {
        self.gestures.cancel();
    }

    /// Record where the controls were drawn this frame.
    pub fn set_hit_regions(&mut self, regions: Vec<HitRegion>) {
        self.view.hit_regions = regions;
    }

    #[must_use]
    pub fn hit_regions(&self) -> &[HitRegion] {
        &self.view.hit_regions
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    /// Advance animations by wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(delta);
    }

    /// Advance animations by an explicit amount.
    pub fn advance(&mut self, delta: Duration) {
        self.apply_pending_changes();

        if let Some(transition) = self.view.transition.as_mut() {
            transition.advance(delta);
            if transition.phase() == AnimPhase::Completed {
                self.view.transition = None;
            }
        }
        self.view.indicator.advance(delta);

        if let Some(toast) = self.view.toast.as_mut() {
            toast.advance(delta);
            if toast.is_expired() {
                self.view.toast = None;
            }
        }
    }

    fn motion(&self, duration: Duration) -> Duration {
        if self.view.options.reduced_motion {
            Duration::ZERO
        } else {
            duration
        }
    }

    fn apply_pending_changes(&mut self) {
        let changes: Vec<PageChange> = self.pending.borrow_mut().drain(..).collect();
        for change in changes {
            tracing::debug!(from = change.previous, to = change.current, "Page changed");
            let slide = self.motion(PAGE_SLIDE_DURATION);
            self.view.transition = if slide.is_zero() {
                None
            } else {
                Some(match &self.view.transition {
                    Some(running) => running.retarget(change, slide),
                    None => PagerTransition::new(change, slide),
                })
            };
            let indicator = self.motion(INDICATOR_DURATION);
            self.view.indicator.select(change.current, indicator);
        }
    }
}
