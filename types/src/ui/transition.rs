//! Horizontal slide between two pages.
//!
//! The pager has no position of its own. A transition only remembers where
//! the state holder was before the last change so the view can slide from it.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::PageChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// New page enters from the right.
    Forward,
    /// New page enters from the left.
    Backward,
}

#[derive(Debug, Clone)]
pub struct PagerTransition {
    from: usize,
    to: usize,
    timer: EffectTimer,
}

impl PagerTransition {
    #[must_use]
    pub fn new(change: PageChange, duration: Duration) -> Self {
        Self {
            from: change.previous,
            to: change.current,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        if self.to >= self.from {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }

    /// Continue from wherever this transition currently shows towards a newer
    /// change, keeping the page that is visibly leaving.
    ///
    /// Reversing back onto the leaving page slides from the page that was
    /// entering, never from a page onto itself.
    #[must_use]
    pub fn retarget(&self, change: PageChange, duration: Duration) -> Self {
        let from = match self.phase() {
            AnimPhase::Running { progress } if progress < 0.5 && self.from != change.current => {
                self.from
            }
            _ => change.previous,
        };
        Self {
            from,
            to: change.current,
            timer: EffectTimer::new(duration),
        }
    }
}
