//! Pointer gestures: horizontal drags become swipes, short presses become taps.

use onboard_types::ui::{ControlKind, HitRegion};

/// Minimum horizontal travel, in cells, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moves right to left: reveal the next page.
    Forward,
    /// Finger moves left to right: reveal the previous page.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    Tap(ControlKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointerDown {
    column: u16,
    row: u16,
}

#[derive(Debug, Default)]
pub(crate) struct GestureTracker {
    down: Option<PointerDown>,
}

impl GestureTracker {
    pub(crate) fn press(&mut self, column: u16, row: u16) {
        self.down = Some(PointerDown { column, row });
    }

    pub(crate) fn cancel(&mut self) {
        self.down = None;
    }

    /// Resolve the gesture on release.
    ///
    /// A tap only lands if press and release are both inside the same control.
    pub(crate) fn release(&mut self, column: u16, row: u16, regions: &[HitRegion]) -> Option<Gesture> {
        let down = self.down.take()?;
        let dx = i32::from(column) - i32::from(down.column);
        if dx.unsigned_abs() >= u32::from(SWIPE_THRESHOLD) {
            let direction = if dx < 0 {
                SwipeDirection::Forward
            } else {
                SwipeDirection::Backward
            };
            return Some(Gesture::Swipe(direction));
        }

        regions
            .iter()
            .find(|region| region.contains(down.column, down.row) && region.contains(column, row))
            .map(|region| Gesture::Tap(region.control))
    }
}
