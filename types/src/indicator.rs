//! Page indicator model.
//!
//! The indicator is derived from the pager state: one marker per page, the
//! current one wider and highlighted. The only thing it owns is the width
//! interpolation between the previously selected marker and the new one.

use std::time::Duration;

use crate::ui::EffectTimer;

/// Width in cells of the marker for the current page.
pub const MARKER_SELECTED_WIDTH: u16 = 4;
/// Width in cells of every other marker.
pub const MARKER_UNSELECTED_WIDTH: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorMarker {
    pub selected: bool,
    /// Current animated width in cells, between the unselected and selected widths.
    pub width: f32,
}

impl IndicatorMarker {
    /// Width rounded to whole cells for drawing.
    #[must_use]
    pub fn cells(&self) -> u16 {
        let rounded = self.width.round().clamp(
            f32::from(MARKER_UNSELECTED_WIDTH),
            f32::from(MARKER_SELECTED_WIDTH),
        );
        rounded as u16
    }
}

fn target_width(selected: bool) -> f32 {
    if selected {
        f32::from(MARKER_SELECTED_WIDTH)
    } else {
        f32::from(MARKER_UNSELECTED_WIDTH)
    }
}

/// Settled markers for `current` out of `page_count`.
#[must_use]
pub fn markers(page_count: usize, current: usize) -> Vec<IndicatorMarker> {
    (0..page_count)
        .map(|i| {
            let selected = i == current;
            IndicatorMarker {
                selected,
                width: target_width(selected),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct PageIndicator {
    /// Marker widths when the running animation started.
    start: Vec<f32>,
    to: usize,
    timer: EffectTimer,
}

impl PageIndicator {
    #[must_use]
    pub fn new(page_count: usize, current: usize) -> Self {
        Self {
            start: (0..page_count).map(|i| target_width(i == current)).collect(),
            to: current,
            timer: EffectTimer::new(Duration::ZERO),
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.to
    }

    /// Start animating the highlight towards `current`.
    ///
    /// A selection made mid-animation continues from the widths on screen.
    pub fn select(&mut self, current: usize, duration: Duration) {
        if current == self.to {
            return;
        }
        self.start = self.markers().iter().map(|marker| marker.width).collect();
        self.to = current;
        self.timer = EffectTimer::new(duration);
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timer.is_finished()
    }

    #[must_use]
    pub fn markers(&self) -> Vec<IndicatorMarker> {
        if self.timer.is_finished() {
            return markers(self.start.len(), self.to);
        }
        let t = self.timer.progress();
        self.start
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = target_width(i == self.to);
                IndicatorMarker {
                    selected: i == self.to,
                    width: start + (end - start) * t,
                }
            })
            .collect()
    }
}
