//! Pager slide geometry.

use onboard_engine::SlideDirection;

/// Horizontal offsets, in cells, of the outgoing and incoming pages.
///
/// Progress is linear: at `0.0` the outgoing page is in place, at `1.0` the
/// incoming page is.
#[must_use]
pub fn slide_offsets(width: u16, direction: SlideDirection, progress: f32) -> (i32, i32) {
    let width = i32::from(width);
    let travelled = (progress.clamp(0.0, 1.0) * width as f32).round() as i32;
    match direction {
        SlideDirection::Forward => (-travelled, width - travelled),
        SlideDirection::Backward => (travelled, travelled - width),
    }
}

#[cfg(test)]
mod tests {
    use super::slide_offsets;
    use onboard_engine::SlideDirection;

    #[test]
    fn forward_slide_moves_left() {
        assert_eq!(slide_offsets(80, SlideDirection::Forward, 0.0), (0, 80));
        assert_eq!(slide_offsets(80, SlideDirection::Forward, 0.25), (-20, 60));
        assert_eq!(slide_offsets(80, SlideDirection::Forward, 1.0), (-80, 0));
    }

    #[test]
    fn backward_slide_moves_right() {
        assert_eq!(slide_offsets(80, SlideDirection::Backward, 0.0), (0, -80));
        assert_eq!(slide_offsets(80, SlideDirection::Backward, 0.5), (40, -40));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(slide_offsets(10, SlideDirection::Forward, 7.0), (-10, 0));
        assert_eq!(slide_offsets(10, SlideDirection::Forward, -1.0), (0, 10));
    }
}
