//! Rendering options and the geometry the view reports back for mouse input.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable slide and indicator animations.
    pub reduced_motion: bool,
}

/// The tappable controls of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Skip,
    Next,
    GetStarted,
}

/// Screen cells occupied by a control in the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub control: ControlKind,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRegion {
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlKind, HitRegion};

    #[test]
    fn hit_region_bounds_are_half_open() {
        let region = HitRegion {
            control: ControlKind::Next,
            x: 10,
            y: 5,
            width: 4,
            height: 1,
        };
        assert!(region.contains(10, 5));
        assert!(region.contains(13, 5));
        assert!(!region.contains(14, 5));
        assert!(!region.contains(10, 6));
        assert!(!region.contains(9, 5));
    }
}
