//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod toast;
mod transition;
mod view_state;

pub use animation::AnimPhase;
pub(crate) use animation::EffectTimer;
pub use toast::Toast;
pub use transition::{PagerTransition, SlideDirection};
pub use view_state::{ControlKind, HitRegion, UiOptions};
