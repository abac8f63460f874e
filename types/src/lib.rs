//! Core domain types for Onboard.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod indicator;
mod page;
mod sanitize;
mod state;
pub mod ui;

pub use indicator::{
    IndicatorMarker, MARKER_SELECTED_WIDTH, MARKER_UNSELECTED_WIDTH, PageIndicator, markers,
};
pub use page::{DeckError, ImageRef, OnboardPage, PageDeck};
pub use sanitize::sanitize_terminal_text;
pub use state::{PageChange, PageStateHolder, PagerState, StateError, SubscriptionId};
