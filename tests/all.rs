//! Integration test aggregator
//!
//! Entry point for the end-to-end tests; modules live in `suite/`.

mod common;
mod suite;
