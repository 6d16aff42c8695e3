//! UI module - contains UI rendering components
//!
//! Widgets here take the active `Palette` explicitly and hold no state.

pub mod components;
