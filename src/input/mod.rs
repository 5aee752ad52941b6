//! Input adapters for the construction viewer.
//!
//! Adapters receive events from a host (window, keyboard, timers) and turn
//! them into playback controller calls.

#[cfg(feature = "gui")]
pub mod gui;
