//! Port definitions for the playback controller.
//!
//! The controller never touches a window, a terminal or a clock directly; it
//! talks to them through these traits.

pub mod presenter;
pub mod timer;

pub use presenter::PlaybackPresenterPort;
pub use timer::TimerPort;
