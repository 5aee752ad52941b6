//! Playback controller for the construction viewer.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: method calls from a host loop (buttons, sliders, keys, timer ticks)
//! - **Output**: `PlaybackPresenterPort` for charts, statistics and controls
//! - **Time**: `TimerPort` for the single pending animation tick
//! - **Core**: the precomputed `ConstructionHistory` and `PlaybackState`

mod controller;
pub mod data;
pub mod deadline_timer;
pub mod input;
pub mod ports;

pub use controller::PlaybackController;
pub use data::chart_data::{ChartData, ControlsView, StatTarget, format_stat};
pub use deadline_timer::DeadlineTimer;
pub use input::PlaybackKey;
pub use ports::{PlaybackPresenterPort, TimerPort};
