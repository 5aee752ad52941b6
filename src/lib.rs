pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;

pub use crate::config::AppConfig;
pub use crate::controllers::cli::{ExportController, ExportError};
pub use crate::controllers::playback::{DeadlineTimer, PlaybackController, PlaybackKey};
pub use crate::core::actions::generate_construction::generate_construction;
pub use crate::core::data::interval::Interval;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::terminal::presenter::TerminalPresenter;
pub use crate::presenters::terminal::stats_table::statistics_table;
