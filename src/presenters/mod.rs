pub mod file;
pub mod panel;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod terminal;
pub mod tween;
