pub mod export;

pub use export::{ExportController, ExportError};
