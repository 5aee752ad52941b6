use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_construction::rasterize_construction;
use crate::core::cantor::shapes::construction_shapes;
use crate::core::data::construction_history::ConstructionHistory;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

#[derive(Debug)]
pub enum ExportError {
    IterationOutOfRange { iteration: usize, max_iterations: usize },
    PixelBuffer(PixelBufferError),
    NothingRendered,
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationOutOfRange {
                iteration,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration {} is outside 1..={}",
                    iteration, max_iterations
                )
            }
            Self::PixelBuffer(err) => write!(f, "rasterization failed: {}", err),
            Self::NothingRendered => write!(f, "nothing has been rendered yet"),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelBufferError> for ExportError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders the construction view for one iteration and hands it to a file
/// presenter.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// `iteration` is 1-based, matching the iteration slider.
    pub fn generate(
        &mut self,
        history: &ConstructionHistory,
        iteration: usize,
        width: u32,
        height: u32,
    ) -> Result<&PixelBuffer, ExportError> {
        let max_iterations = history.depth();

        if iteration == 0 || iteration > max_iterations {
            return Err(ExportError::IterationOutOfRange {
                iteration,
                max_iterations,
            });
        }

        let start = Instant::now();
        let shapes = construction_shapes(history, iteration, max_iterations);
        let buffer = rasterize_construction(&shapes, max_iterations, width, height)?;

        info!(
            iteration,
            shapes = shapes.len(),
            width,
            height,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "construction rasterized"
        );

        Ok(self.buffer.insert(buffer))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        let buffer = self.buffer.as_ref().ok_or(ExportError::NothingRendered)?;

        self.presenter
            .present(buffer, filepath.as_ref())
            .map_err(ExportError::Io)?;

        info!(path = %filepath.as_ref().display(), "image written");
        Ok(())
    }
}
