use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::adapters::pixel_format::PixelFormatError;
use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
    Rasterize(PixelBufferError),
    Frame(PixelFormatError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Resize(err) => write!(f, "failed to resize surface: {}", err),
            Self::Rasterize(err) => write!(f, "failed to rasterize construction: {}", err),
            Self::Frame(err) => write!(f, "failed to copy frame: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Resize(err) => Some(err),
            Self::Rasterize(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Resize(err)
    }
}

impl From<PixelBufferError> for GuiError {
    fn from(err: PixelBufferError) -> Self {
        Self::Rasterize(err)
    }
}

impl From<PixelFormatError> for GuiError {
    fn from(err: PixelFormatError) -> Self {
        Self::Frame(err)
    }
}
