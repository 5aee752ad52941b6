use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    ZeroSize {
        width: u32,
        height: u32,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGB data, got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Colour) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::ZeroSize { width, height });
        }

        let buffer = [fill.r, fill.g, fill.b].repeat(width as usize * height as usize);

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn from_data(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::ZeroSize { width, height });
        }

        let expected_size = buffer_size_for(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_pixel() {
        let fill = Colour { r: 1, g: 2, b: 3 };
        let buffer = PixelBuffer::new(4, 3, fill).unwrap();

        assert_eq!(buffer.buffer().len(), 36);
        assert!(buffer.buffer().chunks_exact(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            PixelBuffer::new(0, 10, Colour::BLACK),
            Err(PixelBufferError::ZeroSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.pixel(0, 1), Some(Colour { r: 0, g: 0, b: 255 }));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgb_triplet() {
        let mut buffer = PixelBuffer::new(3, 3, Colour::BLACK).unwrap();
        buffer.set_pixel(1, 1, Colour { r: 255, g: 0, b: 0 }).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3, Colour::BLACK).unwrap();

        assert_eq!(
            buffer.set_pixel(3, 0, Colour::BLACK),
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(2, 2, Colour::BLACK).unwrap();

        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn test_row_stride_matches_rgb_width() {
        let mut buffer = PixelBuffer::new(5, 4, Colour::BLACK).unwrap();
        let stride = buffer.row_stride();

        assert_eq!(stride, 15);
        assert_eq!(buffer.buffer_mut().chunks_exact(stride).count(), 4);
    }
}
