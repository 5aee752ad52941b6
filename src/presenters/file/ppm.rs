use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(&mut writer, buffer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Binary PPM: `P6`, then width, height and max colour value, then RGB bytes.
pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_write_ppm_header_and_payload() {
        let buffer = PixelBuffer::new(2, 1, Colour { r: 9, g: 8, b: 7 }).unwrap();
        let mut out = Vec::new();

        write_ppm(&mut out, &buffer).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[9, 8, 7, 9, 8, 7]);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "cantor_explorer_ppm_{}.ppm",
            std::process::id()
        ));
        let buffer = PixelBuffer::new(3, 2, Colour::BLACK).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
    }
}
