// src/image.rs

//! Image decoding and encoding at the edge of the core.
//!
//! Decoding compressed formats is delegated to an [`ImageDecoder`]. The
//! default implementation uses the `image` crate. Decoded RGBA bytes are
//! converted into pixel order by `PixelBuffer::from_rgba_bytes`.

use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;

/// Raw decoder output: tightly packed R, G, B, A bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Turns encoded image bytes into raw RGBA.
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage>;

    /// Decodes the contents of the file at `path`. The path is only a
    /// format hint; by default it is ignored.
    fn decode_file(&self, _path: &Path, bytes: &[u8]) -> Result<DecodedImage> {
        self.decode(bytes)
    }
}

/// Decoder backed by the `image` crate (PNG and TGA).
///
/// PNG is recognised by its signature. TGA has no magic number, so bytes
/// that match no signature are retried as TGA.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDecoder;

fn to_decoded(image: ::image::DynamicImage) -> DecodedImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    }
}

impl ImageDecoder for StandardDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage> {
        let decoded = match ::image::load_from_memory(bytes) {
            Ok(image) => image,
            Err(guess_err) => {
                debug!("Format guess failed ({}), retrying as TGA", guess_err);
                ::image::load_from_memory_with_format(bytes, ::image::ImageFormat::Tga)
                    .map_err(|_| Error::Decode(guess_err.to_string()))?
            }
        };
        Ok(to_decoded(decoded))
    }

    fn decode_file(&self, path: &Path, bytes: &[u8]) -> Result<DecodedImage> {
        if let Ok(format) = ::image::ImageFormat::from_path(path) {
            match ::image::load_from_memory_with_format(bytes, format) {
                Ok(image) => return Ok(to_decoded(image)),
                Err(e) => debug!("{} is not a valid {:?} file ({}), guessing", path.display(), format, e),
            }
        }
        self.decode(bytes)
    }
}

fn decode_to_buffer(
    bytes: &[u8],
    decode: impl FnOnce(&[u8]) -> Result<DecodedImage>,
) -> Result<PixelBuffer> {
    if bytes.is_empty() {
        error!("Refusing to decode an empty image buffer");
        return Err(Error::EmptyImageData);
    }
    let decoded = decode(bytes).map_err(|e| {
        error!("Image decode failed: {}", e);
        e
    })?;
    debug!("Decoded {}x{} image", decoded.width, decoded.height);
    PixelBuffer::from_rgba_bytes(decoded.width, decoded.height, &decoded.rgba)
}

/// Decodes an in-memory image into a new buffer.
pub fn load_image_mem(bytes: &[u8], decoder: &dyn ImageDecoder) -> Result<PixelBuffer> {
    decode_to_buffer(bytes, |bytes| decoder.decode(bytes))
}

/// Reads and decodes an image file, using its extension as a format hint.
pub fn load_image(path: impl AsRef<Path>, decoder: &dyn ImageDecoder) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| {
        error!("Unable to open image file {}: {}", path.display(), source);
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    decode_to_buffer(&bytes, |bytes| decoder.decode_file(path, bytes))
}

/// Writes `buffer` to `path`; the format follows the file extension.
pub fn save_image(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ::image::save_buffer(
        path,
        &buffer.to_rgba_bytes(),
        buffer.width(),
        buffer.height(),
        ::image::ExtendedColorType::Rgba8,
    )
    .map_err(|e| {
        error!("Failed to save {}: {}", path.display(), e);
        Error::Encode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::rasterizer::{draw_pixel, fill, get_pixel};
    use test_log::test;

    /// Hands back a fixed image regardless of input.
    struct FixedDecoder(DecodedImage);

    impl ImageDecoder for FixedDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<DecodedImage> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn empty_input_is_rejected_before_decoding() {
        let err = load_image_mem(&[], &StandardDecoder).unwrap_err();
        assert!(matches!(err, Error::EmptyImageData));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = load_image_mem(b"definitely not an image", &StandardDecoder).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_image("/nonexistent/framekit/atlas.png", &StandardDecoder).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn decoder_output_keeps_color_order() {
        let decoder = FixedDecoder(DecodedImage {
            width: 1,
            height: 1,
            rgba: vec![10, 20, 30, 40],
        });
        let buffer = load_image_mem(b"x", &decoder).unwrap();
        assert_eq!(get_pixel(&buffer, 0, 0), Color::new(10, 20, 30, 40));
    }

    #[test]
    fn saved_tga_decodes_to_the_same_pixels() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        fill(&mut buffer, Color::new(0, 0, 0, 255));
        draw_pixel(&mut buffer, 2, 1, Color::opaque(200, 100, 50));

        let path = std::env::temp_dir().join(format!("framekit-save-{}.tga", std::process::id()));
        save_image(&buffer, &path).unwrap();
        let loaded = load_image(&path, &StandardDecoder).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, buffer);
    }

    fn sample() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        fill(&mut buffer, Color::new(0, 0, 0, 255));
        draw_pixel(&mut buffer, 0, 1, Color::opaque(7, 8, 9));
        buffer
    }

    #[test]
    fn tga_bytes_decode_without_a_path_hint() {
        let buffer = sample();
        let path = std::env::temp_dir().join(format!("framekit-mem-{}.tga", std::process::id()));
        save_image(&buffer, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let loaded = load_image_mem(&bytes, &StandardDecoder).unwrap();
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn misleading_extension_falls_back_to_guessing() {
        let buffer = sample();
        let dir = std::env::temp_dir();
        let png = dir.join(format!("framekit-renamed-{}.png", std::process::id()));
        let tga = dir.join(format!("framekit-renamed-{}.tga", std::process::id()));
        save_image(&buffer, &png).unwrap();
        std::fs::rename(&png, &tga).unwrap();

        let loaded = load_image(&tga, &StandardDecoder).unwrap();
        let _ = std::fs::remove_file(&tga);
        assert_eq!(loaded, buffer);
    }
}
