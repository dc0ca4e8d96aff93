//! Template image decoding

use crate::{RenderError, Result};
use image::{ImageReader, RgbaImage};
use std::io::Cursor;

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::ImageDecode(err.to_string())
    }
}

/// Detected image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// Detect image format from magic bytes
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.len() < 8 {
        return Err(RenderError::ImageDecode("image data too short".to_string()));
    }

    // JPEG starts with FF D8 FF
    if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return Ok(ImageFormat::Jpeg);
    }

    // PNG starts with 89 50 4E 47 0D 0A 1A 0A
    if data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Ok(ImageFormat::Png);
    }

    Err(RenderError::ImageDecode("unknown image format".to_string()))
}

/// A decoded template image
///
/// Decode is the dominant cost of a batch run, so the image is decoded
/// once and shared by reference across every member render.
#[derive(Debug, Clone)]
pub struct TemplateImage {
    pixels: RgbaImage,
}

impl TemplateImage {
    /// Decode JPEG or PNG bytes into native-resolution RGBA pixels
    pub fn decode(data: &[u8]) -> Result<Self> {
        detect_format(data)?;

        let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let decoded = reader.decode()?;

        Ok(Self {
            pixels: decoded.to_rgba8(),
        })
    }

    /// Wrap already-decoded pixels
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Native width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Native height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
