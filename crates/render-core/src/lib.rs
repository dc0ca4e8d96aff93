//! Render Core - Low-level raster rendering
//!
//! This crate provides functionality for:
//! - Creating RGBA raster surfaces
//! - Registering TrueType fonts, measuring and painting text
//! - Decoding template images (JPEG, PNG)
//! - Greedy word-wrap layout against a measurement function
//!
//! # Example
//!
//! ```ignore
//! use render_core::{FontSpec, FontStore, Surface, TextPainter};
//!
//! let mut fonts = FontStore::new();
//! fonts.register("Arial", std::fs::read("arial.ttf")?)?;
//!
//! let mut surface = Surface::new(800, 600);
//! let font = FontSpec::new("Arial", 24.0);
//! fonts.paint(&mut surface, "Hello", &font, Color::black(), 100.0, 100.0)?;
//! ```

mod font;
mod image;
mod layout;
mod surface;
mod text;

pub use font::{FontSpec, FontStore};
pub use image::{detect_format, ImageFormat, TemplateImage};
pub use layout::{layout_text, wrap_text};
pub use surface::{Color, Surface};
pub use text::{aligned_start_x, TextPainter};

use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode template image: {0}")]
    ImageDecode(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParse(String),

    #[error("Text measurement failed: {0}")]
    Measurement(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
