//! Export - certificate output encodings
//!
//! The render core hands every consumer the same raster surface; this
//! crate is where the consumers live:
//! - PNG encoding
//! - A minimal single-image PDF container
//! - Bulk export of a member roster to a directory, with the JSON data file
//!
//! # Example
//!
//! ```ignore
//! use export::{encode_png, wrap_pdf, ExportFormat};
//!
//! let surface = renderer.render(&boxes, &member)?;
//! std::fs::write("certificate.png", encode_png(&surface)?)?;
//! std::fs::write("certificate.pdf", wrap_pdf(&surface)?)?;
//! ```

mod bulk;
mod pdf;
mod png;

pub use bulk::{
    certificate_filename, default_export_name, sanitize_filename, BulkExporter, BulkReport,
    ExportFailure,
};
pub use pdf::wrap_pdf;
pub use png::encode_png;

use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    PngError(String),

    #[error("PDF container failed: {0}")]
    PdfError(String),

    #[error("Render error: {0}")]
    RenderError(#[from] template::TemplateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Output encoding for a rendered certificate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
}

impl ExportFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }
}
