//! Template Engine - certificate data model and rendering
//!
//! This crate provides:
//! - The certificate data model (template, text boxes, field schema, members)
//! - Field resolution (binding a text box to a member's value)
//! - The canonical renderer every preview and export path shares
//! - The viewport scale model for display-space editing
//! - JSON import/export of the full data set
//!
//! # Example
//!
//! ```ignore
//! use render_core::{FontStore, TemplateImage};
//! use template::{parse_data, CertificateRenderer};
//!
//! let data = parse_data(&json)?;
//! let image = TemplateImage::decode(&image_bytes)?;
//! let renderer = CertificateRenderer::new(&image, &fonts);
//! let surface = renderer.render(&data.template.text_boxes, &data.members[0])?;
//! ```

pub mod parser;
mod renderer;
mod resolver;
mod scale;
mod schema;

pub use parser::{export_data, export_stamp, parse_data};
pub use renderer::{BatchFailure, BatchOutcome, CertificateRenderer, LINE_HEIGHT_FACTOR};
pub use resolver::resolve_text;
pub use scale::{ViewportScale, MAX_DISPLAY_SCALE};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    #[error("Invalid field name: {0}")]
    InvalidFieldName(String),

    #[error("Field already exists: {0}")]
    DuplicateField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Render error: {0}")]
    RenderError(#[from] render_core::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
