//! PNG encoding of rendered surfaces

use crate::{ExportError, Result};
use render_core::Surface;
use std::io::Cursor;

/// Encode a rendered surface as PNG bytes
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    surface
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| ExportError::PngError(e.to_string()))?;
    Ok(bytes)
}
