//! Minimal single-image PDF container
//!
//! A thin format wrapper around the rendered raster: one page whose
//! MediaBox matches the surface's pixel dimensions, with the raster
//! embedded as a FlateDecode DeviceRGB XObject painted edge to edge.
//! Orientation falls out of the dimensions; no fonts or text operators
//! are involved.

use crate::{ExportError, Result};
use flate2::write::ZlibEncoder;
use lopdf::{dictionary, Document, Object, Stream};
use render_core::Surface;
use std::io::Write;

/// Wrap a rendered surface in a one-page PDF
pub fn wrap_pdf(surface: &Surface) -> Result<Vec<u8>> {
    let width = surface.width();
    let height = surface.height();

    // Surfaces are opaque by construction; drop the alpha channel
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for pixel in surface.as_image().pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&rgb)?;
    let compressed = encoder.finish()?;

    let mut doc = Document::with_version("1.5");

    let image_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        compressed,
    )));

    // q / cm / Do / Q: paint the image across the whole page
    let content = format!("q\n{width} 0 0 {height} 0 0 cm\n/Im1 Do\nQ\n");
    let contents_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {},
        content.into_bytes(),
    )));

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), (width as i64).into(), (height as i64).into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im1" => image_id },
        },
        "Contents" => contents_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => 1,
            "Kids" => vec![page_id.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::PdfError(e.to_string()))?;
    Ok(bytes)
}
