//! Bulk Export - certificates for a whole roster
//!
//! This example shows:
//! - Batch rendering with per-member failure isolation
//! - Directory export: certificates/ plus certificate_data.json
//!
//! Run with:
//!   cargo run --example bulk_export -p export -- \
//!     template.png font.ttf certificate_data.json output png

use env_logger::Env;
use export::{default_export_name, BulkExporter, ExportFormat};
use render_core::{FontStore, TemplateImage};
use template::parse_data;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let image_path = args.next().unwrap_or_else(|| "template.png".to_string());
    let font_path = args.next().unwrap_or_else(|| "font.ttf".to_string());
    let data_path = args
        .next()
        .unwrap_or_else(|| "certificate_data.json".to_string());
    let out_dir = args.next().unwrap_or_else(default_export_name);
    let format = match args.next().as_deref() {
        Some("png") => ExportFormat::Png,
        _ => ExportFormat::Pdf,
    };

    let image = TemplateImage::decode(&std::fs::read(&image_path)?)?;
    let data = parse_data(&std::fs::read_to_string(&data_path)?)?;

    let font_bytes = std::fs::read(&font_path)?;
    let mut fonts = FontStore::new();
    for text_box in &data.template.text_boxes {
        if !fonts.contains(&text_box.font_family) {
            fonts.register(&text_box.font_family, font_bytes.clone())?;
        }
    }
    fonts.register_default(font_bytes)?;

    let exporter = BulkExporter::new(&data.template, &image, &fonts);
    let report = exporter.export_to_dir(&data.members, format, out_dir.as_ref())?;

    println!(
        "wrote {} certificates to {out_dir} ({} failed)",
        report.written.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        eprintln!("  member {}: {}", failure.member_id, failure.error);
    }
    Ok(())
}
