//! Render Single - one certificate from a data file
//!
//! This example shows:
//! - Loading a template image and a TTF font
//! - Parsing the interchange JSON data set
//! - Rendering one member and writing PNG and PDF output
//!
//! Run with:
//!   cargo run --example render_single -p export -- \
//!     template.png font.ttf certificate_data.json output

use env_logger::Env;
use export::{encode_png, wrap_pdf};
use render_core::{FontStore, TemplateImage};
use template::{parse_data, CertificateRenderer};

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let image_path = args.next().unwrap_or_else(|| "template.png".to_string());
    let font_path = args.next().unwrap_or_else(|| "font.ttf".to_string());
    let data_path = args
        .next()
        .unwrap_or_else(|| "certificate_data.json".to_string());
    let out_dir = args.next().unwrap_or_else(|| "output".to_string());

    std::fs::create_dir_all(&out_dir)?;

    // Decode the image once; it is reused for every render
    let image = TemplateImage::decode(&std::fs::read(&image_path)?)?;

    // Register the font under every family the template names, plus as
    // the fallback for anything else
    let font_bytes = std::fs::read(&font_path)?;
    let data = parse_data(&std::fs::read_to_string(&data_path)?)?;
    let mut fonts = FontStore::new();
    for text_box in &data.template.text_boxes {
        if !fonts.contains(&text_box.font_family) {
            fonts.register(&text_box.font_family, font_bytes.clone())?;
        }
    }
    fonts.register_default(font_bytes)?;

    let member = data
        .members
        .first()
        .ok_or_else(|| anyhow::anyhow!("data set has no members"))?;

    let renderer = CertificateRenderer::new(&image, &fonts);
    let surface = renderer.render(&data.template.text_boxes, member)?;

    let png_path = format!("{out_dir}/certificate.png");
    let pdf_path = format!("{out_dir}/certificate.pdf");
    std::fs::write(&png_path, encode_png(&surface)?)?;
    std::fs::write(&pdf_path, wrap_pdf(&surface)?)?;

    println!("rendered member '{}' to {png_path} and {pdf_path}", member.id);
    Ok(())
}
