//! WASM bindings for certgen
//!
//! This crate provides a JavaScript-friendly API for:
//! - Loading a certificate data set (template + members) from JSON
//! - Loading the template image and fonts
//! - Rendering per-member certificates as PNG or PDF bytes
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { CertificateStudio } from 'certgen-wasm';
//!
//! await init();
//!
//! const studio = CertificateStudio.fromJson(dataJson);
//! studio.loadImage(imageBytes);
//! studio.loadFont('Arial', fontBytes);
//!
//! // Live preview and export share the same pixels
//! const png = studio.renderMemberPng(0);
//! const pdf = studio.renderMemberPdf(0);
//! ```

use render_core::{FontStore, TemplateImage};
use template::{CertificateData, CertificateRenderer, Member, ViewportScale};
use wasm_bindgen::prelude::*;

// Better panic messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Certificate data set plus the resources needed to render it
#[wasm_bindgen]
pub struct CertificateStudio {
    data: CertificateData,
    image: Option<TemplateImage>,
    fonts: FontStore,
}

#[wasm_bindgen]
impl CertificateStudio {
    /// Load a data set from interchange JSON
    ///
    /// The image is not embedded in the JSON; call `loadImage` before
    /// rendering.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<CertificateStudio, JsValue> {
        let data = template::parse_data(json).map_err(to_js_err)?;
        Ok(CertificateStudio {
            data,
            image: None,
            fonts: FontStore::new(),
        })
    }

    /// Decode and keep the template image
    ///
    /// Decoded once and reused across every render.
    #[wasm_bindgen(js_name = loadImage)]
    pub fn load_image(&mut self, data: &[u8]) -> Result<(), JsValue> {
        self.image = Some(TemplateImage::decode(data).map_err(to_js_err)?);
        Ok(())
    }

    /// Register a font under a family name
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&mut self, name: &str, data: &[u8]) -> Result<(), JsValue> {
        self.fonts.register(name, data.to_vec()).map_err(to_js_err)
    }

    /// Register the fallback font for unknown family names
    #[wasm_bindgen(js_name = loadDefaultFont)]
    pub fn load_default_font(&mut self, data: &[u8]) -> Result<(), JsValue> {
        self.fonts.register_default(data.to_vec()).map_err(to_js_err)
    }

    /// Number of members in the loaded roster
    #[wasm_bindgen(js_name = memberCount)]
    pub fn member_count(&self) -> usize {
        self.data.members.len()
    }

    /// Display scale factor for a given container width
    #[wasm_bindgen(js_name = displayScale)]
    pub fn display_scale(&self, container_width: f64) -> Result<f64, JsValue> {
        let image = self.image()?;
        Ok(ViewportScale::fit(container_width, image.width() as f64).factor())
    }

    /// Render an ad-hoc member object as PNG bytes
    #[wasm_bindgen(js_name = renderPng)]
    pub fn render_png(&self, member: JsValue) -> Result<Vec<u8>, JsValue> {
        let member: Member = serde_wasm_bindgen::from_value(member)?;
        let surface = self.render(&member)?;
        export::encode_png(&surface).map_err(to_js_err)
    }

    /// Render the roster member at `index` as PNG bytes
    #[wasm_bindgen(js_name = renderMemberPng)]
    pub fn render_member_png(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        let surface = self.render(self.member(index)?)?;
        export::encode_png(&surface).map_err(to_js_err)
    }

    /// Render the roster member at `index` as single-page PDF bytes
    #[wasm_bindgen(js_name = renderMemberPdf)]
    pub fn render_member_pdf(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        let surface = self.render(self.member(index)?)?;
        export::wrap_pdf(&surface).map_err(to_js_err)
    }

    /// Serialize the data set for download, with the image URL blanked
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        template::export_data(
            &self.data.template,
            &self.data.members,
            &template::export_stamp(),
        )
        .map_err(to_js_err)
    }

    fn image(&self) -> Result<&TemplateImage, JsValue> {
        self.image
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Template image not loaded. Call loadImage() first."))
    }

    fn member(&self, index: usize) -> Result<&Member, JsValue> {
        self.data
            .members
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("No member at index {index}")))
    }

    fn render(&self, member: &Member) -> Result<render_core::Surface, JsValue> {
        let image = self.image()?;
        let renderer = CertificateRenderer::new(image, &self.fonts);
        renderer
            .render(&self.data.template.text_boxes, member)
            .map_err(to_js_err)
    }
}
