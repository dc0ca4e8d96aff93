//! Font registration, measurement and glyph painting

use crate::{Color, RenderError, Result, Surface, TextPainter};
use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use log::{debug, warn};
use std::collections::HashMap;

/// Composite font request: family name plus pixel size
///
/// This is what a text box's `fontSize` + `fontFamily` pair resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Registry mapping family names to parsed fonts
///
/// The renderer resolves a text box's `fontFamily` here. A registered
/// default stands in for unknown families the way a browser canvas
/// substitutes silently; without one, an unknown family is an error.
#[derive(Debug, Default, Clone)]
pub struct FontStore {
    fonts: HashMap<String, FontArc>,
    default: Option<FontArc>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font under a family name
    ///
    /// Re-registering a name replaces the prior font.
    pub fn register(&mut self, name: &str, ttf_data: Vec<u8>) -> Result<()> {
        let font = parse_font(name, ttf_data)?;
        self.fonts.insert(name.to_string(), font);
        Ok(())
    }

    /// Register the fallback used for unknown family names
    pub fn register_default(&mut self, ttf_data: Vec<u8>) -> Result<()> {
        let font = parse_font("default", ttf_data)?;
        self.default = Some(font);
        Ok(())
    }

    /// Whether a family name is registered (the default does not count)
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    fn lookup(&self, family: &str) -> Result<&FontArc> {
        if let Some(font) = self.fonts.get(family) {
            return Ok(font);
        }
        match &self.default {
            Some(font) => {
                warn!("unknown font family '{family}', substituting default");
                Ok(font)
            }
            None => Err(RenderError::FontNotFound(family.to_string())),
        }
    }
}

/// Parse TTF bytes, validating the face and logging its family name
fn parse_font(name: &str, ttf_data: Vec<u8>) -> Result<FontArc> {
    let face = ttf_parser::Face::parse(&ttf_data, 0)
        .map_err(|e| RenderError::FontParse(format!("{name}: {e:?}")))?;

    if let Some(family) = face
        .names()
        .into_iter()
        .find(|n| n.name_id == ttf_parser::name_id::FAMILY)
        .and_then(|n| n.to_string())
    {
        debug!("registered font '{name}' ({family})");
    }

    FontArc::try_from_vec(ttf_data).map_err(|e| RenderError::FontParse(format!("{name}: {e}")))
}

impl TextPainter for FontStore {
    /// Sum of scaled glyph advances, spaces included
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32> {
        let face = self.lookup(&font.family)?;
        let scaled = face.as_scaled(PxScale::from(font.size));
        Ok(text
            .chars()
            .map(|c| scaled.h_advance(face.glyph_id(c)))
            .sum())
    }

    fn paint(
        &self,
        surface: &mut Surface,
        text: &str,
        font: &FontSpec,
        color: Color,
        x: f32,
        y_top: f32,
    ) -> Result<()> {
        let face = self.lookup(&font.family)?;
        let scale = PxScale::from(font.size);
        let scaled = face.as_scaled(scale);

        // Top-anchored: the baseline sits one ascent below the given y
        let baseline = y_top + scaled.ascent();
        let mut caret = x;

        for c in text.chars() {
            let id = face.glyph_id(c);
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);

            if let Some(outlined) = face.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (min_x, min_y) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|gx, gy, coverage| {
                    surface.blend_pixel(min_x + gx as i64, min_y + gy as i64, color, coverage);
                });
            }
        }

        Ok(())
    }
}
