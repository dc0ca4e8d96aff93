//! Certificate rendering
//!
//! One render path serves every consumer: the live preview, a single
//! download, and bulk export all call [`CertificateRenderer::render`] and
//! only differ in what they do with the surface it returns.

use crate::resolver::resolve_text;
use crate::schema::{Alignment, Member, TextBox};
use crate::{Result, TemplateError};
use log::warn;
use render_core::{
    aligned_start_x, layout_text, Align, Color, FontSpec, Surface, TemplateImage, TextPainter,
};

/// Fixed line-height multiplier for wrapped text
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Renders members against one decoded template image
///
/// The image is decoded once by the caller and borrowed here, since decode
/// dominates batch cost. Each render call allocates its own surface and
/// reads its inputs immutably, so repeated and interleaved calls are
/// independent.
pub struct CertificateRenderer<'a, P> {
    image: &'a TemplateImage,
    painter: &'a P,
}

impl<'a, P: TextPainter> CertificateRenderer<'a, P> {
    pub fn new(image: &'a TemplateImage, painter: &'a P) -> Self {
        Self { image, painter }
    }

    /// Render one member to a surface at the image's native resolution
    ///
    /// Fails outright with no partial surface; a complete certificate or
    /// nothing.
    pub fn render(&self, text_boxes: &[TextBox], member: &Member) -> Result<Surface> {
        let mut surface = Surface::from_image(self.image.pixels());
        for text_box in text_boxes {
            self.render_text_box(&mut surface, text_box, member)?;
        }
        Ok(surface)
    }

    fn render_text_box(
        &self,
        surface: &mut Surface,
        text_box: &TextBox,
        member: &Member,
    ) -> Result<()> {
        let text = resolve_text(text_box, member);
        if text.is_empty() {
            return Ok(());
        }

        let font = FontSpec::new(&text_box.font_family, text_box.font_size as f32);
        let color = Color::from_css(&text_box.color)?;
        let align = convert_align(text_box.alignment);

        // Anchor x in native pixels; a missing width anchors center/right
        // on the box origin itself
        let box_width = text_box.width.unwrap_or(0.0);
        let anchor_x = match text_box.alignment {
            Alignment::Left => text_box.x,
            Alignment::Center => text_box.x + box_width / 2.0,
            Alignment::Right => text_box.x + box_width,
        } as f32;

        let lines = layout_text(&text, text_box.width.map(|w| w as f32), |s| {
            self.painter.measure(s, &font)
        })?;

        let line_height = text_box.font_size as f64 * LINE_HEIGHT_FACTOR;
        let mut y = text_box.y;
        for line in &lines {
            let width = self.painter.measure(line, &font)?;
            let x = aligned_start_x(anchor_x, width, align);
            self.painter
                .paint(surface, line, &font, color, x, y as f32)?;
            y += line_height;
        }

        Ok(())
    }

    /// Render a batch of members sequentially
    ///
    /// A failing member is recorded and skipped; one bad record never
    /// blocks the rest. The shared decoded image is reused throughout.
    pub fn render_batch(&self, text_boxes: &[TextBox], members: &[Member]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for member in members {
            match self.render(text_boxes, member) {
                Ok(surface) => outcome.rendered.push((member.id.clone(), surface)),
                Err(error) => {
                    warn!("failed to render certificate for member {}: {error}", member.id);
                    outcome.failures.push(BatchFailure {
                        member_id: member.id.clone(),
                        error,
                    });
                }
            }
        }
        outcome
    }
}

/// Result of a batch render
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Member id paired with its finished surface, in input order
    pub rendered: Vec<(String, Surface)>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One member that failed to render
#[derive(Debug)]
pub struct BatchFailure {
    pub member_id: String,
    pub error: TemplateError,
}

fn convert_align(alignment: Alignment) -> Align {
    match alignment {
        Alignment::Left => Align::Left,
        Alignment::Center => Align::Center,
        Alignment::Right => Align::Right,
    }
}
