//! Text measurement and painting boundary

use crate::{Align, Color, FontSpec, Result, Surface};

/// Host-provided text primitive
///
/// The layout engine and the certificate renderer never touch glyphs
/// directly; they measure and paint through this port. The production
/// implementation is [`crate::FontStore`]; tests substitute fixed-metric
/// fakes so no font binaries are needed.
pub trait TextPainter {
    /// Width in pixels of `text` rendered with `font`
    fn measure(&self, text: &str, font: &FontSpec) -> Result<f32>;

    /// Paint a single line onto `surface`
    ///
    /// `x` is the left edge of the painted text and `y_top` its top edge
    /// (top-anchored, not baseline-anchored). No paint state survives the
    /// call.
    fn paint(
        &self,
        surface: &mut Surface,
        text: &str,
        font: &FontSpec,
        color: Color,
        x: f32,
        y_top: f32,
    ) -> Result<()>;
}

/// Calculate the left edge of a line from its alignment anchor
///
/// # Arguments
/// * `anchor_x` - Anchor position: left edge, center, or right edge of the text
/// * `text_width` - Measured width of the line in pixels
/// * `align` - Which edge `anchor_x` refers to
pub fn aligned_start_x(anchor_x: f32, text_width: f32, align: Align) -> f32 {
    match align {
        Align::Left => anchor_x,
        Align::Center => anchor_x - text_width / 2.0,
        Align::Right => anchor_x - text_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_start_left() {
        assert_eq!(aligned_start_x(100.0, 40.0, Align::Left), 100.0);
    }

    #[test]
    fn test_aligned_start_center() {
        assert_eq!(aligned_start_x(100.0, 40.0, Align::Center), 80.0);
    }

    #[test]
    fn test_aligned_start_right() {
        assert_eq!(aligned_start_x(100.0, 40.0, Align::Right), 60.0);
    }

    #[test]
    fn test_aligned_start_zero_width() {
        // A zero-width line is anchored identically for every alignment
        for align in [Align::Left, Align::Center, Align::Right] {
            assert_eq!(aligned_start_x(50.0, 0.0, align), 50.0);
        }
    }
}
