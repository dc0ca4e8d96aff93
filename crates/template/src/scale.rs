//! Viewport scaling between native and display coordinates
//!
//! Stored coordinates are always template-native pixels; this model only
//! affects presentation. The canonical render ignores it entirely.

/// Upper bound on the display scale factor, leaving margin in the viewport
pub const MAX_DISPLAY_SCALE: f64 = 0.9;

/// A single display scale factor
///
/// Recomputed whenever the container width or the template image changes;
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportScale {
    factor: f64,
}

impl ViewportScale {
    /// Fit a native image width into a display container width
    pub fn fit(display_width: f64, native_width: f64) -> Self {
        let factor = if display_width > 0.0 && native_width > 0.0 {
            (display_width / native_width).min(MAX_DISPLAY_SCALE)
        } else {
            MAX_DISPLAY_SCALE
        };
        Self { factor }
    }

    /// 1:1 scale, for headless callers
    pub fn identity() -> Self {
        Self { factor: 1.0 }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Native length to display length
    pub fn to_display(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Display length back to native length
    pub fn to_native(&self, value: f64) -> f64 {
        value / self.factor
    }

    /// Native point to display point
    pub fn point_to_display(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_display(x), self.to_display(y))
    }

    /// Convert a pointer drag delta from display space to native space
    ///
    /// Dividing by the factor before storing keeps stored coordinates
    /// resolution-independent.
    pub fn drag_to_native(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.to_native(dx), self.to_native(dy))
    }

    /// Display font size for a native font size
    pub fn scaled_font_size(&self, font_size: u32) -> f64 {
        font_size as f64 * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_width_ratio() {
        let scale = ViewportScale::fit(400.0, 800.0);
        assert_eq!(scale.factor(), 0.5);
    }

    #[test]
    fn test_fit_caps_at_max() {
        let scale = ViewportScale::fit(4000.0, 800.0);
        assert_eq!(scale.factor(), MAX_DISPLAY_SCALE);
    }

    #[test]
    fn test_fit_degenerate_inputs_fall_back_to_cap() {
        assert_eq!(ViewportScale::fit(0.0, 800.0).factor(), MAX_DISPLAY_SCALE);
        assert_eq!(ViewportScale::fit(400.0, 0.0).factor(), MAX_DISPLAY_SCALE);
    }

    #[test]
    fn test_drag_round_trip() {
        // Native (100, 50) displayed at S = 0.5; a display drag of (10, 10)
        // stores a native delta of (20, 20)
        let scale = ViewportScale::fit(400.0, 800.0);
        let (x, y) = scale.point_to_display(100.0, 50.0);
        assert_eq!((x, y), (50.0, 25.0));

        let (dx, dy) = scale.drag_to_native(10.0, 10.0);
        assert_eq!((dx, dy), (20.0, 20.0));
        assert_eq!((100.0 + dx, 50.0 + dy), (120.0, 70.0));
    }

    #[test]
    fn test_to_native_inverts_to_display() {
        let scale = ViewportScale::fit(377.0, 800.0);
        let native = 123.0;
        let there_and_back = scale.to_native(scale.to_display(native));
        assert!((there_and_back - native).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_font_size() {
        let scale = ViewportScale::fit(400.0, 800.0);
        assert_eq!(scale.scaled_font_size(24), 12.0);
    }

    #[test]
    fn test_identity() {
        let scale = ViewportScale::identity();
        assert_eq!(scale.to_display(42.0), 42.0);
        assert_eq!(scale.to_native(42.0), 42.0);
    }
}
