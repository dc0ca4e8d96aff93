//! Integration tests for render-core
//!
//! These exercise the layout engine and surface primitives together, the
//! way the certificate renderer drives them.

use pretty_assertions::assert_eq;
use render_core::{aligned_start_x, layout_text, Align, Color, Surface};

/// Approximate canvas metrics: 10px per character
fn measure(text: &str) -> render_core::Result<f32> {
    Ok(text.chars().count() as f32 * 10.0)
}

#[test]
fn test_layout_then_align_center() {
    let lines = layout_text("Hello World This Is A Long Certificate Line", Some(300.0), measure)
        .unwrap();
    assert!(lines.len() > 1);

    // Center alignment anchors each line on the same x
    let anchor = 50.0 + 300.0 / 2.0;
    for line in &lines {
        let width = measure(line).unwrap();
        let start = aligned_start_x(anchor, width, Align::Center);
        let end = start + width;
        assert!(((start + end) / 2.0 - anchor).abs() < 0.001);
    }
}

#[test]
fn test_painted_rows_step_by_line_height() {
    // Stamp each laid-out line as a filled row the way a painter would,
    // stepping y by fontSize * 1.2, and confirm the rows land where the
    // contract says: line 2 starts at y + 24 for a 20px font.
    let lines = layout_text("Hello World This Is A Long Certificate Line", Some(300.0), measure)
        .unwrap();

    let font_size = 20u32;
    let line_height = (font_size as f32 * 1.2) as i64;
    let mut surface = Surface::new(400, 200);

    let mut y = 50i64;
    for line in &lines {
        let width = measure(line).unwrap() as i64;
        for dy in 0..font_size as i64 {
            for dx in 0..width {
                surface.put_pixel(50 + dx, y + dy, Color::black());
            }
        }
        y += line_height;
    }

    assert_eq!(surface.pixel(55, 50), Color::black());
    assert_eq!(surface.pixel(55, 74), Color::black()); // 50 + 24: second line
    assert_eq!(surface.pixel(55, 71), Color::white()); // gap between rows
}

#[test]
fn test_surfaces_from_identical_operations_are_identical() {
    let build = || {
        let mut s = Surface::new(64, 64);
        for i in 0..64 {
            s.blend_pixel(i, i, Color::rgb(10, 200, 30), (i as f32) / 64.0);
        }
        s
    };
    assert_eq!(build(), build());
}
