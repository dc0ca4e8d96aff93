//! Greedy word-wrap layout
//!
//! The line breaker is the single source of truth for every consumer of a
//! rendered certificate; preview and export call the identical code. It is
//! deliberately simple: split on single spaces, accumulate greedily, never
//! break inside a word.

use crate::Result;

/// Lay out text against an optional bounding width
///
/// Without `max_width` the text passes through as one unmodified line.
/// With it, [`wrap_text`] applies.
pub fn layout_text<F>(text: &str, max_width: Option<f32>, measure: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<f32>,
{
    match max_width {
        Some(width) => wrap_text(text, width, measure),
        None => Ok(vec![text.to_string()]),
    }
}

/// Split text into lines no wider than `max_width` by the measure function
///
/// Tokens are produced by splitting on single spaces, so runs of spaces
/// survive as empty tokens and rejoin faithfully. Each candidate line is
/// measured with a trailing space, matching the metrics the interactive
/// preview sees. A token is rejected only when the current line already
/// holds one; the rejected token then opens the next line and is not
/// re-checked against `max_width`, so a lone overlong word occupies its own
/// overflowing line rather than being broken or truncated. The final
/// in-progress line is always flushed, even when empty.
pub fn wrap_text<F>(text: &str, max_width: f32, mut measure: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<f32>,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for (i, word) in text.split(' ').enumerate() {
        let candidate = if i == 0 {
            format!("{word} ")
        } else {
            format!("{line} {word} ")
        };

        if measure(&candidate)? > max_width && i > 0 {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
            line.pop();
        }
    }

    lines.push(line);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten pixels per character, spaces included
    fn measure_10px(text: &str) -> Result<f32> {
        Ok(text.chars().count() as f32 * 10.0)
    }

    #[test]
    fn test_no_width_passthrough() {
        let lines = layout_text("Hello World", None, measure_10px).unwrap();
        assert_eq!(lines, vec!["Hello World"]);
    }

    #[test]
    fn test_no_width_passthrough_preserves_spacing() {
        let lines = layout_text("  double  spaced  ", None, measure_10px).unwrap();
        assert_eq!(lines, vec!["  double  spaced  "]);
    }

    #[test]
    fn test_wrap_basic() {
        // "Hello World This Is" with 10px/char against 120px:
        // "Hello " = 60 fits, "Hello World " = 120 fits,
        // "Hello World This " = 170 rejects -> "This" opens line 2
        let lines = wrap_text("Hello World This Is", 120.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["Hello World", "This Is"]);
    }

    #[test]
    fn test_wrap_no_spaces_single_line() {
        for width in [1.0, 10.0, 50.0, 1000.0] {
            let lines = wrap_text("Unbreakable", width, measure_10px).unwrap();
            assert_eq!(lines, vec!["Unbreakable"]);
        }
    }

    #[test]
    fn test_wrap_overlong_token_own_line() {
        // The long token is rejected from line 1 but is never re-checked
        // against the width itself; it overflows on its own line.
        let lines = wrap_text("a Supercalifragilistic b", 80.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_monotonic_line_count() {
        let text = "one two three four five six seven eight";
        let mut previous = 0;
        for width in [400.0, 200.0, 120.0, 80.0, 40.0, 10.0] {
            let count = wrap_text(text, width, measure_10px).unwrap().len();
            assert!(
                count >= previous,
                "narrowing to {width} dropped line count from {previous} to {count}"
            );
            previous = count;
        }
    }

    #[test]
    fn test_wrap_empty_text_single_empty_line() {
        let lines = wrap_text("", 100.0, measure_10px).unwrap();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_multiple_spaces_preserved() {
        // "a  b" splits into ["a", "", "b"]; the empty token rejoins,
        // keeping the double space
        let lines = wrap_text("a  b", 100.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["a  b"]);
    }

    #[test]
    fn test_wrap_trailing_space_can_flush_empty_final_line() {
        // "ab " splits into ["ab", ""]; candidate "ab  " measures 40 > 35,
        // so "ab" flushes and the empty token remains as the final line
        let lines = wrap_text("ab ", 35.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["ab", ""]);
    }

    #[test]
    fn test_wrap_candidate_measured_with_trailing_space() {
        // "abc def" at 70px: candidate "abc def " measures 80 and rejects,
        // even though "abc def" alone would measure exactly 70
        let lines = wrap_text("abc def", 70.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_exact_fit_including_trailing_space() {
        let lines = wrap_text("abc def", 80.0, measure_10px).unwrap();
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn test_wrap_deterministic() {
        let text = "the same input always produces the same lines";
        let a = wrap_text(text, 130.0, measure_10px).unwrap();
        let b = wrap_text(text, 130.0, measure_10px).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_measure_error_propagates() {
        let result = wrap_text("a b", 50.0, |_| {
            Err(crate::RenderError::Measurement("no metrics".to_string()))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_long_certificate_line_wraps_within_bound() {
        // 300px bound at 10px/char: every flushed line fits within the
        // bound once measured with its trailing space
        let text = "Hello World This Is A Long Certificate Line";
        let lines = wrap_text(text, 300.0, measure_10px).unwrap();
        assert!(lines.len() > 1);
        for line in &lines[..lines.len() - 1] {
            let width = measure_10px(&format!("{line} ")).unwrap();
            assert!(width <= 300.0, "line {line:?} measures {width}");
        }
        assert_eq!(lines.concat().replace(' ', ""), text.replace(' ', ""));
    }
}
