//! Field resolution
//!
//! Decides the literal string a text box renders for a given member.

use crate::schema::{Member, TextBox};

/// Resolve the text a box renders against one member record
///
/// The bound field's value wins when the binding is set and the value is
/// defined and non-empty; otherwise the box's static text is returned
/// verbatim, including when it is empty. Total over its domain and free of
/// side effects; missing or extra member keys are tolerated.
pub fn resolve_text(text_box: &TextBox, member: &Member) -> String {
    if let Some(field) = &text_box.field_name {
        if let Some(value) = member.text_value(field) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    text_box.text.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CertificateTemplate;

    fn bound_box(field: &str, fallback: &str) -> TextBox {
        let mut template = CertificateTemplate::new("t");
        let text_box = template.add_text_box();
        text_box.field_name = Some(field.to_string());
        text_box.text = fallback.to_string();
        text_box.clone()
    }

    #[test]
    fn test_field_value_wins() {
        let text_box = bound_box("name", "fallback");
        let mut member = Member::new("1");
        member.set_value("name", "Alice");
        assert_eq!(resolve_text(&text_box, &member), "Alice");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let text_box = bound_box("name", "fallback");
        let mut member = Member::new("1");
        member.set_value("name", "");
        assert_eq!(resolve_text(&text_box, &member), "fallback");
    }

    #[test]
    fn test_missing_value_falls_back() {
        let text_box = bound_box("name", "fallback");
        let member = Member::new("1");
        assert_eq!(resolve_text(&text_box, &member), "fallback");
    }

    #[test]
    fn test_unbound_box_uses_static_text() {
        let mut text_box = bound_box("name", "static");
        text_box.field_name = None;
        let mut member = Member::new("1");
        member.set_value("name", "Alice");
        assert_eq!(resolve_text(&text_box, &member), "static");
    }

    #[test]
    fn test_empty_static_text_stays_empty() {
        let text_box = bound_box("name", "");
        let member = Member::new("1");
        assert_eq!(resolve_text(&text_box, &member), "");
    }

    #[test]
    fn test_numeric_value_coerced() {
        let text_box = bound_box("score", "none");
        let member: Member = serde_json::from_str(r#"{ "id": "1", "score": 95 }"#).unwrap();
        assert_eq!(resolve_text(&text_box, &member), "95");
    }
}
