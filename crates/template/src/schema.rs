//! Certificate data model and interchange JSON types

use crate::{Result, TemplateError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Embedded JSON Schema for the interchange envelope
///
/// Usable by IDEs and validators when authoring data files by hand.
pub const TEMPLATE_SCHEMA: &str = include_str!("../data/template-schema.json");

/// Horizontal alignment of a text box
///
/// Changes both the draw anchor and, when a bounding width is set, the
/// reference x used for intra-box alignment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One positioned text element on the template
///
/// `x`/`y` are template-native pixel coordinates, always relative to the
/// image's original resolution regardless of display zoom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBox {
    /// Stable identifier
    pub id: String,

    /// Left edge in native pixels
    pub x: f64,

    /// Top edge in native pixels
    pub y: f64,

    /// Static fallback text, used verbatim when no field value applies
    #[serde(default)]
    pub text: String,

    /// Optional binding to a field name
    #[serde(rename = "fieldName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Font size in logical pixels at native resolution
    #[serde(rename = "fontSize")]
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Font family known to the rendering surface
    #[serde(rename = "fontFamily")]
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// CSS-style hex color
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub alignment: Alignment,

    /// Bounding width in native pixels; present means word-wrap is active
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Advisory bounding height; overflow is not clipped
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

fn default_font_size() -> u32 {
    24
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_color() -> String {
    "#000000".to_string()
}

/// Input-widget hint for a field; never enforced by the renderer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Date,
    Custom,
}

/// Schema entry describing one record attribute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    /// Unique key, also the member's storage key
    pub name: String,

    /// Human-readable display name; empty falls back to `name`
    #[serde(default)]
    pub label: String,

    #[serde(rename = "type")]
    #[serde(default)]
    pub field_type: FieldType,

    /// Advisory; enforced only by the member editor
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    /// New text field with the label defaulting to the name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            field_type: FieldType::Text,
            required: false,
        }
    }

    /// The label, falling back to the name when blank
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// Check a candidate field name: a letter, then letters/digits/underscores
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// One recipient record: an id plus an open-ended field map
///
/// Values deserialize as raw JSON so imported data with numbers or booleans
/// still loads; they are coerced to text at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,

    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl Member {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Set a field value
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), serde_json::Value::String(value.into()));
    }

    /// Remove a field value, returning whether one was present
    pub fn remove_value(&mut self, field: &str) -> bool {
        self.values.remove(field).is_some()
    }

    /// The field's value coerced to text, if defined
    pub fn text_value(&self, field: &str) -> Option<String> {
        self.values.get(field).map(value_to_string)
    }
}

/// Convert a JSON value to the string the renderer draws
pub fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
    }
}

/// Aggregate root: background image reference, ordered text boxes, field schema
///
/// Box order is z-order: later boxes paint over earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateTemplate {
    pub id: String,

    /// External image resource handle; blanked on export
    #[serde(rename = "imageUrl")]
    #[serde(default)]
    pub image_url: String,

    #[serde(rename = "textBoxes")]
    #[serde(default)]
    pub text_boxes: Vec<TextBox>,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl CertificateTemplate {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            image_url: String::new(),
            text_boxes: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Append a text box with the editor defaults and a fresh unique id
    pub fn add_text_box(&mut self) -> &mut TextBox {
        let id = self.next_box_id();
        let index = self.text_boxes.len();
        self.text_boxes.push(TextBox {
            id,
            x: 100.0,
            y: 100.0,
            text: "New Text".to_string(),
            field_name: None,
            font_size: default_font_size(),
            font_family: default_font_family(),
            color: default_color(),
            alignment: Alignment::Left,
            width: None,
            height: None,
        });
        &mut self.text_boxes[index]
    }

    fn next_box_id(&self) -> String {
        let mut n = self.text_boxes.len() as u64 + 1;
        loop {
            let candidate = n.to_string();
            if self.text_boxes.iter().all(|b| b.id != candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Remove a text box, returning whether it existed
    pub fn remove_text_box(&mut self, id: &str) -> bool {
        let before = self.text_boxes.len();
        self.text_boxes.retain(|b| b.id != id);
        self.text_boxes.len() != before
    }

    pub fn text_box(&self, id: &str) -> Option<&TextBox> {
        self.text_boxes.iter().find(|b| b.id == id)
    }

    pub fn text_box_mut(&mut self, id: &str) -> Option<&mut TextBox> {
        self.text_boxes.iter_mut().find(|b| b.id == id)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Add a field definition, validating name shape and uniqueness
    pub fn add_field(&mut self, mut field: FieldDefinition) -> Result<()> {
        if !is_valid_field_name(&field.name) {
            return Err(TemplateError::InvalidFieldName(field.name));
        }
        if self.field(&field.name).is_some() {
            return Err(TemplateError::DuplicateField(field.name));
        }
        if field.label.trim().is_empty() {
            field.label = field.name.clone();
        }
        self.fields.push(field);
        Ok(())
    }

    /// Remove a field and cascade the deletion
    ///
    /// Every box bound to the field reverts to its static text and every
    /// member in `members` loses the key.
    pub fn remove_field(&mut self, name: &str, members: &mut [Member]) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.name != name);
        if self.fields.len() == before {
            return false;
        }

        for text_box in &mut self.text_boxes {
            if text_box.field_name.as_deref() == Some(name) {
                text_box.field_name = None;
            }
        }
        for member in members.iter_mut() {
            member.remove_value(name);
        }
        true
    }
}

/// The full exchanged data set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateData {
    pub template: CertificateTemplate,

    #[serde(default)]
    pub members: Vec<Member>,

    /// ISO-8601 export timestamp
    #[serde(rename = "generatedAt")]
    #[serde(default)]
    pub generated_at: String,
}
