//! Data set import/export
//!
//! The interchange envelope is `{ template, members, generatedAt }`. The
//! render core never reads these files; import/export is a boundary
//! concern for callers holding the data model.

use crate::schema::{CertificateData, CertificateTemplate, Member};
use crate::{Result, TemplateError};

/// Parse an exchanged data set from JSON
///
/// Member keys that no longer match a field definition are kept as-is;
/// the renderer treats them like any other missing binding.
pub fn parse_data(json: &str) -> Result<CertificateData> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Serialize a data set for exchange
///
/// The image URL is deliberately blanked: the raster is not embedded, and
/// the importer is responsible for re-supplying the image. `generated_at`
/// is injected so callers (and tests) control the clock.
pub fn export_data(
    template: &CertificateTemplate,
    members: &[Member],
    generated_at: &str,
) -> Result<String> {
    let mut template = template.clone();
    template.image_url = String::new();

    let data = CertificateData {
        template,
        members: members.to_vec(),
        generated_at: generated_at.to_string(),
    };

    Ok(serde_json::to_string_pretty(&data)?)
}

/// Current time as the ISO-8601 export stamp
pub fn export_stamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
