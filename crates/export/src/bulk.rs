//! Bulk export of a member roster
//!
//! Renders every member through the one canonical render path and writes
//! the results next to the JSON data file, mirroring the layout of the
//! downloadable archive: `certificates/<name>.<ext>` plus
//! `certificate_data.json`. Packaging the directory into a ZIP (or
//! anything else) is the caller's concern.

use crate::{encode_png, wrap_pdf, ExportError, ExportFormat, Result};
use log::{info, warn};
use render_core::{Surface, TemplateImage, TextPainter};
use std::fs;
use std::path::{Path, PathBuf};
use template::{export_data, export_stamp, CertificateRenderer, CertificateTemplate, Member};

/// Date-stamped default name for an export directory or archive
pub fn default_export_name() -> String {
    format!("certificates_{}", chrono::Local::now().format("%Y-%m-%d"))
}

/// Replace every non-alphanumeric character with `_`
pub fn sanitize_filename(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// File name for one member's certificate
///
/// Uses the member's value for the first defined field when present,
/// falling back to `certificate_<member id>`.
pub fn certificate_filename(
    template: &CertificateTemplate,
    member: &Member,
    format: ExportFormat,
) -> String {
    let stem = template
        .fields
        .first()
        .and_then(|field| member.text_value(&field.name))
        .filter(|value| !value.is_empty())
        .map(|value| sanitize_filename(&value))
        .unwrap_or_else(|| format!("certificate_{}", sanitize_filename(&member.id)));

    format!("{stem}.{}", format.extension())
}

fn encode(surface: &Surface, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Png => encode_png(surface),
        ExportFormat::Pdf => wrap_pdf(surface),
    }
}

/// Renders and encodes certificates for a whole roster
pub struct BulkExporter<'a, P> {
    template: &'a CertificateTemplate,
    renderer: CertificateRenderer<'a, P>,
}

impl<'a, P: TextPainter> BulkExporter<'a, P> {
    pub fn new(
        template: &'a CertificateTemplate,
        image: &'a TemplateImage,
        painter: &'a P,
    ) -> Self {
        Self {
            template,
            renderer: CertificateRenderer::new(image, painter),
        }
    }

    /// Render and encode one member
    pub fn render_entry(
        &self,
        member: &Member,
        format: ExportFormat,
    ) -> Result<(String, Vec<u8>)> {
        let surface = self.renderer.render(&self.template.text_boxes, member)?;
        let bytes = encode(&surface, format)?;
        Ok((certificate_filename(self.template, member, format), bytes))
    }

    /// Render the roster into in-memory entries
    ///
    /// For callers that package their own archive. Per-member failures are
    /// collected, never fatal to the rest.
    pub fn export_entries(
        &self,
        members: &[Member],
        format: ExportFormat,
    ) -> (Vec<(String, Vec<u8>)>, Vec<ExportFailure>) {
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for member in members {
            match self.render_entry(member, format) {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    warn!("failed to export certificate for member {}: {error}", member.id);
                    failures.push(ExportFailure {
                        member_id: member.id.clone(),
                        error,
                    });
                }
            }
        }

        (entries, failures)
    }

    /// Render the roster to `<out_dir>/certificates/` plus the data file
    pub fn export_to_dir(
        &self,
        members: &[Member],
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<BulkReport> {
        let cert_dir = out_dir.join("certificates");
        fs::create_dir_all(&cert_dir)?;

        let (entries, failures) = self.export_entries(members, format);

        let mut written = Vec::new();
        for (name, bytes) in entries {
            let path = cert_dir.join(name);
            fs::write(&path, bytes)?;
            written.push(path);
        }

        let json = export_data(self.template, members, &export_stamp())?;
        fs::write(out_dir.join("certificate_data.json"), json)?;

        info!(
            "exported {} certificates ({} failed) to {}",
            written.len(),
            failures.len(),
            out_dir.display()
        );

        Ok(BulkReport { written, failures })
    }
}

/// Outcome of a directory export
#[derive(Debug, Default)]
pub struct BulkReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl BulkReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One member whose certificate could not be produced
#[derive(Debug)]
pub struct ExportFailure {
    pub member_id: String,
    pub error: ExportError,
}
