//! `docpost package` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use docpost_doc::{DocumentSource, JsonSource};
use docpost_email::{EmailMessage, compose};
use docpost_render::DocumentRenderer;
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the package command.
#[derive(Args)]
pub(crate) struct PackageArgs {
    /// Path to the document JSON file.
    pub(crate) document: PathBuf,

    /// Recipient address recorded in the manifest.
    #[arg(long)]
    pub(crate) to: String,

    /// Directory to write the bundle into.
    #[arg(short, long, default_value = ".")]
    pub(crate) out_dir: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Manifest describing the bundle, written as `manifest.json`.
#[derive(Serialize)]
struct Manifest<'a> {
    to: &'a str,
    subject: &'a str,
    attachments: Vec<ManifestEntry<'a>>,
    inline_images: Vec<&'a str>,
}

/// One attachment entry of the manifest.
#[derive(Serialize)]
struct ManifestEntry<'a> {
    file_name: &'a str,
    mime_type: &'a str,
    size: usize,
}

impl Manifest<'_> {
    fn for_message(message: &EmailMessage) -> Manifest<'_> {
        Manifest {
            to: &message.to,
            subject: &message.subject,
            attachments: message
                .attachments
                .iter()
                .map(|attachment| ManifestEntry {
                    file_name: &attachment.file_name,
                    mime_type: &attachment.mime_type,
                    size: attachment.content.len(),
                })
                .collect(),
            inline_images: message
                .inline_images
                .iter()
                .map(|part| part.content_id.as_str())
                .collect(),
        }
    }
}

impl PackageArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let document = JsonSource::new(&self.document).fetch()?;
        tracing::info!("packaging {} for {}", document.name, self.to);
        let result = DocumentRenderer::new().render(&document)?;
        let message = compose(&document.name, &result, self.to);

        fs::create_dir_all(&self.out_dir)?;
        for attachment in &message.attachments {
            fs::write(self.out_dir.join(&attachment.file_name), &attachment.content)?;
        }
        let manifest = serde_json::to_string_pretty(&Manifest::for_message(&message))?;
        fs::write(self.out_dir.join("manifest.json"), manifest)?;

        output.info(&format!("Output: {}", self.out_dir.display()));
        output.success(&format!(
            "Packaged {} for {} ({} attachment(s))",
            message.subject,
            message.to,
            message.attachments.len()
        ));
        Ok(())
    }
}
