//! `docpost convert` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use docpost_doc::{DocumentSource, JsonSource};
use docpost_render::DocumentRenderer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the document JSON file.
    pub(crate) document: PathBuf,

    /// Directory to write the HTML and image files into.
    #[arg(short, long, default_value = ".")]
    pub(crate) out_dir: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConvertArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let document = JsonSource::new(&self.document).fetch()?;
        tracing::info!("converting {} ({} blocks)", document.name, document.body.len());
        let result = DocumentRenderer::new().render(&document)?;

        fs::create_dir_all(&self.out_dir)?;
        let html_path = self.out_dir.join(format!("{}.html", document.name));
        fs::write(&html_path, &result.html)?;
        for image in &result.images {
            fs::write(self.out_dir.join(&image.name), &image.bytes)?;
        }

        output.info(&format!("Output: {}", html_path.display()));
        output.success(&format!(
            "Converted {} ({} image(s))",
            document.name,
            result.images.len()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use docpost_doc::{Document, InlineImage, Node, Paragraph, TextRun};
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_document(dir: &std::path::Path, document: &Document) -> PathBuf {
        let path = dir.join("doc.json");
        fs::write(&path, serde_json::to_string(document).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_convert_writes_html_and_images() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        let document = Document {
            name: "notes".to_owned(),
            body: vec![Node::Paragraph(Paragraph::new(vec![
                Node::Text(TextRun::plain("Hello")),
                Node::InlineImage(InlineImage {
                    content_type: "image/png".to_owned(),
                    bytes: vec![1, 2, 3],
                }),
            ]))],
        };
        let doc_path = write_document(dir.path(), &document);

        let args = ConvertArgs {
            document: doc_path,
            out_dir: out_dir.clone(),
            verbose: false,
        };
        args.execute(&Output::new()).unwrap();

        let html = fs::read_to_string(out_dir.join("notes.html")).unwrap();
        assert_eq!(html, r#"<p>Hello<img src="cid:Image_0.png" /></p>"#);
        assert_eq!(fs::read(out_dir.join("Image_0.png")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_convert_missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            document: dir.path().join("missing.json"),
            out_dir: dir.path().to_path_buf(),
            verbose: false,
        };
        let result = args.execute(&Output::new());
        assert!(matches!(result, Err(CliError::Source(_))));
    }

    #[test]
    fn test_convert_unsupported_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let document = Document {
            name: "bad".to_owned(),
            body: vec![Node::Paragraph(Paragraph::new(vec![Node::InlineImage(
                InlineImage {
                    content_type: "image/bmp".to_owned(),
                    bytes: vec![1],
                },
            )]))],
        };
        let doc_path = write_document(dir.path(), &document);

        let args = ConvertArgs {
            document: doc_path,
            out_dir: dir.path().join("out"),
            verbose: false,
        };
        let result = args.execute(&Output::new());
        assert!(matches!(result, Err(CliError::Render(_))));
        // Conversion aborts before anything is written.
        assert!(!dir.path().join("out").join("bad.html").exists());
    }
}
