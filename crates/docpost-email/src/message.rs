//! Outbound message types and assembly.

use docpost_render::RenderResult;

/// MIME type of the HTML attachment.
const HTML_MIME: &str = "text/html";

/// A single attachment of an outbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAttachment {
    /// File name presented to the recipient.
    pub file_name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// Raw content bytes.
    pub content: Vec<u8>,
}

/// Inline image part referenced from the body via `cid:`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlinePart {
    /// Content id, identical to the image's attachment file name.
    pub content_id: String,
    /// Raw image bytes.
    pub content: Vec<u8>,
}

/// An assembled message ready for a [`Mailer`](crate::Mailer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line, `"{document name}.html"`.
    pub subject: String,
    /// Rendered HTML body.
    pub html_body: String,
    /// Inline image parts, in extraction order.
    pub inline_images: Vec<InlinePart>,
    /// Attachments: every extracted image followed by the HTML document.
    pub attachments: Vec<EmailAttachment>,
}

/// Assemble an outbound message from a render result.
///
/// The subject and the HTML attachment share the `"{document name}.html"`
/// file name. Every extracted image is attached under its assigned name and
/// also listed as an inline part under the same content id, which keeps the
/// body's `cid:` references resolvable — the name↔bytes pairing established
/// by the renderer is preserved end to end.
#[must_use]
pub fn compose(document_name: &str, result: &RenderResult, to: impl Into<String>) -> EmailMessage {
    let file_name = format!("{document_name}.html");

    let mut attachments: Vec<EmailAttachment> = result
        .images
        .iter()
        .map(|image| EmailAttachment {
            file_name: image.name.clone(),
            mime_type: image.content_type.clone(),
            content: image.bytes.clone(),
        })
        .collect();

    let inline_images = result
        .images
        .iter()
        .map(|image| InlinePart {
            content_id: image.name.clone(),
            content: image.bytes.clone(),
        })
        .collect();

    attachments.push(EmailAttachment {
        file_name: file_name.clone(),
        mime_type: HTML_MIME.to_owned(),
        content: result.html.clone().into_bytes(),
    });

    tracing::debug!(
        "composed message {file_name:?} with {} attachment(s)",
        attachments.len()
    );

    EmailMessage {
        to: to.into(),
        subject: file_name,
        html_body: result.html.clone(),
        inline_images,
        attachments,
    }
}
