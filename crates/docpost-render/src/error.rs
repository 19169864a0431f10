//! Render error types.

/// Error from document rendering.
///
/// Rendering is best-effort: empty paragraphs, unstyled runs and unknown
/// list counters all render silently. The only fatal condition is an image
/// whose content type has no extension mapping, which aborts the whole
/// conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Image content type cannot be mapped to a file extension.
    #[error("unsupported image type: {content_type}")]
    UnsupportedImageType {
        /// Declared content type of the offending image.
        content_type: String,
    },
}
