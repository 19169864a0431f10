//! Inline image extraction.
//!
//! Images are pulled out of the document during traversal and replaced by
//! `<img src="cid:NAME" />` placeholders. The assigned names double as
//! attachment file names and `cid` content ids, so the caller can attach the
//! bytes under the same name and the references resolve.

use std::fmt::Write;

use docpost_doc::InlineImage;

use crate::error::RenderError;

/// An image extracted during rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Assigned file name (e.g. `Image_0.png`), unique within one conversion.
    pub name: String,
    /// Declared MIME type of the image.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// Ordered registry of images extracted so far.
///
/// Names embed the registry length at append time, so they are stable only
/// under the single-pass, strictly ordered traversal the renderer performs.
#[derive(Debug, Default)]
pub(crate) struct ImageRegistry {
    images: Vec<ExtractedImage>,
}

impl ImageRegistry {
    /// Extract one image: append the placeholder tag to `out` and record the
    /// bytes under the assigned name.
    ///
    /// Fails without touching the registry when the content type is not a
    /// supported image format.
    pub fn extract(&mut self, image: &InlineImage, out: &mut String) -> Result<(), RenderError> {
        let extension =
            extension_for(&image.content_type).ok_or_else(|| RenderError::UnsupportedImageType {
                content_type: image.content_type.clone(),
            })?;
        let name = format!("Image_{}{extension}", self.images.len());
        tracing::debug!("extracted inline image {name} ({})", image.content_type);
        write!(out, r#"<img src="cid:{name}" />"#).unwrap();
        self.images.push(ExtractedImage {
            name,
            content_type: image.content_type.clone(),
            bytes: image.bytes.clone(),
        });
        Ok(())
    }

    /// Consume the registry, yielding images in extraction order.
    pub fn into_images(self) -> Vec<ExtractedImage> {
        self.images
    }
}

/// File extension for a supported image content type.
fn extension_for(content_type: &str) -> Option<&'static str> {
    if content_type.ends_with("/png") {
        Some(".png")
    } else if content_type.ends_with("/gif") {
        Some(".gif")
    } else if content_type.ends_with("/jpeg") || content_type.ends_with("/jpg") {
        Some(".jpg")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> InlineImage {
        InlineImage {
            content_type: "image/png".to_owned(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[test]
    fn test_first_image_named_image_0() {
        let mut registry = ImageRegistry::default();
        let mut out = String::new();
        registry.extract(&png(), &mut out).unwrap();

        assert_eq!(out, r#"<img src="cid:Image_0.png" />"#);
        let images = registry.into_images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "Image_0.png");
        assert_eq!(images[0].content_type, "image/png");
        assert_eq!(images[0].bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn test_names_follow_registry_length() {
        let mut registry = ImageRegistry::default();
        let mut out = String::new();
        registry.extract(&png(), &mut out).unwrap();
        registry
            .extract(
                &InlineImage {
                    content_type: "image/gif".to_owned(),
                    bytes: vec![1],
                },
                &mut out,
            )
            .unwrap();

        let images = registry.into_images();
        assert_eq!(images[0].name, "Image_0.png");
        assert_eq!(images[1].name, "Image_1.gif");
    }

    #[test]
    fn test_jpeg_variants_share_extension() {
        assert_eq!(extension_for("image/jpeg"), Some(".jpg"));
        assert_eq!(extension_for("image/jpg"), Some(".jpg"));
    }

    #[test]
    fn test_unsupported_type_leaves_registry_untouched() {
        let mut registry = ImageRegistry::default();
        let mut out = String::new();
        let result = registry.extract(
            &InlineImage {
                content_type: "image/bmp".to_owned(),
                bytes: vec![1, 2, 3],
            },
            &mut out,
        );

        assert!(matches!(
            result,
            Err(RenderError::UnsupportedImageType { ref content_type }) if content_type == "image/bmp"
        ));
        assert!(out.is_empty());
        assert!(registry.into_images().is_empty());
    }
}
