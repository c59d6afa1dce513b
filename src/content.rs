//! Content that can be placed on a page through the generator.

use crate::PDFError;

/// A unit of page material: either a paragraph of text or an encoded image
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Content {
    /// A paragraph, laid out with a greedy word wrap
    Text(String),
    /// Encoded image data (PNG, JPEG, ...), drawn centred on the page
    Image(Vec<u8>),
}

impl Content {
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Image(_) => "image",
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

/// Classifies raw data, such as a file read from disk. Data carrying a recognised image
/// signature is an image, otherwise valid UTF-8 is text, and anything else is rejected
/// with [PDFError::UnknownContentType].
impl TryFrom<Vec<u8>> for Content {
    type Error = PDFError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        if crate::image::is_image(&data) {
            return Ok(Content::Image(data));
        }
        String::from_utf8(data)
            .map(Content::Text)
            .map_err(|_| PDFError::UnknownContentType)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn utf8_is_text() {
        let content = Content::try_from(b"hello there".to_vec()).unwrap();
        assert_eq!(content, Content::Text("hello there".to_string()));
        assert_eq!(content.kind(), "text");
    }

    #[test]
    fn image_signatures_are_images() {
        let content = Content::try_from(PNG_SIGNATURE.to_vec()).unwrap();
        assert_eq!(content.kind(), "image");
    }

    #[test]
    fn other_bytes_are_rejected() {
        let err = Content::try_from(vec![0xff, 0xfe, 0x00, 0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, PDFError::UnknownContentType));
        assert_eq!(err.to_string(), "Unknown content type");
    }
}
