//! Fonts and font metrics.
//!
//! A [Font] is either one of the PDF standard fonts, which every viewer ships and which
//! are therefore never embedded, or a parsed TrueType / OpenType face which is embedded
//! in its entirety. Both expose their advance widths through [FontMetrics], which is the
//! only thing the layout engine needs to know about a font.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::refs::ObjectReferences;
use crate::units::Pt;
use pdf_writer::Pdf;
use std::path::Path;

/// Measures how wide a string renders at a given font size
pub trait FontMetrics {
    /// The total horizontal advance of `text` when set at `size`. No kerning is applied.
    fn width_of_text(&self, text: &str, size: Pt) -> Pt;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        (**self).width_of_text(text, size)
    }
}

/// A font that can be referenced by text on any page of a document
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Load and parse a TrueType / OpenType font file from disk
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, crate::PDFError> {
        let bytes = std::fs::read(path)?;
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    /// Encode text as the hex string operand of a `Tj` operator for this font
    pub fn encode_hex(&self, text: &str) -> String {
        match self {
            Font::Standard(font) => text
                .chars()
                .map(|ch| format!("{:02x}", font.encode(ch)))
                .collect(),
            Font::TrueType(font) => text
                .chars()
                .map(|ch| format!("{:04x}", font.glyph_id(ch)))
                .collect(),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => font.write(refs, font_index, writer),
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

impl From<TrueTypeFont> for Font {
    fn from(font: TrueTypeFont) -> Self {
        Font::TrueType(font)
    }
}

impl FontMetrics for Font {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.width_of_text(text, size),
            Font::TrueType(font) => font.width_of_text(text, size),
        }
    }
}
