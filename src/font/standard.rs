use super::FontMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// Advance widths of Times-Roman for the printable ASCII range (0x20..=0x7e) under
/// WinAnsiEncoding, in 1/1000 em
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // ' '..'/'
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444, // '0'..'?'
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, // '@'..'O'
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500, // 'P'..'_'
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500, // '`'..'o'
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, // 'p'..'~'
];

const COURIER_WIDTH: u16 = 600;

/// One of the standard PDF fonts. These are referenced by name and drawn with the
/// viewer's own copy of the font, so nothing is embedded in the document.
///
/// Only printable ASCII is supported; every other character is drawn (and measured)
/// as `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    TimesRoman,
    Courier,
}

impl StandardFont {
    /// Look up a standard font by its PostScript name
    pub fn from_name(name: &str) -> Option<StandardFont> {
        match name {
            "Times-Roman" => Some(StandardFont::TimesRoman),
            "Courier" => Some(StandardFont::Courier),
            _ => None,
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::Courier => "Courier",
        }
    }

    /// The WinAnsiEncoding byte used to draw `ch`
    pub fn encode(&self, ch: char) -> u8 {
        match ch {
            ' '..='~' => ch as u8,
            _ => b'?',
        }
    }

    /// Advance width of `ch` in 1/1000 em
    fn char_width(&self, ch: char) -> u16 {
        match self {
            StandardFont::TimesRoman => TIMES_ROMAN_WIDTHS[(self.encode(ch) - b' ') as usize],
            StandardFont::Courier => COURIER_WIDTH,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.get_or_gen(RefType::Font(font_index));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl FontMetrics for StandardFont {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        Pt(units as f32 * size.0 / 1000.0)
    }
}
