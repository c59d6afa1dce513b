use super::FontMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A parsed TrueType / OpenType font. The whole font file is embedded in the generated
/// PDF, so large fonts will noticeably increase the size of the output.
pub struct TrueTypeFont {
    pub face: OwnedFace,
}

impl TrueTypeFont {
    /// Parse a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, owned_ttf_parser::FaceParsingError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// The glyph used to draw `ch`, falling back to the replacement character,
    /// then `?`, then `.notdef`
    pub fn glyph_id(&self, ch: char) -> u16 {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or_default()
    }

    fn advance(&self, gid: u16) -> u16 {
        self.face()
            .glyph_hor_advance(GlyphId(gid))
            .unwrap_or_default()
    }

    /// Scale factor from font units to the 1/1000 em glyph space PDF uses
    fn glyph_space_scaling(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    /// The PostScript name of the font, or a generated name if it has none
    pub fn postscript_name(&self, font_index: usize) -> String {
        self.face()
            .names()
            .into_iter()
            .filter(|name| name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|name| name.to_string())
            .map(|name| name.replace(' ', ""))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("F{font_index}"))
    }

    /// Every glyph reachable from a unicode cmap subtable, ordered by glyph id
    fn unicode_glyphs(&self) -> BTreeMap<u16, char> {
        let mut glyphs: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return glyphs;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    glyphs.entry(gid.0).or_insert(ch);
                }
            });
        }

        glyphs
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let base_font = self.postscript_name(font_index);
        let glyphs = self.unicode_glyphs();

        let font_id = refs.get_or_gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid_font(refs, font_index, &base_font, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid_font(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, base_font, writer);
        let scaling = self.glyph_space_scaling();

        let id = refs.gen(RefType::CidFont(font_index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(self.advance(0) as f32 * scaling);

        let mut widths = cid_font.widths();
        let advances = glyphs
            .keys()
            .map(|&gid| (gid, self.advance(gid) as f32 * scaling));
        for (start, run) in width_runs(advances) {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        writer: &mut Pdf,
    ) -> Ref {
        let face = self.face();
        let scaling = self.glyph_space_scaling();

        let data_id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        writer
            .stream(data_id, data)
            .pair(Name(b"Length1"), data.len() as i32);

        let mut flags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let bbox = face.global_bounding_box();
        let cap_height = face.capital_height().unwrap_or(face.ascender());

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.cap_height(cap_height as f32 * scaling);
        // not recorded in TrueType fonts; a common approximation
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let cmap = to_unicode_cmap(glyphs);
        let compressed = compress_to_vec_zlib(cmap.as_bytes(), CompressionLevel::DefaultLevel as u8);
        let id = refs.gen(RefType::ToUnicode(font_index));
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

/// Group `(glyph id, width)` pairs, sorted by glyph id, into runs of consecutive ids
fn width_runs(advances: impl IntoIterator<Item = (u16, f32)>) -> Vec<(u16, Vec<f32>)> {
    let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
    for (gid, width) in advances {
        match runs.last_mut() {
            Some((start, run)) if *start as usize + run.len() == gid as usize => run.push(width),
            _ => runs.push((gid, vec![width])),
        }
    }
    runs
}

/// The ToUnicode cmap mapping each glyph id back to its UTF-16 text
fn to_unicode_cmap(glyphs: &BTreeMap<u16, char>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    // bfchar sections hold at most 100 entries each
    let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, &ch)| (gid, ch)).collect();
    for block in entries.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for &(gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
        }
        cmap.push_str("endbfchar\n");
    }
    cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");
    cmap
}

impl FontMetrics for TrueTypeFont {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.advance(self.glyph_id(ch)) as u32)
            .sum();
        Pt(units as f32 * size.0 / self.face().units_per_em() as f32)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MONO: &[u8] = include_bytes!("../../tests/fonts/DejaVuSansMono.ttf");

    fn mono() -> TrueTypeFont {
        TrueTypeFont::load(MONO.to_vec()).unwrap()
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(TrueTypeFont::load(b"definitely not a font".to_vec()).is_err());
    }

    #[test]
    fn widths_follow_the_horizontal_advances() {
        let font = mono();
        let face = font.face();
        let upem = face.units_per_em() as f32;
        let advance = |ch: char| {
            let gid = face.glyph_index(ch).unwrap();
            face.glyph_hor_advance(gid).unwrap() as f32
        };

        let expected = (advance('H') + advance('i')) * 12.0 / upem;
        let width = font.width_of_text("Hi", Pt(12.0));
        assert!((width.0 - expected).abs() < 1e-4, "{} != {expected}", width.0);

        // monospaced, so every ASCII letter is the same width
        assert_eq!(
            font.width_of_text("iiii", Pt(10.0)),
            font.width_of_text("WWWW", Pt(10.0))
        );
        assert_eq!(font.width_of_text("", Pt(10.0)), Pt(0.0));
    }

    #[test]
    fn unmapped_characters_use_the_fallback_glyph() {
        let font = mono();
        let face = font.face();
        let fallback = face
            .glyph_index('\u{FFFD}')
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or_default();

        assert_eq!(font.glyph_id('A'), face.glyph_index('A').unwrap().0);
        assert_ne!(font.glyph_id('A'), fallback);
        // supplementary private use, outside the BMP
        assert_eq!(font.glyph_id('\u{10FFFD}'), fallback);
        assert_eq!(
            font.width_of_text("\u{10FFFD}", Pt(10.0)),
            Pt(font.advance(fallback) as f32 * 10.0 / face.units_per_em() as f32)
        );
    }

    #[test]
    fn postscript_name_has_no_spaces() {
        assert_eq!(mono().postscript_name(0), "DejaVuSansMono");
    }

    #[test]
    fn unicode_glyphs_cover_ascii() {
        let font = mono();
        let glyphs = font.unicode_glyphs();
        assert_eq!(glyphs.get(&font.glyph_id('A')), Some(&'A'));
        assert!(!glyphs.contains_key(&0));
    }

    #[test]
    fn widths_are_grouped_into_consecutive_runs() {
        let runs = width_runs([(3, 1.0), (4, 2.0), (5, 3.0), (9, 4.0), (11, 5.0), (12, 6.0)]);
        assert_eq!(
            runs,
            vec![
                (3, vec![1.0, 2.0, 3.0]),
                (9, vec![4.0]),
                (11, vec![5.0, 6.0]),
            ]
        );
        assert!(width_runs([]).is_empty());
    }

    #[test]
    fn cmap_splits_bfchar_blocks_at_one_hundred() {
        let glyphs: BTreeMap<u16, char> = (1..=250u16)
            .map(|gid| (gid, char::from_u32(0x4e00 + gid as u32).unwrap()))
            .collect();
        let cmap = to_unicode_cmap(&glyphs);

        assert_eq!(cmap.matches("100 beginbfchar").count(), 2);
        assert_eq!(cmap.matches("50 beginbfchar").count(), 1);
        assert_eq!(cmap.matches("endbfchar").count(), 3);
        assert!(cmap.contains("<0001> <4e01>\n"));
        assert!(cmap.contains("<00fa> <4efa>\n"));
    }

    #[test]
    fn cmap_writes_surrogate_pairs_outside_the_bmp() {
        let glyphs = BTreeMap::from([(7u16, '\u{1D11E}'), (8, 'A')]);
        let cmap = to_unicode_cmap(&glyphs);
        assert!(cmap.contains("2 beginbfchar\n"));
        assert!(cmap.contains("<0007> <d834dd1e>\n"));
        assert!(cmap.contains("<0008> <0041>\n"));
    }
}
