use crate::font::StandardFont;
use crate::pagesize::{self, PageSize};
use crate::units::Pt;
use crate::PDFError;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "pdfFiles/pdfgenerator.pdf";
pub const DEFAULT_IMAGE: &str = "images/channel.png";

pub const DEFAULT_TITLE: &str = "PDF Generator";
pub const DEFAULT_BODY: &str = "If you look in the dictionary under perfectionist you see \
    Henry Selick correcting the definition of perfectionist in the dictionary. I mean, he \
    is so meticulous. DON DONNNNNNNNNNNN ";
pub const DEFAULT_MIXED_BODY: &str = "Text and images can share a page. This paragraph \
    starts at the top margin and wraps within the side margins, while the image is centred \
    on the page.";

/// Where the text font comes from
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// One of the standard PDF fonts, which isn't embedded
    Standard(StandardFont),
    /// A TrueType / OpenType file, embedded in full
    File(PathBuf),
}

/// Everything that can be tuned about a generated document. The defaults reproduce the
/// stock document: US Letter pages, Times-Roman, 12pt body text with 50pt margins, a
/// 30pt title, and images drawn at 70% of their pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Where the finished PDF is written
    pub output: PathBuf,
    /// Image drawn on the image page and the mixed page
    pub image: PathBuf,
    pub font: FontSource,
    pub page_size: PageSize,
    pub margin: Pt,
    pub font_size: Pt,
    pub title_size: Pt,
    pub image_scale: f32,
    pub title: String,
    pub body: String,
    pub mixed_body: String,
    /// Files appended one per page after the stock pages, each classified as text or
    /// image by its contents
    pub extra_pages: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output: PathBuf::from(DEFAULT_OUTPUT),
            image: PathBuf::from(DEFAULT_IMAGE),
            font: FontSource::Standard(StandardFont::TimesRoman),
            page_size: pagesize::LETTER,
            margin: Pt(50.0),
            font_size: Pt(12.0),
            title_size: Pt(30.0),
            image_scale: 0.7,
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            mixed_body: DEFAULT_MIXED_BODY.to_string(),
            extra_pages: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Check that the sizes make sense together. Every length must be finite.
    pub fn validate(&self) -> Result<(), PDFError> {
        let (width, height) = self.page_size;
        if !(is_positive(width) && is_positive(height)) {
            return Err(PDFError::InvalidConfig(format!(
                "page size must be positive, got {width} x {height}"
            )));
        }
        if !(self.margin >= Pt(0.0) && self.margin < width / 2.0) {
            return Err(PDFError::InvalidConfig(format!(
                "margin must be at least 0 and less than half the page width, got {}",
                self.margin
            )));
        }
        if !(is_positive(self.font_size) && is_positive(self.title_size)) {
            return Err(PDFError::InvalidConfig("font sizes must be positive".into()));
        }
        if !(self.image_scale.is_finite() && self.image_scale > 0.0) {
            return Err(PDFError::InvalidConfig(format!(
                "image scale must be positive, got {}",
                self.image_scale
            )));
        }
        Ok(())
    }
}

fn is_positive(length: Pt) -> bool {
    length.0.is_finite() && length > Pt(0.0)
}
