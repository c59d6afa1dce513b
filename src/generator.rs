//! Assembles documents: creates pages, routes [Content] onto them, and saves the result.

use crate::colour::{colours, Colour};
use crate::config::{FontSource, GeneratorConfig};
use crate::content::Content;
use crate::document::Document;
use crate::font::Font;
use crate::image::Image;
use crate::info::Info;
use crate::layout::{self, LineLayout, Margins};
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;
use log::{debug, info};
use std::path::Path;

/// Owns a [Document] for the duration of one generation run. Every call completes
/// before the next one starts, and the first error abandons the run.
pub struct Generator {
    document: Document,
    font: Id<Font>,
    config: GeneratorConfig,
}

impl Generator {
    /// Start an empty document, loading the configured font into it
    pub fn new(config: GeneratorConfig) -> Result<Generator, PDFError> {
        config.validate()?;

        let mut document = Document::default();
        document.set_info(Info::new().title(&config.title).clone());

        let font = match &config.font {
            FontSource::Standard(font) => Font::Standard(*font),
            FontSource::File(path) => Font::load_from_disk(path)?,
        };
        let font = document.add_font(font);

        Ok(Generator {
            document,
            font,
            config,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Append an empty page of the configured size
    pub fn add_page(&mut self) -> Id<Page> {
        let page = Page::new(self.config.page_size, Some(Margins::all(self.config.margin)));
        let id = self.document.add_page(page);
        info!("added page {}", self.document.page_order.len());
        id
    }

    /// Draw `content` onto `page`: text becomes a word-wrapped paragraph, and an image
    /// is embedded and drawn centred
    pub fn add_page_content(&mut self, page: Id<Page>, content: Content) -> Result<(), PDFError> {
        debug!("adding {} content to page {}", content.kind(), page.index());
        match content {
            Content::Text(text) => self.add_paragraph(page, &text),
            Content::Image(data) => self.add_image(page, &data).map(|_| ()),
        }
    }

    /// Lay out a paragraph from the top margin down, in black at the body font size
    pub fn add_paragraph(&mut self, page: Id<Page>, text: &str) -> Result<(), PDFError> {
        let page_size = self.document.page(page)?.size();
        let lines = layout::layout_paragraph(
            text,
            &self.document.fonts[self.font],
            self.config.font_size,
            page_size,
            self.config.margin,
        );
        let spans = self.spans(lines, self.config.font_size, colours::BLACK);
        self.document.page_mut(page)?.add_spans(spans);
        Ok(())
    }

    /// Draw a single centred title line, four title-heights below the top of the page
    pub fn add_title(&mut self, page: Id<Page>, title: &str) -> Result<(), PDFError> {
        let page_size = self.document.page(page)?.size();
        let line = layout::layout_centred_line(
            title,
            &self.document.fonts[self.font],
            self.config.title_size,
            page_size,
            self.config.title_size * 4.0,
        );
        let spans = self.spans(vec![line], self.config.title_size, colours::TITLE_BLUE);
        self.document.page_mut(page)?.add_spans(spans);
        Ok(())
    }

    /// Embed encoded image data and draw it centred on the page, scaled by the
    /// configured image scale. The returned id can be passed to
    /// [Generator::place_image] to draw the same image again without embedding it twice.
    pub fn add_image(&mut self, page: Id<Page>, data: &[u8]) -> Result<Id<Image>, PDFError> {
        self.document.page(page)?;
        let image_id = self.document.add_image(Image::from_bytes(data)?);
        self.place_image(page, image_id)?;
        Ok(image_id)
    }

    /// Draw an image already embedded in the document centred on the page
    pub fn place_image(&mut self, page: Id<Page>, image_id: Id<Image>) -> Result<(), PDFError> {
        let (page_width, page_height) = self.document.page(page)?.size();
        let image = self.document.images.get(image_id).ok_or(PDFError::ImageMissing)?;
        let (width, height) = image.scale(self.config.image_scale);
        let position = Rect::centred_at((page_width / 2.0, page_height / 2.0), width, height);

        self.document
            .page_mut(page)?
            .add_image(ImageLayout { image_id, position });
        Ok(())
    }

    fn spans(&self, lines: Vec<LineLayout>, size: Pt, colour: Colour) -> Vec<SpanLayout> {
        lines
            .into_iter()
            .map(|line| SpanLayout {
                text: line.text,
                font: SpanFont {
                    id: self.font,
                    size,
                },
                colour,
                coords: line.coords,
            })
            .collect()
    }

    /// Render the document to bytes
    pub fn finish(self) -> Result<Vec<u8>, PDFError> {
        self.document.to_bytes()
    }

    /// Render the document and write it to `path`, creating missing parent directories
    /// and replacing any existing file
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.document.save(path)
    }
}

/// Build the stock document: a title and paragraph page, an image page, and a page
/// with both a paragraph and the image, followed by any extra pages from the config
pub fn build(config: GeneratorConfig) -> Result<Generator, PDFError> {
    let image = std::fs::read(&config.image)?;
    let body = config.body.clone();
    let mixed_body = config.mixed_body.clone();
    let title = config.title.clone();
    let extra_pages = config.extra_pages.clone();

    let mut generator = Generator::new(config)?;

    let page = generator.add_page();
    generator.add_title(page, &title)?;
    generator.add_page_content(page, Content::Text(body))?;

    let page = generator.add_page();
    let image = generator.add_image(page, &image)?;

    let page = generator.add_page();
    generator.add_page_content(page, Content::Text(mixed_body))?;
    generator.place_image(page, image)?;

    for path in extra_pages {
        let content = Content::try_from(std::fs::read(&path)?)?;
        let page = generator.add_page();
        generator.add_page_content(page, content)?;
    }

    Ok(generator)
}

/// Build the stock document and save it to the configured output path
pub fn create_pdf(config: GeneratorConfig) -> Result<(), PDFError> {
    let output = config.output.clone();
    build(config)?.save(output)
}
