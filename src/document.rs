use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use log::info;
use pdf_writer::{Pdf, Ref};
use std::{io::Write, path::Path};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page(&self, id: Id<Page>) -> Result<&Page, PDFError> {
        self.pages.get(id).ok_or(PDFError::PageMissing)
    }

    pub fn page_mut(&mut self, id: Id<Page>) -> Result<&mut Page, PDFError> {
        self.pages.get_mut(id).ok_or(PDFError::PageMissing)
    }

    /// The pages of the document, in document order
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Add a font to the document. Fonts are stored "globally" within the document, so
    /// text on any page can refer to it through the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document. Like fonts, images are shared by every page and an
    /// image added once can be drawn any number of times.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. The whole document is rendered in memory
    /// first and then written out in one go.
    ///
    /// Until `write` is called, no PDF object references exist; they are all generated
    /// here.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document into a byte buffer
    pub fn to_bytes(self) -> Result<Vec<u8>, PDFError> {
        let mut bytes: Vec<u8> = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Render the document and write it to `path`, replacing any existing file. Nothing
    /// is written if rendering fails.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
