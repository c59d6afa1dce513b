mod colour;
pub use colour::*;

pub mod config;
pub use config::{FontSource, GeneratorConfig};

mod content;
pub use content::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

pub mod generator;
pub use generator::{create_pdf, Generator};

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout text on pages
pub mod layout;

mod page;
pub use page::*;

/// Standard page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the PDF object writer used to serialise documents
pub use pdf_writer;
