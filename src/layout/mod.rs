//! Text layout utilities for positioning content on pages.
//!
//! - [`layout_paragraph`](crate::layout::layout_paragraph) breaks a paragraph into lines
//!   with a greedy word wrap, starting at the top margin and stepping down one line height
//!   per line.
//! - [`layout_centred_line`](crate::layout::layout_centred_line) places a single line
//!   horizontally centred on the page, for titles.
//!
//! Both functions are pure: they only need something implementing
//! [`FontMetrics`](crate::FontMetrics) and return where each line goes, leaving it to the
//! caller to draw the lines onto a page.
//!
//! # Example
//!
//! ```
//! use pdfgenerator::{layout, pagesize, Pt, StandardFont};
//!
//! let lines = layout::layout_paragraph(
//!     "Hello, world!",
//!     &StandardFont::TimesRoman,
//!     Pt(12.0),
//!     pagesize::LETTER,
//!     Pt(50.0),
//! );
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].coords, (Pt(50.0), Pt(742.0)));
//! ```

mod margins;
mod paragraph;

pub use margins::*;
pub use paragraph::*;
