use crate::units::Pt;

/// Margins are guidelines for layout functions; nothing prevents content from being
/// drawn over them. They are also applied to [`Page`](crate::Page)s to determine the
/// `ArtBox` of each page in the generated PDF.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// The horizontal space left between the left and right margins
    pub fn inner_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }
}
