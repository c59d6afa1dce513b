use std::io::Write;

/// A fill colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// Shorthand for [Colour::new_rgb]
pub fn rgb(r: f32, g: f32, b: f32) -> Colour {
    Colour::new_rgb(r, g, b)
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Write the non-stroking colour operator for this colour to a content stream
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_fill<W: Write>(&self, content: &mut W) -> Result<(), std::io::Error> {
        match *self {
            Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
            Colour::Grey { g } => write!(content, "{g} g\n"),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    /// The blue used for page titles
    pub const TITLE_BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.4,
        b: 0.71,
    };
}
