use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred, typically reading an input file or writing the output
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),

    #[error("Unknown content type")]
    /// Content was neither recognisable text nor a recognisable image
    UnknownContentType,

    #[error("Invalid configuration: {0}")]
    /// A generator setting is out of range or refers to something unknown
    InvalidConfig(String),

    #[error("Page is not part of the document")]
    /// A page id was used that doesn't refer to a page in the document
    PageMissing,

    #[error("Image is not part of the document")]
    /// An image id was used that doesn't refer to an image in the document
    ImageMissing,
}
