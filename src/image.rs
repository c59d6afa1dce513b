use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use image::{ColorType, DynamicImage, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

pub enum ImageData {
    /// Baseline RGB JPEG data, which PDF can display without re-encoding
    Jpeg(Vec<u8>),
    /// Any other decoded image, re-encoded with Flate when written
    Raster(DynamicImage),
}

/// A raster image which can be drawn onto any page of a document
pub struct Image {
    pub data: ImageData,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

/// Whether `data` starts with the signature of an image format we can decode
pub fn is_image(data: &[u8]) -> bool {
    image::guess_format(data).is_ok()
}

impl Image {
    /// Decode an image, detecting its format from its contents
    pub fn from_bytes(data: &[u8]) -> Result<Image, image::ImageError> {
        let format = image::guess_format(data)?;
        Self::from_bytes_with_format(data, format)
    }

    fn from_bytes_with_format(data: &[u8], format: ImageFormat) -> Result<Image, image::ImageError> {
        let image = image::load_from_memory_with_format(data, format)?;
        let (width, height) = (image.width(), image.height());

        let data = match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => ImageData::Jpeg(data.to_vec()),
            _ => ImageData::Raster(image),
        };

        Ok(Image {
            data,
            width,
            height,
        })
    }

    /// The size of the image when drawn at `factor` times its pixel size, taking one
    /// pixel as one point
    pub fn scale(&self, factor: f32) -> (Pt, Pt) {
        (
            Pt(self.width as f32 * factor),
            Pt(self.height as f32 * factor),
        )
    }

    fn encode(&self) -> EncodeOutput {
        match &self.data {
            ImageData::Jpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            ImageData::Raster(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes: compress_to_vec_zlib(image.to_rgb8().as_raw(), level),
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.get_or_gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
