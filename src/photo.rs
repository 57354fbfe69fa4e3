//! Meeting photo processing.
//!
//! Normalizes uploaded images so the stored asset displays correctly
//! without metadata: the EXIF orientation is baked into the pixels and the
//! result is bounded and re-encoded at a fixed quality. CPU-bound; run on
//! a blocking thread.

use anyhow::{Context, Result};
use image::{codecs::jpeg::JpegEncoder, DynamicImage};
use std::io::Cursor;

pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;
const JPEG_QUALITY: u8 = 85;

/// Output of one processing pass; always JPEG.
#[derive(Debug)]
pub struct ProcessedPhoto {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";
pub const PHOTO_EXTENSION: &str = "jpg";

/// EXIF orientation tag value (1 when absent or unreadable).
fn exif_orientation(bytes: &[u8]) -> u32 {
    exif::Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()
        .and_then(|ex| {
            ex.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

/// Bake the EXIF orientation into the pixels.
fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

/// Decode, reorient, downscale to fit 1920x1080 (never upscale), and
/// transcode to JPEG at quality 85.
pub fn process(bytes: &[u8]) -> Result<ProcessedPhoto> {
    let orientation = exif_orientation(bytes);

    let img = image::load_from_memory(bytes).context("decoding uploaded image")?;
    let img = apply_orientation(img, orientation);

    let img = if img.width() > MAX_WIDTH || img.height() > MAX_HEIGHT {
        img.resize(MAX_WIDTH, MAX_HEIGHT, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel.
    let img = DynamicImage::ImageRgb8(img.to_rgb8());
    let (width, height) = (img.width(), img.height());

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    img.write_with_encoder(encoder)
        .context("encoding processed image")?;

    Ok(ProcessedPhoto {
        bytes: out,
        width,
        height,
    })
}
