//! Moving pixels between tiny-skia, `image` and [`BitmapData`]
//!
//! tiny-skia keeps premultiplied RGBA, `image` and the rest of the
//! pipeline keep straight RGBA. Everything crossing a crate boundary is
//! straight RGBA8.

use carousel_core::{
    error::{RenderError, Result},
    types::BitmapData,
};
use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

/// Allocate a transparent pixmap, mapping allocation failure to an error
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height)
        .ok_or_else(|| RenderError::PixmapCreationFailed { width, height }.into())
}

pub fn pixmap_to_bitmap(pixmap: &Pixmap) -> BitmapData {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    BitmapData {
        width: pixmap.width(),
        height: pixmap.height(),
        format: carousel_core::types::BitmapFormat::Rgba8,
        data,
    }
}

/// Load a bitmap into a drawable pixmap, coercing its pixel format first
pub fn bitmap_to_pixmap(bitmap: BitmapData) -> Result<Pixmap> {
    let bitmap = bitmap.into_rgba8()?;
    let mut pixmap = new_pixmap(bitmap.width, bitmap.height)?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(bitmap.data.chunks_exact(4)) {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Ok(pixmap)
}

pub fn pixmap_to_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let bitmap = pixmap_to_bitmap(pixmap);
    let (width, height) = (bitmap.width, bitmap.height);
    RgbaImage::from_raw(width, height, bitmap.data)
        .ok_or_else(|| RenderError::PixmapCreationFailed { width, height }.into())
}

pub fn image_to_bitmap(image: RgbaImage) -> BitmapData {
    BitmapData {
        width: image.width(),
        height: image.height(),
        format: carousel_core::types::BitmapFormat::Rgba8,
        data: image.into_raw(),
    }
}

/// Gaussian blur for the soft-grain and mesh styles
///
/// Large radii use the box-blur approximation; sigma is capped so the
/// kernel never spans more than the image itself.
pub fn gaussian_blur(image: &RgbaImage, sigma: f32) -> RgbaImage {
    let cap = (image.width().min(image.height()) as f32 / 6.0).max(0.5);
    let sigma = sigma.min(cap);
    if sigma <= 2.0 {
        image::imageops::blur(image, sigma)
    } else {
        image::imageops::fast_blur(image, sigma)
    }
}
