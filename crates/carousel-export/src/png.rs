//! PNG export format
//!
//! Slides are encoded with the `image` crate's PNG encoder.

use image::{ImageEncoder, RgbaImage};
use carousel_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

/// Encode one slide as PNG
///
/// Rgb8 and Gray8 input is widened to RGBA8 first; a buffer that does not
/// match its dimensions is rejected.
pub fn encode_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    let bitmap = bitmap.clone().into_rgba8()?;
    let (width, height) = (bitmap.width, bitmap.height);

    let img = RgbaImage::from_raw(width, height, bitmap.data).ok_or_else(|| {
        ExportError::EncodingFailed(format!("{width}x{height} buffer does not fit an RGBA image"))
    })?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// Exports the first slide of a sequence as a single PNG
///
/// # Examples
///
/// ```
/// use carousel_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, slides: &[BitmapData]) -> Result<Vec<u8>> {
        let first = slides.first().ok_or(ExportError::NothingToExport)?;
        if slides.len() > 1 {
            log::debug!("PNG export keeps slide 1 of {}", slides.len());
        }
        encode_png(first)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{error::CarouselError, types::BitmapFormat};

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
        assert_eq!(exporter.file_name(), "carousel.png");
    }

    #[test]
    fn test_png_export_rgba() {
        let bitmap = BitmapData::rgba(
            2,
            2,
            vec![
                255, 0, 0, 255, // Red
                0, 255, 0, 255, // Green
                0, 0, 255, 255, // Blue
                255, 255, 255, 255, // White
            ],
        )
        .unwrap();

        let png_data = encode_png(&bitmap).unwrap();
        assert_eq!(&png_data[0..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&png_data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_png_export_grayscale() {
        let bitmap = BitmapData {
            width: 2,
            height: 2,
            format: BitmapFormat::Gray8,
            data: vec![0, 128, 192, 255],
        };

        let png_data = PngExporter::new().export(&[bitmap]).unwrap();
        assert_eq!(&png_data[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_rejects_short_buffer() {
        let bitmap = BitmapData {
            width: 4,
            height: 4,
            format: BitmapFormat::Rgba8,
            data: vec![0; 10],
        };
        assert!(encode_png(&bitmap).is_err());
    }

    #[test]
    fn test_png_empty_sequence() {
        assert!(matches!(
            PngExporter::default().export(&[]),
            Err(CarouselError::Export(ExportError::NothingToExport))
        ));
    }
}
