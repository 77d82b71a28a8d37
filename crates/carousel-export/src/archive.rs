//! ZIP packaging of PNG slides

use std::io::{Cursor, Write};

use carousel_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::png::encode_png;

/// Entry prefix used when none is given
pub const DEFAULT_PREFIX: &str = "slide";

/// `{prefix}_{NN}.png`, numbered from 1
pub fn slide_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{:02}.png", index + 1)
}

/// In-memory ZIP writer shared by the plain and bundle packagers
pub(crate) struct Archive {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Archive {
    pub(crate) fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    pub(crate) fn add(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.writer
            .start_file(name, self.options)
            .map_err(|e| ExportError::WriteFailed(format!("{name}: {e}")))?;
        self.writer
            .write_all(bytes)
            .map_err(|e| ExportError::WriteFailed(format!("{name}: {e}")))?;
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<Vec<u8>> {
        let cursor = self
            .writer
            .finish()
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// Put every slide, as PNG, into one ZIP
///
/// Entries follow slide order: `{prefix}_01.png`, `{prefix}_02.png`, ...
pub fn package_zip(slides: &[BitmapData], prefix: &str) -> Result<Vec<u8>> {
    if slides.is_empty() {
        return Err(ExportError::NothingToExport.into());
    }

    let mut archive = Archive::new();
    for (idx, slide) in slides.iter().enumerate() {
        archive.add(&slide_file_name(prefix, idx), &encode_png(slide)?)?;
    }
    let bytes = archive.finish()?;

    log::info!("Packed {} slides into {} byte ZIP", slides.len(), bytes.len());
    Ok(bytes)
}

/// ZIP of PNG slides
pub struct ZipExporter {
    prefix: String,
}

impl ZipExporter {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for ZipExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for ZipExporter {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn export(&self, slides: &[BitmapData]) -> Result<Vec<u8>> {
        package_zip(slides, &self.prefix)
    }

    fn extension(&self) -> &'static str {
        "zip"
    }

    fn mime_type(&self) -> &'static str {
        "application/zip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::error::CarouselError;
    use std::io::Read;
    use zip::ZipArchive;

    fn slide(width: u32, height: u32, shade: u8) -> BitmapData {
        BitmapData::rgba(width, height, vec![shade; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn test_file_names_are_padded() {
        assert_eq!(slide_file_name("slide", 0), "slide_01.png");
        assert_eq!(slide_file_name("slide", 9), "slide_10.png");
        assert_eq!(slide_file_name("x", 99), "x_100.png");
    }

    #[test]
    fn test_zip_holds_one_png_per_slide_in_order() {
        let slides = [slide(4, 3, 10), slide(5, 2, 20), slide(1, 1, 30)];
        let bytes = package_zip(&slides, "slide").unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        for (idx, expected) in slides.iter().enumerate() {
            let mut entry = archive.by_index(idx).unwrap();
            assert_eq!(entry.name(), format!("slide_{:02}.png", idx + 1));

            let mut png = Vec::new();
            entry.read_to_end(&mut png).unwrap();
            let decoded = image::load_from_memory(&png).unwrap();
            assert_eq!(decoded.width(), expected.width);
            assert_eq!(decoded.height(), expected.height);
        }
    }

    #[test]
    fn test_empty_zip_is_an_error() {
        assert!(matches!(
            package_zip(&[], "slide"),
            Err(CarouselError::Export(ExportError::NothingToExport))
        ));
    }

    #[test]
    fn test_zip_exporter() {
        let exporter = ZipExporter::with_prefix("post");
        assert_eq!(exporter.mime_type(), "application/zip");
        assert_eq!(exporter.file_name(), "carousel.zip");

        let bytes = exporter.export(&[slide(2, 2, 0)]).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("post_01.png").is_ok());
    }
}
