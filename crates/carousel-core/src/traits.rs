//! The contracts that bind the slide pipeline together
//!
//! - [`TextMeasure`] - How wide and tall a run of text renders
//! - [`ScalableFont`] - A face that can be realized at a given size
//! - [`Exporter`] - Where a slide sequence becomes file bytes

use crate::{error::Result, types::BitmapData};

/// Metrics of a font realized at one pixel size
///
/// ```ignore
/// struct Monospace(f32);
///
/// impl TextMeasure for Monospace {
///     fn size(&self) -> f32 { self.0 }
///     fn text_width(&self, text: &str) -> f32 { text.chars().count() as f32 * self.0 * 0.5 }
///     fn line_height(&self, _text: &str) -> f32 { self.0 }
/// }
/// ```
pub trait TextMeasure {
    /// The realized size in pixels
    fn size(&self) -> f32;

    /// Horizontal advance of `text` on a single line
    fn text_width(&self, text: &str) -> f32;

    /// Vertical extent a line of `text` occupies
    fn line_height(&self, text: &str) -> f32;
}

/// A font face that can be realized at any size
///
/// Resizing is an explicit operation: the face keeps its source data and
/// hands out sized handles on demand.
pub trait ScalableFont {
    type Sized: TextMeasure;

    fn at_size(&self, size: f32) -> Self::Sized;
}

/// The final step: slides become a downloadable file
pub trait Exporter {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the ordered slide sequence as bytes
    fn export(&self, slides: &[BitmapData]) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;

    /// Default download name, e.g. `carousel.zip`
    fn file_name(&self) -> String {
        format!("carousel.{}", self.extension())
    }
}
