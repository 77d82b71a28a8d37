//! Font handles for slide text
//!
//! A [`FontFace`] owns the decoded font source; a [`SizedFont`] is that
//! face realized at one pixel size. Resizing is always explicit through
//! [`FontFace::at_size`], and both handles are cheap to clone and share
//! read-only across every slide of a batch.
//!
//! Faces that cannot be loaded fall back to a built-in 8×8 bitmap face,
//! so a batch never fails for lack of a font.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use carousel_core::{
    error::{FontLoadError, Result},
    Color, ScalableFont, TextMeasure,
};
use tiny_skia::{Paint, Pixmap};

mod builtin;
mod outline;

use outline::LineMetrics;

enum FontSource {
    Outline { data: Vec<u8>, face_index: u32 },
    Builtin,
}

/// A decoded font, independent of size
#[derive(Clone)]
pub struct FontFace {
    source: Arc<FontSource>,
}

impl FontFace {
    /// The bitmap face used when nothing else is available
    pub fn builtin() -> Self {
        Self {
            source: Arc::new(FontSource::Builtin),
        }
    }

    /// Turns raw TrueType/OpenType bytes into a face
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Picks one face out of a collection (TTC/OTC)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        skrifa::FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;
        Ok(Self {
            source: Arc::new(FontSource::Outline { data, face_index }),
        })
    }

    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        Self::from_data(data)
    }

    /// Uses `data` when it decodes, the built-in face otherwise
    pub fn from_data_or_builtin(data: Option<Vec<u8>>) -> Self {
        match data.map(Self::from_data) {
            Some(Ok(face)) => face,
            Some(Err(e)) => {
                log::warn!("Falling back to built-in font: {}", e);
                Self::builtin()
            },
            None => Self::builtin(),
        }
    }

    /// Uses the file at `path` when it loads, the built-in face otherwise
    pub fn from_file_or_builtin(path: Option<&Path>) -> Self {
        match path.map(Self::from_file) {
            Some(Ok(face)) => face,
            Some(Err(e)) => {
                log::warn!("Falling back to built-in font: {}", e);
                Self::builtin()
            },
            None => Self::builtin(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(*self.source, FontSource::Builtin)
    }

    /// Creates a FontRef on-demand for parsing operations
    fn font_ref(&self) -> Option<skrifa::FontRef<'_>> {
        match &*self.source {
            FontSource::Outline { data, face_index } => {
                skrifa::FontRef::from_index(data, *face_index).ok()
            },
            FontSource::Builtin => None,
        }
    }

    /// Realize this face at `size` pixels per em
    pub fn at_size(&self, size: f32) -> SizedFont {
        let size = size.max(1.0);
        let metrics = match self.font_ref() {
            Some(font) => outline::line_metrics(&font, size),
            None => LineMetrics {
                ascent: size,
                descent: 0.0,
            },
        };
        SizedFont {
            face: self.clone(),
            size,
            metrics,
        }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.source {
            FontSource::Outline { data, face_index } => f
                .debug_struct("FontFace")
                .field("bytes", &data.len())
                .field("face_index", face_index)
                .finish(),
            FontSource::Builtin => f.write_str("FontFace(builtin)"),
        }
    }
}

impl ScalableFont for FontFace {
    type Sized = SizedFont;

    fn at_size(&self, size: f32) -> SizedFont {
        FontFace::at_size(self, size)
    }
}

/// A face realized at one size
#[derive(Debug, Clone)]
pub struct SizedFont {
    face: FontFace,
    size: f32,
    metrics: LineMetrics,
}

impl SizedFont {
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn ascent(&self) -> f32 {
        self.metrics.ascent
    }

    pub fn descent(&self) -> f32 {
        self.metrics.descent
    }

    /// A new handle for the same face at another size
    pub fn resized(&self, size: f32) -> SizedFont {
        self.face.at_size(size)
    }

    /// Paint `text` on one line whose top edge sits at `top`
    ///
    /// Returns the horizontal advance, which equals `text_width(text)`.
    pub fn draw_text(&self, pixmap: &mut Pixmap, text: &str, x: f32, top: f32, color: Color) -> f32 {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);

        match self.face.font_ref() {
            Some(font) => {
                paint.anti_alias = true;
                let baseline = top + self.metrics.ascent;
                outline::draw(&font, pixmap, text, x, baseline, self.size, &paint)
            },
            None => {
                paint.anti_alias = false;
                builtin::draw(pixmap, text, x, top, self.size, &paint)
            },
        }
    }
}

impl TextMeasure for SizedFont {
    fn size(&self) -> f32 {
        self.size
    }

    fn text_width(&self, text: &str) -> f32 {
        match self.face.font_ref() {
            Some(font) => outline::text_width(&font, text, self.size),
            None => builtin::text_width(text, self.size),
        }
    }

    /// Ascent plus descent; blank lines take the same height as text
    fn line_height(&self, _text: &str) -> f32 {
        self.metrics.ascent + self.metrics.descent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fall_back_to_builtin() {
        assert!(FontFace::from_data(b"not a font".to_vec()).is_err());
        let face = FontFace::from_data_or_builtin(Some(b"not a font".to_vec()));
        assert!(face.is_builtin());
        assert!(FontFace::from_data_or_builtin(None).is_builtin());
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let missing = Path::new("/definitely/not/here.ttf");
        assert!(matches!(
            FontFace::from_file(missing),
            Err(carousel_core::CarouselError::FontLoad(FontLoadError::FileNotFound(_)))
        ));
        assert!(FontFace::from_file_or_builtin(Some(missing)).is_builtin());
    }

    #[test]
    fn test_resizing_is_explicit_and_shares_the_face() {
        let face = FontFace::builtin();
        let small = face.at_size(16.0);
        let large = small.resized(32.0);
        assert_eq!(small.size(), 16.0);
        assert_eq!(large.size(), 32.0);
        assert_eq!(large.text_width("ab"), 2.0 * small.text_width("ab"));
        assert!(Arc::ptr_eq(&small.face().source, &large.face().source));
    }

    #[test]
    fn test_builtin_metrics() {
        let font = FontFace::builtin().at_size(40.0);
        assert_eq!(font.text_width("Hello"), 200.0);
        assert_eq!(font.line_height("Hello"), 40.0);
        assert_eq!(font.line_height(""), 40.0);
    }

    const SYSTEM_FONTS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    fn system_face() -> Option<FontFace> {
        SYSTEM_FONTS
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .and_then(|path| FontFace::from_file(path).ok())
    }

    #[test]
    fn test_outline_face_metrics_and_drawing() {
        let Some(face) = system_face() else {
            eprintln!("no system font found, skipping outline test");
            return;
        };
        assert!(!face.is_builtin());

        let font = face.at_size(64.0);
        assert!(font.ascent() > 0.0);
        assert!(font.descent() > 0.0);
        assert!(font.line_height("Hg") > 64.0 * 0.8);
        assert!(font.text_width("Hello") > font.text_width("Hi"));
        assert_eq!(font.text_width(""), 0.0);

        let height = font.line_height("Hg").ceil() as u32;
        let mut pixmap = Pixmap::new(400, height + 4).unwrap();
        let advance = font.draw_text(&mut pixmap, "Hg", 0.0, 0.0, Color::rgb(255, 255, 255));
        assert_eq!(advance, font.text_width("Hg"));

        // Ink lands inside the line box, upright (cap tops near the top edge)
        let inked: Vec<u32> = (0..pixmap.height())
            .filter(|&y| (0..pixmap.width()).any(|x| pixmap.pixel(x, y).is_some_and(|px| px.alpha() > 128)))
            .collect();
        let (first, last) = (*inked.first().unwrap(), *inked.last().unwrap());
        assert!(first < height / 3, "first inked row {first}");
        assert!(last <= height, "last inked row {last}");
        assert!(last as f32 > font.ascent() * 0.9, "descender of g should pass the baseline");
    }

    #[test]
    fn test_draw_text_paints_pixels_and_reports_advance() {
        let font = FontFace::builtin().at_size(16.0);
        let mut pixmap = Pixmap::new(64, 32).unwrap();
        let advance = font.draw_text(&mut pixmap, "Hi", 0.0, 0.0, Color::rgb(255, 255, 255));
        assert_eq!(advance, font.text_width("Hi"));
        assert!(pixmap.pixels().iter().any(|px| px.alpha() == 255));
    }
}
