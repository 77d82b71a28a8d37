//! TrueType/OpenType faces via skrifa: metrics and outline painting

use kurbo::{BezPath, PathEl};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Vertical metrics at one size, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineMetrics {
    pub ascent: f32,
    /// Distance below the baseline, positive
    pub descent: f32,
}

pub(crate) fn line_metrics(font: &FontRef<'_>, size: f32) -> LineMetrics {
    let metrics = font.metrics(Size::new(size), LocationRef::default());
    LineMetrics {
        ascent: metrics.ascent,
        descent: -metrics.descent,
    }
}

fn glyph_for(font: &FontRef<'_>, ch: char) -> GlyphId {
    font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
}

pub(crate) fn text_width(font: &FontRef<'_>, text: &str, size: f32) -> f32 {
    let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
    text.chars()
        .map(|ch| glyph_metrics.advance_width(glyph_for(font, ch)).unwrap_or(0.0))
        .sum()
}

/// Paint `text` with its baseline at `baseline`; returns the advance
pub(crate) fn draw(
    font: &FontRef<'_>,
    pixmap: &mut Pixmap,
    text: &str,
    x: f32,
    baseline: f32,
    size: f32,
    paint: &Paint,
) -> f32 {
    let skrifa_size = Size::new(size);
    let glyph_metrics = font.glyph_metrics(skrifa_size, LocationRef::default());
    let outlines = font.outline_glyphs();
    let mut pen_x = x;

    for ch in text.chars() {
        let glyph_id = glyph_for(font, ch);

        if let Some(glyph) = outlines.get(glyph_id) {
            let mut path = BezPath::new();
            let mut pen = PathPen { path: &mut path };
            let settings = DrawSettings::unhinted(skrifa_size, LocationRef::default());
            match glyph.draw(settings, &mut pen) {
                Ok(_) => {
                    if let Some(skia_path) = to_skia_path(&path) {
                        // Fonts use y-up, pixmaps y-down
                        let transform = Transform::from_row(1.0, 0.0, 0.0, -1.0, pen_x, baseline);
                        pixmap.fill_path(&skia_path, paint, FillRule::Winding, transform, None);
                    }
                },
                Err(e) => log::warn!(
                    "Outline for {:?} (glyph {}) failed: {:?}",
                    ch,
                    glyph_id.to_u32(),
                    e
                ),
            }
        }

        pen_x += glyph_metrics.advance_width(glyph_id).unwrap_or(0.0);
    }
    pen_x - x
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    // Empty outlines (spaces) yield no path
    builder.finish()
}

/// Collects skrifa outline commands into a kurbo path
struct PathPen<'a> {
    path: &'a mut BezPath,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
