//! The built-in fallback face: 8×8 bitmap glyphs scaled to any size
//!
//! Used whenever no font bytes are supplied or they fail to parse. Every
//! glyph occupies a square cell one em wide, so metrics are exact and
//! predictable.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Cell advance in ems
pub(crate) const ADVANCE_EM: f32 = 1.0;

fn glyph(ch: char) -> Option<[u8; 8]> {
    let ch = match ch {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' => '"',
        '\u{2013}' | '\u{2014}' => '-',
        '\u{00A0}' | '\u{202F}' => ' ',
        c => c,
    };
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
}

pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * ADVANCE_EM
}

/// Paint `text` with its cell tops at `top`; returns the advance
pub(crate) fn draw(pixmap: &mut Pixmap, text: &str, x: f32, top: f32, size: f32, paint: &Paint) -> f32 {
    let cell = size / 8.0;
    let mut pen_x = x;
    let mut pb = PathBuilder::new();

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..8 {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let left = pen_x + col as f32 * cell;
                    let y = top + row as f32 * cell;
                    if let Some(rect) = Rect::from_xywh(left, y, cell, cell) {
                        pb.push_rect(rect);
                    }
                }
            }
        }
        pen_x += size * ADVANCE_EM;
    }

    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
    }
    pen_x - x
}
