//! The seven background variants
//!
//! Each variant is a function of the canvas size and palette alone. Only
//! `noise_texture` touches a random source.

use carousel_core::{error::Result, Color, Palette};
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::raster::{gaussian_blur, new_pixmap};

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn solid(width: u32, height: u32, color: Color) -> Result<Pixmap> {
    let mut pixmap = new_pixmap(width, height)?;
    pixmap.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    Ok(pixmap)
}

fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, r: f32, color: Color) {
    if r <= 0.0 {
        return;
    }
    if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
        pixmap.fill_path(&path, &paint(color), FillRule::Winding, Transform::identity(), None);
    }
}

fn stroke_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, r: f32, width: f32, color: Color) {
    if r <= 0.0 {
        return;
    }
    if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }
}

fn line(pixmap: &mut Pixmap, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }
}

/// Blurring an opaque image must stay opaque
fn opaque(mut image: RgbaImage) -> RgbaImage {
    for px in image.pixels_mut() {
        px[3] = 255;
    }
    image
}

/// Grid step shared by the line-based styles: 8% of the shorter side
fn grid_step(width: u32, height: u32) -> usize {
    ((width.min(height) as f32 * 0.08) as usize).max(1)
}

pub(crate) fn neon_grid(width: u32, height: u32, palette: &Palette) -> Result<Pixmap> {
    let mut pixmap = solid(width, height, palette.black)?;
    let (w, h) = (width as i64, height as i64);

    for off in (-h..w + h).step_by(grid_step(width, height)) {
        let off = off as f32;
        let hf = h as f32;
        line(&mut pixmap, (off, 0.0), (off + hf, hf), 2.0, palette.blue);
        line(
            &mut pixmap,
            (off - 40.0, 0.0),
            (off + hf - 40.0, hf),
            1.0,
            palette.blue_light,
        );
    }

    // Two-stop vignette, inner disc first
    let (cx, cy) = ((w / 2) as f32, (h / 2) as f32);
    for (scale, alpha) in [(0.9, 30), (1.2, 80)] {
        let r = (width as f32 * scale) as u32 as f32;
        fill_circle(&mut pixmap, cx, cy, r, palette.black.with_alpha(alpha));
    }
    Ok(pixmap)
}

pub(crate) fn blue_gradient(width: u32, height: u32, palette: &Palette) -> Result<Pixmap> {
    let mut pixmap = new_pixmap(width, height)?;
    let (start, end) = (palette.blue_night, palette.blue);
    let denom = height.saturating_sub(1).max(1) as f32;
    let lerp = |a: u8, b: u8, t: f32| (a as f32 * (1.0 - t) + b as f32 * t) as u8;

    for y in 0..height {
        let t = y as f32 / denom;
        let row = tiny_skia::ColorU8::from_rgba(
            lerp(start.r, end.r, t),
            lerp(start.g, end.g, t),
            lerp(start.b, end.b, t),
            255,
        )
        .premultiply();
        let from = (y * width) as usize;
        pixmap.pixels_mut()[from..from + width as usize].fill(row);
    }

    // Bokeh
    let (wf, hf) = (width as f32, height as f32);
    for (r_scale, alpha, cx, cy) in [(0.35, 40, 0.75, 0.25), (0.25, 50, 0.25, 0.65)] {
        let r = (wf * r_scale) as u32 as f32;
        let center = ((wf * cx) as u32 as f32, (hf * cy) as u32 as f32);
        fill_circle(&mut pixmap, center.0, center.1, r, palette.blue_light.with_alpha(alpha));
    }
    Ok(pixmap)
}

pub(crate) fn abstract_circles(width: u32, height: u32, palette: &Palette) -> Result<Pixmap> {
    let mut pixmap = solid(width, height, palette.black)?;
    let m = width.min(height) as f32;
    let (cx, cy) = ((width / 2) as f32, (height / 2) as f32);

    for (scale, alpha) in [(0.55, 28u8), (0.36, 40), (0.24, 55)] {
        let r = (m * scale) as u32 as f32;
        stroke_circle(&mut pixmap, cx, cy, r, 3.0, palette.blue.with_alpha(120));
        fill_circle(&mut pixmap, cx, cy, r, palette.blue.with_alpha(alpha / 3));
    }
    Ok(pixmap)
}

pub(crate) fn diagonal_stripes(width: u32, height: u32, palette: &Palette) -> Result<Pixmap> {
    let mut pixmap = solid(width, height, palette.black)?;
    let step = grid_step(width, height);
    let stripe = paint(palette.blue_night);

    for i in (-(height as i64)..width as i64).step_by(step) {
        let left = i as f32;
        // Inclusive bounds, like a filled rectangle outline [i, i + step/2]
        let right = left + (step / 2) as f32 + 1.0;
        if let Some(rect) = Rect::from_ltrb(left.max(0.0), 0.0, right, height as f32) {
            pixmap.fill_rect(rect, &stripe, Transform::identity(), None);
        }
    }
    Ok(pixmap)
}

pub(crate) fn noise_texture(width: u32, height: u32, _palette: &Palette) -> Result<RgbaImage> {
    let denom = height.saturating_sub(1).max(1) as f32;
    let image = RgbaImage::from_fn(width, height, |_, y| {
        let n = fastrand::u8(0..30);
        let blue = (y as f32 / denom * 120.0) as u8;
        image::Rgba([n, n, n + blue, 255])
    });
    Ok(opaque(gaussian_blur(&image, 1.0)))
}

pub(crate) fn radial_glow(width: u32, height: u32, palette: &Palette) -> Result<Pixmap> {
    let mut pixmap = solid(width, height, palette.black)?;
    let max_r = (width.max(height) as f32 * 0.6) as u32;
    let (cx, cy) = ((width / 2) as f32, (height / 2) as f32);

    let mut r = max_r;
    while r > 0 {
        let alpha = (180.0 * (r as f32 / max_r as f32)) as u32 / 4;
        fill_circle(&mut pixmap, cx, cy, r as f32, palette.blue.with_alpha(alpha as u8));
        r = r.saturating_sub(40);
    }
    Ok(pixmap)
}

pub(crate) fn mesh_gradient(width: u32, height: u32, _palette: &Palette) -> Result<RgbaImage> {
    let (wf, hf) = (width as f32, height as f32);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let t1 = x as f32 / wf;
        let t2 = y as f32 / hf;
        image::Rgba([
            (20.0 + 60.0 * t1) as u8,
            (20.0 + 40.0 * t2) as u8,
            (80.0 + 150.0 * (1.0 - t1 * t2)) as u8,
            255,
        ])
    });
    Ok(opaque(gaussian_blur(&image, 50.0)))
}
