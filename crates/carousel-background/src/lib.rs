//! Background generator: a style tag becomes a full-canvas raster
//!
//! Seven procedural styles, one closed enum. Every call returns a bitmap
//! of exactly the requested size with an alpha channel, ready for text and
//! logo compositing.
//!
//! ```
//! use carousel_background::generate;
//! use carousel_core::StyleTag;
//!
//! let bg = generate(StyleTag::BlueGradient, 320, 200)?;
//! assert_eq!((bg.width, bg.height), (320, 200));
//! # Ok::<(), carousel_core::CarouselError>(())
//! ```

use carousel_core::{
    error::{RenderError, Result},
    types::BitmapData,
    CanvasSize, Palette, StyleTag,
};

pub mod raster;
mod styles;

/// Render `style` at `width × height` with the brand palette
pub fn generate(style: StyleTag, width: u32, height: u32) -> Result<BitmapData> {
    generate_with_palette(style, width, height, &Palette::default())
}

/// Render a style given by name; unknown names fall back to `neon-grid`
pub fn generate_named(tag: &str, width: u32, height: u32) -> Result<BitmapData> {
    generate(StyleTag::parse_lossy(tag), width, height)
}

pub fn generate_with_palette(
    style: StyleTag,
    width: u32,
    height: u32,
    palette: &Palette,
) -> Result<BitmapData> {
    CanvasSize::new(width, height)?;

    log::debug!("Background: {} at {}x{}", style, width, height);

    let bitmap = match style {
        StyleTag::NeonGrid => raster::pixmap_to_bitmap(&styles::neon_grid(width, height, palette)?),
        StyleTag::BlueGradient => {
            raster::pixmap_to_bitmap(&styles::blue_gradient(width, height, palette)?)
        },
        StyleTag::AbstractCircles => {
            raster::pixmap_to_bitmap(&styles::abstract_circles(width, height, palette)?)
        },
        StyleTag::DiagonalStripes => {
            raster::pixmap_to_bitmap(&styles::diagonal_stripes(width, height, palette)?)
        },
        StyleTag::NoiseTexture => {
            raster::image_to_bitmap(styles::noise_texture(width, height, palette)?)
        },
        StyleTag::RadialGlow => {
            raster::pixmap_to_bitmap(&styles::radial_glow(width, height, palette)?)
        },
        StyleTag::MeshGradient => {
            raster::image_to_bitmap(styles::mesh_gradient(width, height, palette)?)
        },
    };

    if bitmap.width != width || bitmap.height != height {
        return Err(RenderError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        }
        .into());
    }
    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::types::BitmapFormat;

    const SIZES: [(u32, u32); 3] = [(64, 64), (200, 120), (90, 160)];

    #[test]
    fn test_every_style_matches_requested_size_with_alpha() {
        for style in StyleTag::ALL {
            for (w, h) in SIZES {
                let bg = generate(style, w, h).unwrap();
                assert_eq!((bg.width, bg.height), (w, h), "{style} at {w}x{h}");
                assert_eq!(bg.format, BitmapFormat::Rgba8);
                assert!(bg.has_alpha());
                assert_eq!(bg.data.len(), (w * h * 4) as usize);
            }
        }
    }

    #[test]
    fn test_backgrounds_are_opaque() {
        for style in StyleTag::ALL {
            let bg = generate(style, 48, 48).unwrap();
            assert!(bg.data.chunks_exact(4).all(|px| px[3] == 255), "{style}");
        }
    }

    #[test]
    fn test_unknown_tag_matches_neon_grid() {
        for (w, h) in SIZES {
            let fallback = generate_named("definitely-not-a-style", w, h).unwrap();
            let neon = generate(StyleTag::NeonGrid, w, h).unwrap();
            assert_eq!(fallback, neon);
        }
    }

    #[test]
    fn test_display_names_resolve() {
        let named = generate_named("Diagonal stripes", 40, 40).unwrap();
        let tagged = generate(StyleTag::DiagonalStripes, 40, 40).unwrap();
        assert_eq!(named, tagged);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(generate(StyleTag::RadialGlow, 0, 10).is_err());
        assert!(generate(StyleTag::RadialGlow, 10, 0).is_err());
    }

    #[test]
    fn test_blue_gradient_runs_dark_to_bright() {
        let bg = generate(StyleTag::BlueGradient, 10, 100).unwrap();
        // Bokeh discs avoid the left column near the top edge
        let top = bg.pixel(0, 0).unwrap();
        let bottom = bg.pixel(0, 99).unwrap();
        assert_eq!(&top[..3], &[10, 15, 41]);
        assert!(bottom[2] > 200, "bottom should approach #006CFF, got {bottom:?}");
    }

    #[test]
    fn test_diagonal_stripes_alternate() {
        let palette = Palette::default();
        let bg = generate(StyleTag::DiagonalStripes, 100, 100).unwrap();
        // step = 8 starting at -100: stripes cover x in 4..=8, 12..=16, ...
        let stripe = bg.pixel(6, 50).unwrap();
        let gap = bg.pixel(2, 50).unwrap();
        assert_eq!(&stripe[..3], &palette.blue_night.to_array()[..3]);
        assert_eq!(&gap[..3], &[0, 0, 0]);
    }

    #[test]
    fn test_mesh_gradient_is_smooth() {
        let bg = generate(StyleTag::MeshGradient, 120, 120).unwrap();
        let a = bg.pixel(60, 60).unwrap();
        let b = bg.pixel(61, 60).unwrap();
        for c in 0..3 {
            assert!((a[c] as i32 - b[c] as i32).abs() <= 3);
        }
    }
}
