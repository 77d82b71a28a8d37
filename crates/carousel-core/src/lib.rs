//! Carousel Core: the shared vocabulary of the slide renderer
//!
//! Text goes in as paragraphs, slides come out as RGBA bitmaps. Every crate
//! in the workspace speaks through the types defined here.
//!
//! ## The Pipeline
//!
//! 1. **Background** - A style tag becomes a procedural raster
//! 2. **Layout** - Raw text becomes wrapped display lines
//! 3. **Compose** - Lines, highlights and a logo land on the background
//! 4. **Export** - Slides become PNG, ZIP or PDF bytes
//!
//! ## The Traits That Bind Everything
//!
//! - [`TextMeasure`] - Width and height of text at a realized font size
//! - [`ScalableFont`] - A font face that can be realized at any size
//! - [`Exporter`] - Where a slide sequence becomes a downloadable file

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod traits;

pub use error::{CarouselError, Result};
pub use traits::{Exporter, ScalableFont, TextMeasure};

use error::RenderError;

/// Raster data passed between pipeline stages
pub mod types {
    use crate::error::{RenderError, Result};

    /// Raw pixel data for one slide
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub format: BitmapFormat,
        pub data: Vec<u8>,
    }

    /// How pixels are arranged in the bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BitmapFormat {
        /// Straight (non-premultiplied) RGBA
        Rgba8,
        Rgb8,
        Gray8,
    }

    impl BitmapFormat {
        pub const fn bytes_per_pixel(self) -> usize {
            match self {
                Self::Rgba8 => 4,
                Self::Rgb8 => 3,
                Self::Gray8 => 1,
            }
        }
    }

    impl BitmapData {
        /// Wraps an RGBA buffer, checking that it covers the dimensions
        pub fn rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
            let bitmap = Self {
                width,
                height,
                format: BitmapFormat::Rgba8,
                data,
            };
            bitmap.validate()?;
            Ok(bitmap)
        }

        /// Buffer length these dimensions and format require
        pub fn expected_len(&self) -> usize {
            self.width as usize * self.height as usize * self.format.bytes_per_pixel()
        }

        pub fn validate(&self) -> Result<()> {
            let expected = self.expected_len();
            if self.data.len() != expected {
                return Err(RenderError::MalformedBitmap {
                    width: self.width,
                    height: self.height,
                    format: self.format,
                    expected,
                    actual: self.data.len(),
                }
                .into());
            }
            Ok(())
        }

        pub fn has_alpha(&self) -> bool {
            self.format == BitmapFormat::Rgba8
        }

        /// Coerce any supported format into straight RGBA8
        ///
        /// A buffer that disagrees with its dimensions is rejected rather
        /// than reinterpreted.
        pub fn into_rgba8(self) -> Result<Self> {
            self.validate()?;

            let data = match self.format {
                BitmapFormat::Rgba8 => return Ok(self),
                BitmapFormat::Rgb8 => {
                    let mut rgba = Vec::with_capacity(self.data.len() / 3 * 4);
                    for px in self.data.chunks_exact(3) {
                        rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
                    }
                    rgba
                },
                BitmapFormat::Gray8 => {
                    let mut rgba = Vec::with_capacity(self.data.len() * 4);
                    for &gray in &self.data {
                        rgba.extend_from_slice(&[gray, gray, gray, 255]);
                    }
                    rgba
                },
            };

            log::debug!(
                "Coerced {}x{} {:?} bitmap to RGBA8",
                self.width,
                self.height,
                self.format
            );

            Ok(Self {
                width: self.width,
                height: self.height,
                format: BitmapFormat::Rgba8,
                data,
            })
        }

        /// RGBA value at (x, y); only meaningful for RGBA8 bitmaps
        pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
            if x >= self.width || y >= self.height || self.format != BitmapFormat::Rgba8 {
                return None;
            }
            let idx = (y as usize * self.width as usize + x as usize) * 4;
            let px = self.data.get(idx..idx + 4)?;
            Some([px[0], px[1], px[2], px[3]])
        }
    }
}

/// Largest side a canvas may have
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Target raster dimensions for one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }
        Ok(Self { width, height })
    }

    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Symmetric margin: 8% of the shorter side
    pub fn margin(&self) -> u32 {
        (self.min_side() as f32 * 0.08) as u32
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for CanvasSize {
    type Err = CarouselError;

    /// Parses `<width>x<height>`
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(['x', 'X', '×'])
            .ok_or_else(|| CarouselError::Config(format!("size must be WxH, got '{s}'")))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| CarouselError::Config(format!("invalid width in '{s}'")))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| CarouselError::Config(format!("invalid height in '{s}'")))?;
        Self::new(width, height)
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| CarouselError::Config(format!("invalid hex color '{hex}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(CarouselError::Config(format!("invalid hex color '{hex}'"))),
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Brand colors shared by backgrounds and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub black: Color,
    pub white: Color,
    pub blue: Color,
    pub blue_light: Color,
    pub blue_night: Color,
    pub grey: Color,
}

impl Palette {
    pub const BRAND: Palette = Palette {
        black: Color::rgb(0x00, 0x00, 0x00),
        white: Color::rgb(0xFF, 0xFF, 0xFF),
        blue: Color::rgb(0x00, 0x6C, 0xFF),
        blue_light: Color::rgb(0x1A, 0x7D, 0xFF),
        blue_night: Color::rgb(0x0A, 0x0F, 0x29),
        grey: Color::rgb(0xCC, 0xCC, 0xCC),
    };

    /// Color of ordinary text
    pub fn text(&self) -> Color {
        self.white
    }

    /// Color of highlighted tokens
    pub fn accent(&self) -> Color {
        self.blue
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::BRAND
    }
}

/// Which procedural background a slide sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    #[default]
    NeonGrid,
    BlueGradient,
    AbstractCircles,
    DiagonalStripes,
    NoiseTexture,
    RadialGlow,
    MeshGradient,
}

impl StyleTag {
    pub const ALL: [StyleTag; 7] = [
        StyleTag::NeonGrid,
        StyleTag::BlueGradient,
        StyleTag::AbstractCircles,
        StyleTag::DiagonalStripes,
        StyleTag::NoiseTexture,
        StyleTag::RadialGlow,
        StyleTag::MeshGradient,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeonGrid => "neon-grid",
            Self::BlueGradient => "blue-gradient",
            Self::AbstractCircles => "abstract-circles",
            Self::DiagonalStripes => "diagonal-stripes",
            Self::NoiseTexture => "noise-texture",
            Self::RadialGlow => "radial-glow",
            Self::MeshGradient => "mesh-gradient",
        }
    }

    /// Human-facing name, as shown in style pickers
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NeonGrid => "Neon grid",
            Self::BlueGradient => "Blue gradient",
            Self::AbstractCircles => "Abstract circles",
            Self::DiagonalStripes => "Diagonal stripes",
            Self::NoiseTexture => "Noise texture",
            Self::RadialGlow => "Radial glow",
            Self::MeshGradient => "Mesh gradient",
        }
    }

    /// Parse a tag, falling back to the default style for anything unknown
    pub fn parse_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::warn!("Unknown background style '{}', using {}", tag, Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleTag {
    type Err = CarouselError;

    /// Accepts `neon-grid`, `Neon grid`, `NEON_GRID` and the like
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| CarouselError::Config(format!("unknown background style '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::types::{BitmapData, BitmapFormat};
    use super::*;

    #[test]
    fn test_style_tag_accepts_display_and_kebab_names() {
        for style in StyleTag::ALL {
            assert_eq!(style.as_str().parse::<StyleTag>().unwrap(), style);
            assert_eq!(style.display_name().parse::<StyleTag>().unwrap(), style);
        }
        assert_eq!("MESH_GRADIENT".parse::<StyleTag>().unwrap(), StyleTag::MeshGradient);
    }

    #[test]
    fn test_unknown_style_falls_back_to_neon_grid() {
        assert!("plaid".parse::<StyleTag>().is_err());
        assert_eq!(StyleTag::parse_lossy("plaid"), StyleTag::NeonGrid);
        assert_eq!(StyleTag::parse_lossy(""), StyleTag::NeonGrid);
    }

    #[test]
    fn test_canvas_margin_and_parse() {
        let canvas: CanvasSize = "1080x1350".parse().unwrap();
        assert_eq!(canvas, CanvasSize { width: 1080, height: 1350 });
        assert_eq!(canvas.margin(), 86);
        assert!("0x100".parse::<CanvasSize>().is_err());
        assert!("big".parse::<CanvasSize>().is_err());
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#006CFF").unwrap(), Palette::BRAND.blue);
        assert_eq!(Color::from_hex("0A0F2980").unwrap(), Color::rgba(10, 15, 41, 128));
        assert!(Color::from_hex("12345").is_err());
    }

    #[test]
    fn test_rgb_and_gray_coerce_to_rgba() {
        let rgb = BitmapData {
            width: 2,
            height: 1,
            format: BitmapFormat::Rgb8,
            data: vec![1, 2, 3, 4, 5, 6],
        };
        let rgba = rgb.into_rgba8().unwrap();
        assert_eq!(rgba.format, BitmapFormat::Rgba8);
        assert_eq!(rgba.data, vec![1, 2, 3, 255, 4, 5, 6, 255]);

        let gray = BitmapData {
            width: 1,
            height: 1,
            format: BitmapFormat::Gray8,
            data: vec![42],
        };
        assert_eq!(gray.into_rgba8().unwrap().pixel(0, 0), Some([42, 42, 42, 255]));
    }

    #[test]
    fn test_malformed_bitmap_is_rejected() {
        let broken = BitmapData {
            width: 4,
            height: 4,
            format: BitmapFormat::Rgb8,
            data: vec![0; 10],
        };
        assert!(matches!(
            broken.into_rgba8(),
            Err(CarouselError::Rendering(RenderError::MalformedBitmap { expected: 48, actual: 10, .. }))
        ));
    }
}
