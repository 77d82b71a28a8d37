//! Brand logo: decoded once per batch, scaled per slide

use std::path::Path;

use carousel_core::error::{RenderError, Result};
use image::{imageops::FilterType, RgbaImage};

/// An RGBA logo with transparency
#[derive(Debug, Clone)]
pub struct Logo {
    image: RgbaImage,
}

/// Where a scaled logo lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Logo {
    /// Decode PNG (or any format the `image` crate can read) bytes
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?
            .to_rgba8();
        Ok(Self::from_rgba(image))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_png_bytes(&bytes)
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Size after scaling to `width_pct` of the canvas width, aspect kept
    pub fn scaled_size(&self, canvas_width: u32, width_pct: f32) -> (u32, u32) {
        let (w0, h0) = self.dimensions();
        let width = ((canvas_width as f32 * width_pct) as u32).max(1);
        let height = (h0 as u64 * width as u64 / w0.max(1) as u64) as u32;
        (width, height.max(1))
    }

    /// Horizontally centered, bottom edge `margin` above the canvas bottom
    pub fn placement(&self, canvas_width: u32, canvas_height: u32, margin: u32, width_pct: f32) -> LogoPlacement {
        let (width, height) = self.scaled_size(canvas_width, width_pct);
        LogoPlacement {
            x: (canvas_width as i64 - width as i64).div_euclid(2),
            y: canvas_height as i64 - height as i64 - margin as i64,
            width,
            height,
        }
    }

    /// Scale and alpha-composite onto `canvas`
    pub fn composite_onto(&self, canvas: &mut RgbaImage, margin: u32, width_pct: f32) -> LogoPlacement {
        let placement = self.placement(canvas.width(), canvas.height(), margin, width_pct);
        let scaled = image::imageops::resize(
            &self.image,
            placement.width,
            placement.height,
            FilterType::Lanczos3,
        );
        image::imageops::overlay(canvas, &scaled, placement.x, placement.y);
        log::debug!(
            "Logo: {}x{} at ({}, {})",
            placement.width,
            placement.height,
            placement.x,
            placement.y
        );
        placement
    }
}
