//! Carousel - branded slide sequences for social media
//!
//! One text in, an ordered set of same-sized slides out:
//! 1. Background generation (seven procedural styles)
//! 2. Font selection and auto-fit
//! 3. Wrapping and vertical placement
//! 4. Word highlighting and logo compositing
//! 5. Export as PNG, ZIP, PDF or a project bundle
//!
//! # Example
//!
//! ```
//! use carousel::prelude::*;
//!
//! let composer = SlideComposer::builder()
//!     .canvas(Preset::InstagramSquare.canvas())
//!     .style(StyleTag::BlueGradient)
//!     .highlight(HighlightSet::from_csv("IA,incubateur"))
//!     .build()?;
//!
//! let slides = composer.render_batch("Une idée ?\n\nL'IA t'aide")?;
//! assert_eq!(slides.len(), 2);
//! # Ok::<(), CarouselError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `export`: ZIP, PDF and bundle packaging (default)

pub use carousel_core::{error, traits, types, CanvasSize, Color, Palette, StyleTag};

pub use carousel_background as background;
pub use carousel_compose as compose;
pub use carousel_font as font;
pub use carousel_layout as layout;

#[cfg(feature = "export")]
pub use carousel_export as export;

pub mod presets;

pub use presets::Preset;

/// Common imports for typical usage
pub mod prelude {
    pub use carousel_compose::{
        split_slides, FontPolicy, HighlightSet, Logo, SlideComposer, SlideOptions,
    };
    pub use carousel_core::{
        error::{CarouselError, Result},
        traits::{Exporter, ScalableFont, TextMeasure},
        types::{BitmapData, BitmapFormat},
        CanvasSize, Color, Palette, StyleTag,
    };
    pub use carousel_font::{FontFace, SizedFont};

    #[cfg(feature = "export")]
    pub use carousel_export::{BundleExporter, PdfExporter, PngExporter, ZipExporter};

    pub use crate::Preset;
}
