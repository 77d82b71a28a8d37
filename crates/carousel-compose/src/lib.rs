//! Slide composer: background, highlighted text and logo become one raster
//!
//! ```
//! use carousel_compose::{HighlightSet, SlideComposer};
//! use carousel_core::{CanvasSize, StyleTag};
//!
//! let composer = SlideComposer::builder()
//!     .canvas(CanvasSize::new(320, 320)?)
//!     .style(StyleTag::RadialGlow)
//!     .highlight(HighlightSet::from_csv("IA"))
//!     .build()?;
//!
//! let slides = composer.render_batch("Bonjour\n\nEt si l'IA t'aidait ?")?;
//! assert_eq!(slides.len(), 2);
//! # Ok::<(), carousel_core::CarouselError>(())
//! ```

use carousel_background::raster;
use carousel_core::{
    error::{CarouselError, RenderError, Result},
    types::BitmapData,
    CanvasSize, Palette, StyleTag, TextMeasure,
};
use carousel_font::{FontFace, SizedFont};
use carousel_layout::{block_height, fit_font_size, line_gap, wrap, FitParams};

mod highlight;
mod logo;

pub use highlight::HighlightSet;
pub use logo::{Logo, LogoPlacement};

/// Text at or under this many characters, on one line, counts as a title
pub const TITLE_MAX_CHARS: usize = 40;

pub const DEFAULT_TITLE_SIZE: f32 = 92.0;
pub const DEFAULT_BODY_SIZE: f32 = 60.0;
pub const DEFAULT_LOGO_WIDTH_PCT: f32 = 0.32;

/// Split batch text into slides: blank-line separated, trimmed, non-empty
pub fn split_slides(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which of the two batch fonts a slide uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Body,
}

/// How the composer picks between title and body fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontPolicy {
    /// Title for short single-line text, body otherwise
    #[default]
    Heuristic,
    Title,
    Body,
}

impl FontPolicy {
    pub fn choose(self, text: &str) -> FontRole {
        match self {
            Self::Title => FontRole::Title,
            Self::Body => FontRole::Body,
            Self::Heuristic => {
                if !text.contains('\n') && text.chars().count() <= TITLE_MAX_CHARS {
                    FontRole::Title
                } else {
                    FontRole::Body
                }
            },
        }
    }
}

/// Per-batch knobs that are not resources
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOptions {
    pub logo_width_pct: f32,
    pub top_align: bool,
    pub font_policy: FontPolicy,
    /// Shrink the chosen font from its configured size until the text fits
    pub auto_fit: bool,
    pub palette: Palette,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            logo_width_pct: DEFAULT_LOGO_WIDTH_PCT,
            top_align: false,
            font_policy: FontPolicy::default(),
            auto_fit: false,
            palette: Palette::default(),
        }
    }
}

/// Where slide backgrounds come from
pub trait Backdrop {
    fn name(&self) -> &'static str;

    fn render(&self, style: StyleTag, canvas: CanvasSize, palette: &Palette) -> Result<BitmapData>;
}

/// The procedural generators from `carousel-background`
#[derive(Debug, Clone, Copy, Default)]
pub struct Procedural;

impl Backdrop for Procedural {
    fn name(&self) -> &'static str {
        "procedural"
    }

    fn render(&self, style: StyleTag, canvas: CanvasSize, palette: &Palette) -> Result<BitmapData> {
        carousel_background::generate_with_palette(style, canvas.width, canvas.height, palette)
    }
}

/// Renders slides for one batch
///
/// Fonts, highlight words and logo are loaded once and shared read-only by
/// every slide.
pub struct SlideComposer {
    canvas: CanvasSize,
    style: StyleTag,
    title_font: SizedFont,
    body_font: SizedFont,
    highlight: HighlightSet,
    logo: Option<Logo>,
    options: SlideOptions,
    backdrop: Box<dyn Backdrop>,
}

impl SlideComposer {
    /// Start building a composer
    pub fn builder() -> SlideComposerBuilder {
        SlideComposerBuilder::new()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn options(&self) -> &SlideOptions {
        &self.options
    }

    /// The font a slide with this text starts from
    pub fn font_for(&self, text: &str) -> &SizedFont {
        match self.options.font_policy.choose(text) {
            FontRole::Title => &self.title_font,
            FontRole::Body => &self.body_font,
        }
    }

    fn background(&self) -> Result<tiny_skia::Pixmap> {
        let bitmap = self
            .backdrop
            .render(self.style, self.canvas, &self.options.palette)?;

        if bitmap.width != self.canvas.width || bitmap.height != self.canvas.height {
            return Err(RenderError::InvalidDimensions {
                width: bitmap.width,
                height: bitmap.height,
            }
            .into());
        }
        if !bitmap.has_alpha() {
            log::debug!("Backdrop '{}' returned {:?}, coercing", self.backdrop.name(), bitmap.format);
        }
        raster::bitmap_to_pixmap(bitmap)
    }

    /// Render one slide
    pub fn compose(&self, text: &str) -> Result<BitmapData> {
        let text = text.trim();
        let (width, height) = (self.canvas.width as f32, self.canvas.height as f32);
        let margin = self.canvas.margin();
        let margin_f = margin as f32;

        let mut pixmap = self.background()?;

        let chosen = self.font_for(text);
        let font = if self.options.auto_fit {
            let params = FitParams::new(chosen.size(), width, height, margin_f);
            fit_font_size(text, chosen.face(), &params).0
        } else {
            chosen.clone()
        };

        let lines = wrap(text, &font, width - 2.0 * margin_f);
        let gap = line_gap(&font);
        let total = block_height(&lines, &font);

        let mut y = if self.options.top_align {
            margin_f
        } else {
            ((height - total) / 2.0).floor()
        };

        let base = self.options.palette.text();
        let accent = self.options.palette.accent();

        for line in &lines {
            let line_width = font.text_width(line);
            let mut x = ((width - line_width) / 2.0).floor();

            if !line.is_empty() {
                for token in line.split(' ') {
                    // The trailing space keeps the advance in step with the line width
                    let chunk = format!("{token} ");
                    let color = if self.highlight.matches(token) { accent } else { base };
                    x += font.draw_text(&mut pixmap, &chunk, x, y, color);
                }
            }
            y += font.line_height(line) + gap;
        }

        log::debug!(
            "Slide: {} lines at {}px, block {}px ({})",
            lines.len(),
            font.size(),
            total,
            if self.options.top_align { "top" } else { "centered" }
        );

        let mut image = raster::pixmap_to_image(&pixmap)?;
        if let Some(logo) = &self.logo {
            logo.composite_onto(&mut image, margin, self.options.logo_width_pct);
        }
        Ok(raster::image_to_bitmap(image))
    }

    /// Split `text` into slides and render each, in order
    pub fn render_batch(&self, text: &str) -> Result<Vec<BitmapData>> {
        let slides = split_slides(text);
        log::info!(
            "Rendering {} slides at {} on {}",
            slides.len(),
            self.canvas,
            self.style
        );

        slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| {
                log::debug!("Slide {}/{}", idx + 1, slides.len());
                self.compose(slide)
            })
            .collect()
    }
}

/// Builder for [`SlideComposer`]
pub struct SlideComposerBuilder {
    canvas: Option<CanvasSize>,
    style: StyleTag,
    title_font: Option<SizedFont>,
    body_font: Option<SizedFont>,
    highlight: HighlightSet,
    logo: Option<Logo>,
    options: SlideOptions,
    backdrop: Box<dyn Backdrop>,
}

impl SlideComposerBuilder {
    pub fn new() -> Self {
        Self {
            canvas: None,
            style: StyleTag::default(),
            title_font: None,
            body_font: None,
            highlight: HighlightSet::default(),
            logo: None,
            options: SlideOptions::default(),
            backdrop: Box::new(Procedural),
        }
    }

    pub fn canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn style(mut self, style: StyleTag) -> Self {
        self.style = style;
        self
    }

    pub fn title_font(mut self, font: SizedFont) -> Self {
        self.title_font = Some(font);
        self
    }

    pub fn body_font(mut self, font: SizedFont) -> Self {
        self.body_font = Some(font);
        self
    }

    pub fn highlight(mut self, highlight: HighlightSet) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn logo(mut self, logo: Option<Logo>) -> Self {
        self.logo = logo;
        self
    }

    pub fn options(mut self, options: SlideOptions) -> Self {
        self.options = options;
        self
    }

    pub fn top_align(mut self, top_align: bool) -> Self {
        self.options.top_align = top_align;
        self
    }

    pub fn auto_fit(mut self, auto_fit: bool) -> Self {
        self.options.auto_fit = auto_fit;
        self
    }

    pub fn font_policy(mut self, policy: FontPolicy) -> Self {
        self.options.font_policy = policy;
        self
    }

    pub fn logo_width_pct(mut self, pct: f32) -> Self {
        self.options.logo_width_pct = pct;
        self
    }

    pub fn backdrop(mut self, backdrop: Box<dyn Backdrop>) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn build(self) -> Result<SlideComposer> {
        let canvas = self
            .canvas
            .ok_or_else(|| CarouselError::Config("canvas size not set".into()))?;

        let pct = self.options.logo_width_pct;
        if pct.is_nan() || pct <= 0.0 || pct > 1.0 {
            return Err(CarouselError::Config(format!(
                "logo width must be a fraction of the canvas width, got {pct}"
            )));
        }

        let title_font = self
            .title_font
            .unwrap_or_else(|| FontFace::builtin().at_size(DEFAULT_TITLE_SIZE));
        let body_font = self
            .body_font
            .unwrap_or_else(|| FontFace::builtin().at_size(DEFAULT_BODY_SIZE));

        Ok(SlideComposer {
            canvas,
            style: self.style,
            title_font,
            body_font,
            highlight: self.highlight,
            logo: self.logo,
            options: self.options,
            backdrop: self.backdrop,
        })
    }
}

impl Default for SlideComposerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
