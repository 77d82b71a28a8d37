//! Text layout: wrap lines, measure blocks, fit sizes
//!
//! Layout only ever talks to fonts through [`TextMeasure`] and
//! [`ScalableFont`], so it works the same for outline fonts, the built-in
//! bitmap face and test doubles.
//!
//! ```
//! use carousel_core::TextMeasure;
//! use carousel_layout::wrap;
//!
//! struct Mono;
//! impl TextMeasure for Mono {
//!     fn size(&self) -> f32 { 10.0 }
//!     fn text_width(&self, t: &str) -> f32 { t.chars().count() as f32 * 10.0 }
//!     fn line_height(&self, _: &str) -> f32 { 10.0 }
//! }
//!
//! assert_eq!(wrap("the quick brown fox", &Mono, 100.0), ["the quick", "brown fox"]);
//! ```

use carousel_core::{ScalableFont, TextMeasure};

#[cfg(test)]
mod proptests;

/// Smallest size auto-fit will go to unless told otherwise
pub const DEFAULT_MIN_SIZE: f32 = 28.0;

/// Auto-fit shrinks the size by this much per attempt
pub const FIT_STEP: f32 = 2.0;

/// Break `text` into display lines no wider than `max_width`
///
/// Explicit newlines always break; a blank explicit line stays as an empty
/// line. Words are packed greedily and never split, so a word wider than
/// `max_width` sits alone on its own line.
pub fn wrap(text: &str, font: &impl TextMeasure, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw.split(' ') {
            let candidate = if current.is_empty() {
                word.trim().to_string()
            } else {
                format!("{current} {word}").trim().to_string()
            };

            if current.is_empty() || font.text_width(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Vertical gap between consecutive lines
pub fn line_gap(font: &impl TextMeasure) -> f32 {
    (font.size() * 0.25).floor()
}

/// Total height of a block of lines, gaps included
pub fn block_height(lines: &[String], font: &impl TextMeasure) -> f32 {
    let text: f32 = lines.iter().map(|line| font.line_height(line)).sum();
    let gaps = lines.len().saturating_sub(1) as f32 * line_gap(font);
    text + gaps
}

/// Box the auto-fit search must fit text into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    pub base_size: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub margin: f32,
    pub min_size: f32,
}

impl FitParams {
    pub fn new(base_size: f32, canvas_width: f32, canvas_height: f32, margin: f32) -> Self {
        Self {
            base_size,
            canvas_width,
            canvas_height,
            margin,
            min_size: DEFAULT_MIN_SIZE,
        }
    }

    pub fn with_min_size(self, min_size: f32) -> Self {
        Self { min_size, ..self }
    }

    fn max_width(&self) -> f32 {
        self.canvas_width - 2.0 * self.margin
    }

    fn max_height(&self) -> f32 {
        self.canvas_height - 2.0 * self.margin
    }
}

/// Largest size, stepping down from `base_size`, at which `text` fits
///
/// Never fails: when nothing at or above `min_size` fits, the text is set
/// at `min_size` and allowed to overflow.
pub fn fit_font_size<F: ScalableFont>(text: &str, face: &F, params: &FitParams) -> (F::Sized, f32) {
    let mut size = params.base_size;

    while size >= params.min_size {
        let font = face.at_size(size);
        let lines = wrap(text, &font, params.max_width());
        let height = block_height(&lines, &font);
        if height <= params.max_height() {
            log::debug!(
                "Auto-fit: {} lines at {}px ({} <= {})",
                lines.len(),
                size,
                height,
                params.max_height()
            );
            return (font, size);
        }
        size -= FIT_STEP;
    }

    log::debug!("Auto-fit: nothing fits, settling on {}px", params.min_size);
    (face.at_size(params.min_size), params.min_size)
}


#[cfg(test)]
mod tests {
    use super::testing::{FixedFace, FixedFont};
    use super::*;

    /// 10px per char
    const MONO: FixedFont = FixedFont {
        size: 10.0,
        ratio: 1.0,
    };

    #[test]
    fn test_greedy_packing() {
        let lines = wrap("the quick brown fox jumps", &MONO, 100.0);
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        // "abcd efghi" is exactly 100px
        assert_eq!(wrap("abcd efghi", &MONO, 100.0), ["abcd efghi"]);
        assert_eq!(wrap("abcd efghij", &MONO, 100.0), ["abcd", "efghij"]);
    }

    #[test]
    fn test_explicit_breaks_and_blank_lines_survive() {
        let lines = wrap("Title\n\nbody text", &MONO, 1000.0);
        assert_eq!(lines, ["Title", "", "body text"]);
        assert_eq!(wrap("a\n   \nb", &MONO, 1000.0), ["a", "", "b"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", &MONO, 100.0), [""]);
    }

    #[test]
    fn test_overlong_word_is_never_split() {
        let lines = wrap("a supercalifragilistic b", &MONO, 50.0);
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_repeated_spaces_collapse_at_edges() {
        assert_eq!(wrap("  hello  ", &MONO, 1000.0), ["hello"]);
    }

    #[test]
    fn test_block_height_counts_gaps() {
        let font = FixedFont {
            size: 40.0,
            ratio: 0.5,
        };
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        // 3 × 40 + 2 × floor(40 × 0.25)
        assert_eq!(block_height(&lines, &font), 140.0);
        assert_eq!(block_height(&lines[..1], &font), 40.0);
    }

    #[test]
    fn test_fit_picks_base_size_when_it_fits() {
        let face = FixedFace { ratio: 0.5 };
        let params = FitParams::new(92.0, 1080.0, 1080.0, 86.0);
        let (font, size) = fit_font_size("Bonjour", &face, &params);
        assert_eq!(size, 92.0);
        assert_eq!(font.size, 92.0);
    }

    #[test]
    fn test_fit_shrinks_in_steps_of_two() {
        let face = FixedFace { ratio: 0.5 };
        // One line only: needs size <= 100 - 2 × 10 = 80
        let params = FitParams::new(91.0, 1000.0, 100.0, 10.0);
        let (_, size) = fit_font_size("hi", &face, &params);
        assert_eq!(size, 79.0);
    }

    #[test]
    fn test_fit_bottoms_out_at_min_size() {
        let face = FixedFace { ratio: 0.6 };
        let text = "word ".repeat(400);
        let params = FitParams::new(92.0, 400.0, 200.0, 20.0).with_min_size(30.0);
        let (font, size) = fit_font_size(&text, &face, &params);
        assert_eq!(size, 30.0);
        assert_eq!(font.size, 30.0);
    }

    #[test]
    fn test_fit_is_monotonic_in_canvas_height() {
        let face = FixedFace { ratio: 0.55 };
        let text = "Un incubateur digital pensé pour les étudiants qui veulent lancer un projet";
        let mut previous = f32::MAX;
        for height in (200..=1920).rev().step_by(40) {
            let params = FitParams::new(120.0, 1080.0, height as f32, 86.0);
            let (_, size) = fit_font_size(text, &face, &params);
            assert!(size <= previous, "height {height}: {size} > {previous}");
            assert!(size >= DEFAULT_MIN_SIZE);
            previous = size;
        }
    }
}
