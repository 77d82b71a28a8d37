//! Platform canvas presets

use std::{fmt, str::FromStr};

use carousel_core::{error::CarouselError, CanvasSize};

/// Canvas sizes the common platforms expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// 9:16 vertical story
    #[default]
    Story,
    LinkedinSquare,
    LinkedinPortrait,
    InstagramSquare,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Story,
        Preset::LinkedinSquare,
        Preset::LinkedinPortrait,
        Preset::InstagramSquare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::LinkedinSquare => "linkedin-square",
            Self::LinkedinPortrait => "linkedin-portrait",
            Self::InstagramSquare => "instagram-square",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Story => "Instagram Story / Reel (1080×1920)",
            Self::LinkedinSquare => "LinkedIn Carousel Square (1200×1200)",
            Self::LinkedinPortrait => "LinkedIn Carousel Portrait (1080×1350)",
            Self::InstagramSquare => "Instagram Post Square (1080×1080)",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Story => (1080, 1920),
            Self::LinkedinSquare => (1200, 1200),
            Self::LinkedinPortrait => (1080, 1350),
            Self::InstagramSquare => (1080, 1080),
        }
    }

    pub fn canvas(self) -> CanvasSize {
        let (width, height) = self.dimensions();
        CanvasSize { width, height }
    }

    /// LinkedIn presets default to also producing a PDF document
    pub fn is_linkedin(self) -> bool {
        matches!(self, Self::LinkedinSquare | Self::LinkedinPortrait)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| CarouselError::Config(format!("unknown preset '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        assert_eq!(Preset::Story.dimensions(), (1080, 1920));
        assert_eq!(Preset::LinkedinSquare.dimensions(), (1200, 1200));
        assert_eq!(Preset::LinkedinPortrait.dimensions(), (1080, 1350));
        assert_eq!(Preset::InstagramSquare.canvas().margin(), 86);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("story".parse::<Preset>().unwrap(), Preset::Story);
        assert_eq!("LinkedIn_Square".parse::<Preset>().unwrap(), Preset::LinkedinSquare);
        assert!("tiktok".parse::<Preset>().is_err());
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_linkedin_presets() {
        assert!(Preset::LinkedinPortrait.is_linkedin());
        assert!(!Preset::Story.is_linkedin());
    }
}
