//! Render configuration: JSON file values overridden by command-line options

use std::{fs, ops::RangeInclusive, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use carousel::{CanvasSize, Preset, StyleTag};
use serde::{Deserialize, Serialize};

use crate::cli::RenderArgs;

pub const TITLE_SIZE_RANGE: RangeInclusive<f32> = 48.0..=140.0;
pub const BODY_SIZE_RANGE: RangeInclusive<f32> = 40.0..=100.0;
pub const LOGO_WIDTH_RANGE: RangeInclusive<f32> = 0.15..=0.6;

/// Four slides introducing the incubator
pub const DEMO_TEXT: &str = "T’as une idée ?\n\n\
    Et si l’IA t’aidait à la concrétiser ?\n\n\
    Un incubateur digital pensé pour les étudiants\n\n\
    Rejoins-nous sur iacubateur.com";

pub const DEFAULT_HIGHLIGHT: &str = "IA,iacubateur.com,étudiants,incubateur";

/// Everything `render` needs, as read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub text: Option<String>,
    pub preset: Option<String>,
    pub size: Option<CanvasSize>,
    pub style: String,
    pub highlight: String,
    pub title_font: Option<PathBuf>,
    pub body_font: Option<PathBuf>,
    pub title_size: f32,
    pub body_size: f32,
    pub top_align: bool,
    pub auto_fit: bool,
    pub logo: Option<PathBuf>,
    pub logo_width: f32,
    pub zip: bool,
    /// `None` means "only for LinkedIn presets"
    pub pdf: Option<bool>,
    pub bundle: Option<String>,
    pub dpi: f32,
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text: None,
            preset: None,
            size: None,
            style: StyleTag::default().as_str().to_string(),
            highlight: DEFAULT_HIGHLIGHT.to_string(),
            title_font: None,
            body_font: None,
            title_size: 92.0,
            body_size: 60.0,
            top_align: false,
            auto_fit: false,
            logo: None,
            logo_width: 0.32,
            zip: false,
            pdf: None,
            bundle: None,
            dpi: 144.0,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse render configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// The file named by `--config` (or defaults) with the other options on top
    pub fn resolve(args: &RenderArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(args);
        config.validate()?;
        Ok(config)
    }

    /// Override with every option given on the command line
    pub fn apply(&mut self, args: &RenderArgs) {
        if let Some(text) = &args.text {
            self.text = Some(text.clone());
        }
        if let Some(preset) = args.preset {
            self.preset = Some(preset.to_string());
            self.size = None;
        }
        if let Some(size) = args.size {
            self.size = Some(size);
        }
        if let Some(style) = &args.style {
            self.style = style.clone();
        }
        if let Some(highlight) = &args.highlight {
            self.highlight = highlight.clone();
        }
        if let Some(path) = &args.title_font {
            self.title_font = Some(path.clone());
        }
        if let Some(path) = &args.body_font {
            self.body_font = Some(path.clone());
        }
        if let Some(size) = args.title_size {
            self.title_size = size;
        }
        if let Some(size) = args.body_size {
            self.body_size = size;
        }
        if let Some(path) = &args.logo {
            self.logo = Some(path.clone());
        }
        if let Some(width) = args.logo_width {
            self.logo_width = width;
        }
        if let Some(bundle) = &args.bundle {
            self.bundle = Some(bundle.clone());
        }
        if let Some(dpi) = args.dpi {
            self.dpi = dpi;
        }
        if let Some(dir) = &args.output_dir {
            self.output_dir = dir.clone();
        }

        self.top_align |= args.top_align;
        self.auto_fit |= args.auto_fit;
        self.zip |= args.zip;
        if args.pdf {
            self.pdf = Some(true);
        }
        if args.no_pdf {
            self.pdf = Some(false);
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_range("title size", self.title_size, &TITLE_SIZE_RANGE)?;
        check_range("body size", self.body_size, &BODY_SIZE_RANGE)?;
        check_range("logo width", self.logo_width, &LOGO_WIDTH_RANGE)?;
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            bail!("dpi must be positive, got {}", self.dpi);
        }
        if let Some(name) = &self.bundle {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                bail!("bundle project name '{name}' is not a valid file name");
            }
        }
        self.preset()?;
        Ok(())
    }

    /// The named preset, if any; unknown names are an error
    pub fn preset(&self) -> Result<Option<Preset>> {
        self.preset
            .as_deref()
            .map(|name| name.parse::<Preset>().context("Invalid preset"))
            .transpose()
    }

    /// Explicit size, else the preset, else the story format
    pub fn canvas(&self) -> Result<CanvasSize> {
        if let Some(size) = self.size {
            return Ok(CanvasSize::new(size.width, size.height)?);
        }
        Ok(self.preset()?.unwrap_or_default().canvas())
    }

    /// Unknown names fall back to the default style with a warning
    pub fn style(&self) -> StyleTag {
        StyleTag::parse_lossy(&self.style)
    }

    pub fn want_pdf(&self) -> Result<bool> {
        if let Some(pdf) = self.pdf {
            return Ok(pdf);
        }
        if self.size.is_some() {
            return Ok(false);
        }
        Ok(self.preset()?.is_some_and(Preset::is_linkedin))
    }
}

fn check_range(what: &str, value: f32, range: &RangeInclusive<f32>) -> Result<()> {
    if !range.contains(&value) {
        bail!(
            "{what} {value} is out of range ({}-{})",
            range.start(),
            range.end()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        config.validate().unwrap();
        assert_eq!(config.canvas().unwrap(), Preset::Story.canvas());
        assert_eq!(config.style(), StyleTag::NeonGrid);
        assert!(!config.want_pdf().unwrap());
    }

    #[test]
    fn test_json_fills_missing_fields_with_defaults() {
        let config = RenderConfig::from_json(
            r#"{ "preset": "linkedin-portrait", "style": "mesh-gradient", "title_size": 120 }"#,
        )
        .unwrap();
        assert_eq!(config.title_size, 120.0);
        assert_eq!(config.body_size, 60.0);
        assert_eq!(config.style(), StyleTag::MeshGradient);
        assert_eq!(config.canvas().unwrap().height, 1350);
        assert!(config.want_pdf().unwrap());
    }

    #[test]
    fn test_unknown_json_field_is_rejected() {
        assert!(RenderConfig::from_json(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let mut config = RenderConfig::from_json(
            r#"{ "preset": "linkedin-square", "body_size": 50, "highlight": "a,b" }"#,
        )
        .unwrap();
        let args = RenderArgs {
            preset: Some(Preset::InstagramSquare),
            body_size: Some(70.0),
            no_pdf: true,
            auto_fit: true,
            ..RenderArgs::default()
        };
        config.apply(&args);

        assert_eq!(config.canvas().unwrap(), Preset::InstagramSquare.canvas());
        assert_eq!(config.body_size, 70.0);
        assert_eq!(config.highlight, "a,b");
        assert!(config.auto_fit);
        assert!(!config.want_pdf().unwrap());
    }

    #[test]
    fn test_custom_size_wins_over_preset() {
        let mut config = RenderConfig::default();
        config.apply(&RenderArgs {
            size: Some(CanvasSize::new(800, 600).unwrap()),
            ..RenderArgs::default()
        });
        assert_eq!(config.canvas().unwrap(), CanvasSize::new(800, 600).unwrap());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let too_big = RenderConfig {
            title_size: 200.0,
            ..RenderConfig::default()
        };
        assert!(too_big.validate().is_err());

        let tiny_logo = RenderConfig {
            logo_width: 0.1,
            ..RenderConfig::default()
        };
        assert!(tiny_logo.validate().is_err());

        let bad_preset = RenderConfig {
            preset: Some("tiktok".into()),
            ..RenderConfig::default()
        };
        assert!(bad_preset.validate().is_err());

        let bad_bundle = RenderConfig {
            bundle: Some("../escape".into()),
            ..RenderConfig::default()
        };
        assert!(bad_bundle.validate().is_err());
    }

    #[test]
    fn test_unknown_style_falls_back() {
        let config = RenderConfig {
            style: "vaporwave".into(),
            ..RenderConfig::default()
        };
        assert_eq!(config.style(), StyleTag::NeonGrid);
    }
}
