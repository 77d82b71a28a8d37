//! CLI argument definitions using Clap v4

use carousel::{CanvasSize, Preset};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Carousel - branded social-media slides from plain text
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a slide batch and write PNG, ZIP, PDF or bundle files
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Write the text post that goes with a carousel
    #[command(alias = "p")]
    Post(PostArgs),

    /// Display available background styles and canvas presets
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List background styles
    #[arg(long)]
    pub styles: bool,

    /// List canvas presets
    #[arg(long)]
    pub presets: bool,
}

/// Arguments for the render command
///
/// Every option left unset falls back to the `--config` file, then to the
/// built-in defaults.
#[derive(Parser, Debug, Default)]
pub struct RenderArgs {
    // Text Input
    /// Slide text; slides are separated by blank lines
    #[arg(short = 't', long = "text", conflicts_with = "text_file", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Read slide text from a file ("-" for stdin)
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    // Canvas
    /// Canvas preset: story, linkedin-square, linkedin-portrait, instagram-square
    #[arg(short = 'p', long = "preset", conflicts_with = "size")]
    pub preset: Option<Preset>,

    /// Custom canvas size as <width>x<height>
    #[arg(short = 'W', long = "size")]
    pub size: Option<CanvasSize>,

    /// Background style: neon-grid, blue-gradient, abstract-circles,
    /// diagonal-stripes, noise-texture, radial-glow, mesh-gradient
    #[arg(short = 's', long = "style")]
    pub style: Option<String>,

    /// Words drawn in the accent color (comma separated)
    #[arg(short = 'H', long = "highlight")]
    pub highlight: Option<String>,

    // Typography
    /// Font file for short title slides (.ttf, .otf)
    #[arg(long = "title-font")]
    pub title_font: Option<PathBuf>,

    /// Font file for body slides (.ttf, .otf)
    #[arg(long = "body-font")]
    pub body_font: Option<PathBuf>,

    /// Title font size in pixels (48-140)
    #[arg(long = "title-size")]
    pub title_size: Option<f32>,

    /// Body font size in pixels (40-100)
    #[arg(long = "body-size")]
    pub body_size: Option<f32>,

    /// Start text at the top margin instead of centering it
    #[arg(long = "top-align", action = ArgAction::SetTrue)]
    pub top_align: bool,

    /// Shrink fonts until each slide's text fits the canvas
    #[arg(long = "auto-fit", action = ArgAction::SetTrue)]
    pub auto_fit: bool,

    // Branding
    /// Logo PNG, composited bottom-center
    #[arg(short = 'l', long = "logo")]
    pub logo: Option<PathBuf>,

    /// Logo width as a fraction of the canvas width (0.15-0.6)
    #[arg(long = "logo-width")]
    pub logo_width: Option<f32>,

    // Output Options
    /// Also write carousel.zip with every slide
    #[arg(long = "zip", action = ArgAction::SetTrue)]
    pub zip: bool,

    /// Also write carousel.pdf (on by default for LinkedIn presets)
    #[arg(long = "pdf", action = ArgAction::SetTrue, conflicts_with = "no_pdf")]
    pub pdf: bool,

    /// Never write a PDF
    #[arg(long = "no-pdf", action = ArgAction::SetTrue)]
    pub no_pdf: bool,

    /// Write <project>_bundle.zip with PNGs, PDF and README
    #[arg(short = 'b', long = "bundle", value_name = "PROJECT")]
    pub bundle: Option<String>,

    /// PDF resolution in dots per inch
    #[arg(long = "dpi")]
    pub dpi: Option<f32>,

    /// Directory the files are written to
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// JSON render configuration; command-line options take precedence
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Where the post will be published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Platform {
    #[default]
    Linkedin,
    Instagram,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
        }
    }
}

/// Voice of the post's opening line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tone {
    #[default]
    Pro,
    /// Student-friendly
    Friendly,
    /// Short and punchy
    Punchy,
}

/// Arguments for the post command
#[derive(Parser, Debug)]
pub struct PostArgs {
    /// Target platform
    #[arg(long = "platform", value_enum, default_value_t = Platform::Linkedin)]
    pub platform: Platform,

    /// Tone of the opening line
    #[arg(long = "tone", value_enum, default_value_t = Tone::Pro)]
    pub tone: Tone,

    /// What the post is meant to achieve
    #[arg(long = "goal", default_value = "Rejoindre IACubateur et déposer un projet")]
    pub goal: String,

    /// Key points, one per line
    #[arg(
        long = "points",
        allow_hyphen_values = true,
        default_value = "Experts IA 24/7\nCommunauté d’étudiants\nProgramme personnalisé\nDiagnostic gratuit"
    )]
    pub points: String,

    /// Call-to-action link
    #[arg(long = "url", default_value = "https://iacubateur.com")]
    pub url: String,

    /// Write post_<platform>.txt here instead of printing to stdout
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}
