//! Render command implementation
//!
//! Builds one composer for the batch, renders every slide, then writes the
//! PNGs and whichever packages were asked for.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use carousel::compose::{HighlightSet, Logo, SlideComposer};
use carousel::export::{self, BundleExporter, PdfExporter, ZipExporter};
use carousel::font::FontFace;
use carousel::traits::Exporter;
use carousel::types::BitmapData;

use crate::cli::RenderArgs;
use crate::config::{RenderConfig, DEMO_TEXT};

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = RenderConfig::resolve(args)?;
    let text = input_text(args, &config)?;

    let canvas = config.canvas()?;
    let style = config.style();
    if !args.quiet {
        eprintln!("Carousel v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Rendering {} slides on {}...", canvas, style.display_name());
    }

    let composer = build_composer(&config)?;
    let slides = composer.render_batch(&text)?;
    if slides.is_empty() {
        bail!("No slides to render: the text is blank");
    }

    let dir = &config.output_dir;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for (idx, slide) in slides.iter().enumerate() {
        let path = dir.join(export::slide_file_name(export::DEFAULT_PREFIX, idx));
        write_file(&path, &export::encode_png(slide)?)?;
        written.push(path);
    }

    let want_pdf = config.want_pdf()?;
    if config.zip {
        written.push(write_export(dir, &ZipExporter::new(), &slides)?);
    }
    if want_pdf {
        written.push(write_export(dir, &PdfExporter::with_dpi(config.dpi), &slides)?);
    }
    if let Some(project) = &config.bundle {
        let bundle = BundleExporter::new(project.as_str())
            .include_pdf(want_pdf)
            .dpi(config.dpi);
        written.push(write_export(dir, &bundle, &slides)?);
    }

    if !args.quiet {
        eprintln!("✓ Rendered {} slides ({})", slides.len(), canvas);
        for path in &written {
            eprintln!("  {}", path.display());
        }
    }
    Ok(())
}

/// `--text`, then `--text-file`, then the config file, then the demo text
fn input_text(args: &RenderArgs, config: &RenderConfig) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.text_file {
        return read_text_file(path);
    }
    Ok(config.text.clone().unwrap_or_else(|| DEMO_TEXT.to_string()))
}

fn read_text_file(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read text file {}", path.display()))
}

fn build_composer(config: &RenderConfig) -> Result<SlideComposer> {
    let title_face = FontFace::from_file_or_builtin(config.title_font.as_deref());
    let body_face = FontFace::from_file_or_builtin(config.body_font.as_deref());

    let logo = config
        .logo
        .as_deref()
        .map(|path| {
            Logo::from_file(path).with_context(|| format!("Failed to load logo {}", path.display()))
        })
        .transpose()?;

    let composer = SlideComposer::builder()
        .canvas(config.canvas()?)
        .style(config.style())
        .title_font(title_face.at_size(config.title_size))
        .body_font(body_face.at_size(config.body_size))
        .highlight(HighlightSet::from_csv(&config.highlight))
        .logo(logo)
        .logo_width_pct(config.logo_width)
        .top_align(config.top_align)
        .auto_fit(config.auto_fit)
        .build()?;
    Ok(composer)
}

fn write_export(dir: &Path, exporter: &dyn Exporter, slides: &[BitmapData]) -> Result<PathBuf> {
    log::debug!("Exporting with {} ({})", exporter.name(), exporter.mime_type());
    let bytes = exporter.export(slides)?;
    let path = dir.join(exporter.file_name());
    write_file(&path, &bytes)?;
    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
