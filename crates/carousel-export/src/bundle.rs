//! Project bundles: PNGs, the optional PDF and a README in one ZIP

use carousel_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

use crate::{
    archive::{slide_file_name, Archive},
    pdf::{package_pdf, DEFAULT_DPI},
    png::encode_png,
};

/// README placed at the top level of every bundle
pub fn readme_text(project: &str, slide_count: usize, include_pdf: bool) -> String {
    let pdf_line = if include_pdf {
        format!("PDF: included ({project}.pdf)")
    } else {
        "PDF: not included".to_string()
    };
    format!("Project: {project}\nSlides: {slide_count}\nPNG: png/{project}_NN.png\n{pdf_line}\n")
}

/// Everything for one project in a single archive
///
/// Layout: `png/{project}_NN.png` per slide, `{project}.pdf` when
/// `include_pdf` is set, and `README.txt`.
pub fn package_bundle(slides: &[BitmapData], project: &str, include_pdf: bool) -> Result<Vec<u8>> {
    package_bundle_at(slides, project, include_pdf, DEFAULT_DPI)
}

/// [`package_bundle`] with an explicit PDF resolution
pub fn package_bundle_at(
    slides: &[BitmapData],
    project: &str,
    include_pdf: bool,
    dpi: f32,
) -> Result<Vec<u8>> {
    if slides.is_empty() {
        return Err(ExportError::NothingToExport.into());
    }

    let mut archive = Archive::new();
    for (idx, slide) in slides.iter().enumerate() {
        let name = format!("png/{}", slide_file_name(project, idx));
        archive.add(&name, &encode_png(slide)?)?;
    }
    if include_pdf {
        archive.add(&format!("{project}.pdf"), &package_pdf(slides, dpi)?)?;
    }
    archive.add("README.txt", readme_text(project, slides.len(), include_pdf).as_bytes())?;

    let bytes = archive.finish()?;
    log::info!(
        "Bundled '{}': {} slides{}",
        project,
        slides.len(),
        if include_pdf { " + PDF" } else { "" }
    );
    Ok(bytes)
}

/// ZIP bundle for one named project
pub struct BundleExporter {
    project: String,
    include_pdf: bool,
    dpi: f32,
}

impl BundleExporter {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            include_pdf: true,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn include_pdf(mut self, include_pdf: bool) -> Self {
        self.include_pdf = include_pdf;
        self
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }
}

impl Exporter for BundleExporter {
    fn name(&self) -> &'static str {
        "bundle"
    }

    fn export(&self, slides: &[BitmapData]) -> Result<Vec<u8>> {
        package_bundle_at(slides, &self.project, self.include_pdf, self.dpi)
    }

    fn extension(&self) -> &'static str {
        "zip"
    }

    fn mime_type(&self) -> &'static str {
        "application/zip"
    }

    fn file_name(&self) -> String {
        format!("{}_bundle.zip", self.project)
    }
}
