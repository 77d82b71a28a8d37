//! Multi-page PDF export, one slide per page
//!
//! Each page is exactly the size of its slide at the chosen resolution and
//! holds a single image XObject: Flate-compressed RGB with the alpha channel
//! as a soft mask.

use std::io::Write;

use carousel_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};
use flate2::{write::ZlibEncoder, Compression};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};

/// Resolution slides are placed at unless told otherwise
pub const DEFAULT_DPI: f32 = 144.0;

const IMAGE_NAME: Name<'static> = Name(b"Im1");

/// Length in points of `pixels` printed at `dpi`
pub fn page_size_points(pixels: u32, dpi: f32) -> f32 {
    pixels as f32 * 72.0 / dpi
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let failed = |e: std::io::Error| ExportError::EncodingFailed(format!("Flate compression failed: {e}"));
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(failed)?;
    Ok(encoder.finish().map_err(failed)?)
}

/// Split straight RGBA into compressed color and alpha planes
fn image_planes(slide: &BitmapData) -> Result<(Vec<u8>, Vec<u8>)> {
    let slide = slide.clone().into_rgba8()?;
    let pixels = slide.data.len() / 4;
    let mut rgb = Vec::with_capacity(pixels * 3);
    let mut alpha = Vec::with_capacity(pixels);

    for px in slide.data.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
        alpha.push(px[3]);
    }
    Ok((deflate(&rgb)?, deflate(&alpha)?))
}

/// Lay the slides out as consecutive PDF pages
///
/// `dpi` must be positive; page size in points is `px * 72 / dpi`.
pub fn package_pdf(slides: &[BitmapData], dpi: f32) -> Result<Vec<u8>> {
    if slides.is_empty() {
        return Err(ExportError::NothingToExport.into());
    }
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(ExportError::EncodingFailed(format!("resolution must be positive, got {dpi}")).into());
    }

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    // Four objects per page: page, content stream, image, soft mask
    let ids = |idx: usize| {
        let base = 3 + idx as i32 * 4;
        (Ref::new(base), Ref::new(base + 1), Ref::new(base + 2), Ref::new(base + 3))
    };

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids((0..slides.len()).map(|idx| ids(idx).0))
        .count(slides.len() as i32);

    for (idx, slide) in slides.iter().enumerate() {
        let (page_id, content_id, image_id, mask_id) = ids(idx);
        let width = page_size_points(slide.width, dpi);
        let height = page_size_points(slide.height, dpi);
        let (rgb, alpha) = image_planes(slide)?;

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(IMAGE_NAME, image_id);
        page.finish();

        let mut image = pdf.image_xobject(image_id, &rgb);
        image.filter(Filter::FlateDecode);
        image.width(slide.width as i32);
        image.height(slide.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.s_mask(mask_id);
        image.finish();

        let mut mask = pdf.image_xobject(mask_id, &alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(slide.width as i32);
        mask.height(slide.height as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        mask.finish();

        // Scale the unit image square to the full page
        let mut content = Content::new();
        content.save_state();
        content.transform([width, 0.0, 0.0, height, 0.0, 0.0]);
        content.x_object(IMAGE_NAME);
        content.restore_state();
        pdf.stream(content_id, &content.finish());

        log::debug!("PDF page {}: {}x{}pt", idx + 1, width, height);
    }

    let bytes = pdf.finish();
    log::info!("Wrote {} page PDF ({} bytes) at {} dpi", slides.len(), bytes.len(), dpi);
    Ok(bytes)
}

/// Multi-page PDF, the LinkedIn document format
pub struct PdfExporter {
    dpi: f32,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::with_dpi(DEFAULT_DPI)
    }

    pub fn with_dpi(dpi: f32) -> Self {
        Self { dpi }
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for PdfExporter {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn export(&self, slides: &[BitmapData]) -> Result<Vec<u8>> {
        package_pdf(slides, self.dpi)
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }
}
