//! Export module for carousel slides
//!
//! Turns an ordered slide sequence into downloadable bytes:
//!
//! - [`encode_png`] / [`PngExporter`] - a single slide as PNG
//! - [`package_zip`] / [`ZipExporter`] - every slide as PNG inside a ZIP
//! - [`package_pdf`] / [`PdfExporter`] - one PDF page per slide
//! - [`package_bundle`] / [`BundleExporter`] - PNGs, PDF and README together
//!
//! Every packager rejects an empty sequence with
//! [`ExportError::NothingToExport`](carousel_core::error::ExportError).

pub mod archive;
pub mod bundle;
pub mod pdf;
pub mod png;

pub use archive::{package_zip, slide_file_name, ZipExporter, DEFAULT_PREFIX};
pub use bundle::{package_bundle, package_bundle_at, readme_text, BundleExporter};
pub use pdf::{package_pdf, page_size_points, PdfExporter, DEFAULT_DPI};
pub use png::{encode_png, PngExporter};
