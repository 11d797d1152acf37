//! Navigation state of the embedded PDF viewer.
//!
//! Rasterising pages belongs to the external renderer; this module only
//! tracks which document is open, which page is shown and at what scale.

mod pdf_state;

pub use pdf_state::{OpenDocument, PdfViewerState, DEFAULT_SCALE, MIN_ZOOM_OUT_SCALE, ZOOM_STEP};

/// Directory, relative to the site root, that project documents are served from.
pub const DOCUMENTS_BASE: &str = "assets/documents";

pub fn document_url(file_name: &str) -> String {
    format!("{DOCUMENTS_BASE}/{file_name}")
}
