use serde::Serialize;

pub const DEFAULT_SCALE: f32 = 1.5;
pub const ZOOM_STEP: f32 = 0.25;
/// Zooming out is only allowed while the scale is above this.
pub const MIN_ZOOM_OUT_SCALE: f32 = 0.5;

const DEFAULT_DOCUMENT_NAME: &str = "Documento PDF";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenDocument {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfViewerState {
    document: Option<OpenDocument>,
    current_page: u32,
    total_pages: u32,
    scale: f32,
}

impl Default for PdfViewerState {
    fn default() -> Self {
        Self {
            document: None,
            current_page: 1,
            total_pages: 0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl PdfViewerState {
    /// Show a document whose page count the renderer has reported.
    pub fn open(&mut self, url: impl Into<String>, name: Option<&str>, total_pages: u32) {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_NAME);
        self.document = Some(OpenDocument {
            url: url.into(),
            name: name.to_string(),
        });
        self.total_pages = total_pages;
        self.current_page = 1;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_open() && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.is_open() && self.current_page < self.total_pages
    }

    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn zoom_in(&mut self) {
        self.scale += ZOOM_STEP;
    }

    /// Returns whether the scale changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.scale <= MIN_ZOOM_OUT_SCALE {
            return false;
        }
        self.scale -= ZOOM_STEP;
        true
    }

    pub fn zoom_fit(&mut self) {
        self.scale = DEFAULT_SCALE;
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}
