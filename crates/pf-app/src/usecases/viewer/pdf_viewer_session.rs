use std::sync::Arc;

use pf_core::{document_url, ports::CatalogDisplayPort, PdfViewerState, ProjectRecord};

/// Owns the viewer state and pushes every change to the display.
///
/// Navigation and zoom requests that the state refuses (first page, minimum
/// zoom, nothing open) are not re-presented.
pub struct PdfViewerSession {
    state: PdfViewerState,
    display: Arc<dyn CatalogDisplayPort>,
}

impl PdfViewerSession {
    pub fn new(display: Arc<dyn CatalogDisplayPort>) -> Self {
        Self {
            state: PdfViewerState::default(),
            display,
        }
    }

    pub fn state(&self) -> &PdfViewerState {
        &self.state
    }

    /// Open the `document_index`-th document of `project`. Returns false when
    /// the project has no such document.
    #[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
    pub async fn open(
        &mut self,
        project: &ProjectRecord,
        document_index: usize,
        total_pages: u32,
    ) -> bool {
        let Some(file_name) = project.documents.get(document_index) else {
            tracing::warn!(
                document_index,
                available = project.documents.len(),
                "project has no document at that index"
            );
            return false;
        };

        self.state
            .open(document_url(file_name), Some(file_name), total_pages);
        self.present().await;
        true
    }

    pub async fn next_page(&mut self) {
        if self.state.next_page() {
            self.present().await;
        }
    }

    pub async fn previous_page(&mut self) {
        if self.state.previous_page() {
            self.present().await;
        }
    }

    pub async fn zoom_in(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.state.zoom_in();
        self.present().await;
    }

    pub async fn zoom_out(&mut self) {
        if self.state.is_open() && self.state.zoom_out() {
            self.present().await;
        }
    }

    pub async fn zoom_fit(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.state.zoom_fit();
        self.present().await;
    }

    pub async fn close(&mut self) {
        self.state.close();
        self.present().await;
    }

    async fn present(&self) {
        if let Err(err) = self.display.present_viewer(&self.state).await {
            tracing::error!(error = %err, "failed to present pdf viewer");
        }
    }
}
