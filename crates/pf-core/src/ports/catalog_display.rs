use async_trait::async_trait;

use crate::settings::Theme;
use crate::view::{CatalogView, ProjectDetailView};
use crate::viewer::PdfViewerState;

/// Display target for everything the controller renders.
///
/// Each call replaces what was previously shown for that surface.
#[async_trait]
pub trait CatalogDisplayPort: Send + Sync {
    async fn present_catalog(&self, view: &CatalogView) -> anyhow::Result<()>;

    /// `None` closes the detail view.
    async fn present_detail(&self, detail: Option<&ProjectDetailView>) -> anyhow::Result<()>;

    async fn present_viewer(&self, state: &PdfViewerState) -> anyhow::Result<()>;

    /// Targets without a notion of theme ignore it.
    async fn present_theme(&self, _theme: Theme) -> anyhow::Result<()> {
        Ok(())
    }
}
