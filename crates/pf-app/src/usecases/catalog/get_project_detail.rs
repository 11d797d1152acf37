use std::sync::Arc;

use pf_core::{ports::CatalogDisplayPort, ProjectDetailView};

use super::controller::ProjectLookup;
use crate::render::render_project_detail;

/// Show (or close) the full detail of a single project.
pub struct GetProjectDetail {
    display: Arc<dyn CatalogDisplayPort>,
}

impl GetProjectDetail {
    pub fn new(display: Arc<dyn CatalogDisplayPort>) -> Self {
        Self { display }
    }

    /// Unknown ids show nothing and return `None`.
    #[tracing::instrument(skip(self, lookup))]
    pub async fn execute(
        &self,
        lookup: &(impl ProjectLookup + ?Sized),
        project_id: &str,
    ) -> Option<ProjectDetailView> {
        let Some(project) = lookup.project(project_id) else {
            tracing::debug!(project_id, "project not found, detail not shown");
            return None;
        };

        let detail = render_project_detail(project);
        if let Err(err) = self.display.present_detail(Some(&detail)).await {
            tracing::error!(error = %err, project_id, "failed to present project detail");
        }
        Some(detail)
    }

    pub async fn close(&self) {
        if let Err(err) = self.display.present_detail(None).await {
            tracing::error!(error = %err, "failed to close project detail");
        }
    }
}
