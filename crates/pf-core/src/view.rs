//! Display-ready view models handed to the display port.

use serde::Serialize;

use crate::ids::ProjectId;

/// One button in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub filter: String,
    pub label: String,
    pub active: bool,
}

/// Full replacement for the project grid and its surrounding controls.
///
/// Built from scratch on every reconcile; two views built from the same
/// inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub grid_html: String,
    pub filter_controls: Vec<FilterControl>,
    /// Present only while a search term is active
    pub summary_html: Option<String>,
    pub visible_ids: Vec<ProjectId>,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.visible_ids.is_empty()
    }

    pub fn active_control(&self) -> Option<&FilterControl> {
        self.filter_controls.iter().find(|c| c.active)
    }
}

/// Untruncated detail for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetailView {
    pub project_id: ProjectId,
    /// `project_id`, escaped for attribute values
    pub project_id_html: String,
    pub title: String,
    /// `title`, escaped for markup
    pub title_html: String,
    pub body_html: String,
}
