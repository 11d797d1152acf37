use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::ids::ProjectId;

/// One portfolio project, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// `YYYY-MM`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl ProjectRecord {
    /// Every text field the search term is matched against.
    ///
    /// Absent optional fields simply contribute nothing.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.full_description.as_deref())
            .chain(self.tags.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str))
            .chain(self.client.as_deref())
            .chain(self.highlights.iter().map(String::as_str))
    }
}

/// The portfolio data document.
///
/// Sibling collections (experience, skills, certifications) are present in
/// the file but not consumed here; serde skips them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}
