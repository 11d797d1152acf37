use std::collections::HashSet;

use super::model::ProjectRecord;

/// Read-only project collection for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the catalog from document order.
    ///
    /// Ids must be unique; a later record reusing an id is dropped so that
    /// lookups by id stay unambiguous.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut projects = Vec::with_capacity(records.len());

        for record in records {
            if seen.insert(record.id.clone()) {
                projects.push(record);
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(project_id = %record.id, "duplicate project id dropped");
            }
        }

        Self { projects }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
