use std::sync::Arc;

use pf_core::{
    filter_projects, ports::CatalogDisplayPort, Catalog, CatalogView, CategoryFilter,
    ProjectRecord, QueryState, SearchTerm,
};

use crate::render::render_catalog;

/// Read access to projects by id, for the detail view and PDF viewer.
pub trait ProjectLookup {
    fn project(&self, id: &str) -> Option<&ProjectRecord>;
}

impl ProjectLookup for Catalog {
    fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.get(id)
    }
}

/// Owns the catalog and the query state for one page session.
///
/// Constructed once after the catalog has loaded and driven from a single
/// event loop; every state change ends in a full reconcile of the grid.
pub struct CatalogViewController {
    catalog: Catalog,
    query: QueryState,
    display: Arc<dyn CatalogDisplayPort>,
    last_view: Option<CatalogView>,
}

impl CatalogViewController {
    pub fn new(catalog: Catalog, display: Arc<dyn CatalogDisplayPort>) -> Self {
        Self {
            catalog,
            query: QueryState::default(),
            display,
            last_view: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    /// The view produced by the most recent reconcile.
    pub fn last_view(&self) -> Option<&CatalogView> {
        self.last_view.as_ref()
    }

    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        filter_projects(self.catalog.projects(), &self.query)
    }

    /// Recompute the visible set and replace the whole display.
    pub async fn refresh(&mut self) -> CatalogView {
        let view = render_catalog(&self.visible_projects(), &self.query);

        if let Err(err) = self.display.present_catalog(&view).await {
            tracing::error!(error = %err, "failed to present catalog");
        }

        tracing::debug!(
            category = self.query.category().as_str(),
            search = self.query.search().as_str(),
            visible = view.visible_ids.len(),
            "catalog reconciled"
        );

        self.last_view = Some(view.clone());
        view
    }

    /// A filter control was clicked.
    #[tracing::instrument(skip(self))]
    pub async fn select_category(&mut self, raw: &str) -> CatalogView {
        let filter = CategoryFilter::parse(raw);
        if let CategoryFilter::Unrecognized(value) = &filter {
            tracing::warn!(category = %value, "unrecognized category selected, nothing will match");
        }
        self.query.set_category(filter);
        self.refresh().await
    }

    /// A search term was committed (after debounce).
    #[tracing::instrument(skip(self))]
    pub async fn commit_search(&mut self, raw: &str) -> CatalogView {
        self.query.set_search(SearchTerm::new(raw));
        self.refresh().await
    }

    pub async fn clear_search(&mut self) -> CatalogView {
        self.commit_search("").await
    }
}

impl ProjectLookup for CatalogViewController {
    fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.catalog.get(id)
    }
}
