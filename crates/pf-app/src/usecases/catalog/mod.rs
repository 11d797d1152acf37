mod controller;
mod get_project_detail;
mod load_catalog;
mod search_debouncer;

pub use controller::{CatalogViewController, ProjectLookup};
pub use get_project_detail::GetProjectDetail;
pub use load_catalog::LoadCatalog;
pub use search_debouncer::{CommittedSearch, SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
