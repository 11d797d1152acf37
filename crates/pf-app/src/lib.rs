//! Portfolio catalog application layer
//!
//! Use cases that drive the catalog: loading, reconciling the project grid,
//! debounced search, detail view, theme preference and the PDF viewer.

pub mod app_paths;
pub mod render;
pub mod usecases;

pub use usecases::catalog::{
    CatalogViewController, CommittedSearch, GetProjectDetail, LoadCatalog, ProjectLookup,
    SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE,
};
pub use usecases::settings::{ResolveTheme, ToggleTheme};
pub use usecases::viewer::PdfViewerSession;
