//! # pf-core
//!
//! Core domain models and query logic for the portfolio catalog.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod ports;
pub mod project;
pub mod settings;
pub mod view;
pub mod viewer;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::ProjectId;
pub use project::{
    filter_projects, format_project_date, Catalog, Category, CategoryBadge, CategoryFilter,
    PortfolioDocument, ProjectRecord, QueryState, SearchTerm,
};
pub use view::{CatalogView, FilterControl, ProjectDetailView};
pub use viewer::{document_url, PdfViewerState};
