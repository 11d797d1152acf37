//! Project catalog domain: records, categories, query state and the
//! filter/search predicate.

mod catalog;
mod category;
mod format;
mod model;
mod query;

pub use catalog::Catalog;
pub use category::{Category, CategoryBadge, CategoryFilter};
pub use format::{format_project_date, MONTH_ABBREVIATIONS};
pub use model::{PortfolioDocument, ProjectRecord};
pub use query::{filter_projects, matches, QueryState, SearchTerm};
