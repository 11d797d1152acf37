//! HTML rendering for the catalog grid and the project detail view.
//!
//! Every render is a full rebuild from its inputs. Nothing is patched in
//! place, so rendering the same inputs twice yields identical output.

mod catalog;
mod detail;
mod html;

pub use catalog::{render_catalog, PREVIEW_TAG_LIMIT, PREVIEW_TOOL_LIMIT};
pub use detail::render_project_detail;
pub use html::{escape_html, Highlighter};
