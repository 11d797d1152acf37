//! Business logic use cases
//!
//! ```text
//! PortfolioSourcePort
//!         ↓
//! LoadCatalog                 → Catalog (empty on failure)
//!         ↓
//! CatalogViewController       ← filter clicks, committed search terms
//!         ↓                   ↑
//! render_catalog → display    SearchDebouncer ← raw keystrokes
//!         ↓
//! GetProjectDetail            → detail view
//! PdfViewerSession            → document navigation
//! ```

pub mod catalog;
pub mod settings;
pub mod viewer;
