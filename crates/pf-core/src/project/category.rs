use serde::{Deserialize, Serialize};

/// Project category as stored in the data document.
///
/// Values outside the fixed enumeration are kept verbatim in `Other` so a
/// single odd record never poisons the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Design,
    Analysis,
    Manufacturing,
    Other(String),
}

/// Visual badge drawn on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const DESIGN_BADGE: CategoryBadge = CategoryBadge {
    icon: "📐",
    label: "DISEÑO CAD",
    color: "#1E88E5",
};

const ANALYSIS_BADGE: CategoryBadge = CategoryBadge {
    icon: "📊",
    label: "ANÁLISIS FEA/CFD",
    color: "#FF6F00",
};

const MANUFACTURING_BADGE: CategoryBadge = CategoryBadge {
    icon: "⚙️",
    label: "MANUFACTURA",
    color: "#00897B",
};

const FALLBACK_BADGE: CategoryBadge = CategoryBadge {
    icon: "🔧",
    label: "PROYECTO",
    color: "#546E7A",
};

impl Category {
    /// Members of the fixed enumeration, in filter-bar order.
    pub const KNOWN: [Category; 3] = [
        Category::Design,
        Category::Analysis,
        Category::Manufacturing,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Design => "design",
            Category::Analysis => "analysis",
            Category::Manufacturing => "manufacturing",
            Category::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// Human readable name used by the detail view and filter controls.
    pub fn display_name(&self) -> &str {
        match self {
            Category::Design => "Diseño CAD",
            Category::Analysis => "Análisis FEA/CFD",
            Category::Manufacturing => "Manufactura",
            Category::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> CategoryBadge {
        match self {
            Category::Design => DESIGN_BADGE,
            Category::Analysis => ANALYSIS_BADGE,
            Category::Manufacturing => MANUFACTURING_BADGE,
            Category::Other(_) => FALLBACK_BADGE,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw {
            "design" => Category::Design,
            "analysis" => Category::Analysis,
            "manufacturing" => Category::Manufacturing,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match Category::from(raw.as_str()) {
            Category::Other(_) => Category::Other(raw),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// The category half of the query state.
///
/// `Unrecognized` keeps whatever the host sent so it can be logged; it
/// admits no record at all, not even records whose own category happens to
/// carry the same unknown string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    /// Parse the value carried by a filter control.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == Self::ALL_KEY {
            return CategoryFilter::All;
        }
        match Category::from(raw) {
            Category::Other(unknown) => CategoryFilter::Unrecognized(unknown),
            known => CategoryFilter::Only(known),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }

    pub fn admits(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }

    /// Filters that have a control in the filter bar, in display order.
    pub fn controls() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(category) => category.display_name(),
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }
}
