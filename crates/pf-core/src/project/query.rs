use super::category::CategoryFilter;
use super::model::ProjectRecord;

/// Normalised search input.
///
/// Keeps the trimmed text for display and a lowercased needle for
/// matching. An empty term means "no search filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test. The empty term is found everywhere.
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Active category and search term. Exactly one of each at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    category: CategoryFilter,
    search: SearchTerm,
}

impl QueryState {
    pub fn new(category: CategoryFilter, search: SearchTerm) -> Self {
        Self { category, search }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, search: SearchTerm) {
        self.search = search;
    }
}

/// Category AND search: a record must pass both stages.
pub fn matches(record: &ProjectRecord, state: &QueryState) -> bool {
    state.category.admits(&record.category) && matches_search(record, &state.search)
}

fn matches_search(record: &ProjectRecord, term: &SearchTerm) -> bool {
    term.is_empty() || record.searchable_fields().any(|field| term.found_in(field))
}

/// The visible subsequence of `records`, in original order.
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    state: &QueryState,
) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| matches(r, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Category;

    fn record(id: &str, title: &str, category: Category, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: title.to_string(),
            description: String::new(),
            full_description: None,
            category,
            client: None,
            date: "2024-03".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            tools: vec![],
            highlights: vec![],
            documents: vec![],
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record("1", "CAD Bracket", Category::Design, &["cad"]),
            record("2", "FEA Study", Category::Analysis, &["fea"]),
        ]
    }

    fn ids(result: &[&ProjectRecord]) -> Vec<String> {
        result.iter().map(|r| r.id.to_string()).collect()
    }

    fn state(category: &str, search: &str) -> QueryState {
        QueryState::new(CategoryFilter::parse(category), SearchTerm::new(search))
    }

    #[test]
    fn default_state_returns_everything_in_order() {
        let records = sample();
        let result = filter_projects(&records, &QueryState::default());
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn category_then_search_intersect() {
        let records = sample();

        let by_category = filter_projects(&records, &state("analysis", ""));
        assert_eq!(ids(&by_category), vec!["2"]);

        let both = filter_projects(&records, &state("analysis", "bracket"));
        assert!(both.is_empty());
    }

    #[test]
    fn search_matches_through_tags() {
        let mut records = sample();
        records[0].title = "Bracket".to_string();

        let result = filter_projects(&records, &state("all", "cad"));

        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let records = sample();
        let result = filter_projects(&records, &state("all", "  fEa  "));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn search_reaches_optional_fields_when_present() {
        let mut records = sample();
        records[1].client = Some("Acme Aero".to_string());
        records[1].highlights = vec!["Reduced mass by 12%".to_string()];
        records[0].full_description = Some("Topology optimised".to_string());

        assert_eq!(ids(&filter_projects(&records, &state("all", "acme"))), vec!["2"]);
        assert_eq!(ids(&filter_projects(&records, &state("all", "mass"))), vec!["2"]);
        assert_eq!(
            ids(&filter_projects(&records, &state("all", "topology"))),
            vec!["1"]
        );
    }

    #[test]
    fn unrecognized_category_yields_nothing() {
        let records = sample();
        assert!(filter_projects(&records, &state("robotics", "")).is_empty());
        assert!(filter_projects(&records, &state("ALL", "")).is_empty());
    }

    #[test]
    fn empty_collection_yields_nothing() {
        assert!(filter_projects(&[], &state("design", "cad")).is_empty());
        assert!(filter_projects(&[], &QueryState::default()).is_empty());
    }

    #[test]
    fn result_is_exactly_the_records_containing_the_term() {
        let mut records = sample();
        records.push(record("3", "Gearbox housing", Category::Manufacturing, &["cnc"]));
        records[2].tools = vec!["SolidWorks".to_string()];
        let term = SearchTerm::new("o");

        let result = filter_projects(&records, &QueryState::new(CategoryFilter::All, term.clone()));

        for r in &records {
            let hit = r.searchable_fields().any(|f| f.to_lowercase().contains(term.needle()));
            assert_eq!(result.iter().any(|m| m.id == r.id), hit, "record {}", r.id);
        }
    }
}
