use shipbook_directory::collation::collation_key;

pub const DEFAULT_SUGGESTED_COUNT: usize = 4;

/// Country names offered by the location selector, plus the state of the
/// one fetch that fills them.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    pub countries: Vec<String>,
    pub suggested: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    suggested_count: usize,
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTED_COUNT)
    }
}

impl CountryCatalog {
    pub fn new(suggested_count: usize) -> Self {
        Self {
            countries: Vec::new(),
            suggested: Vec::new(),
            is_loading: false,
            error: None,
            suggested_count,
        }
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Records the outcome of the fetch. `countries` is expected to be sorted
    /// already; on failure the list stays as it was.
    pub fn finish_loading(&mut self, result: Result<Vec<String>, String>) {
        match result {
            Ok(countries) => {
                self.suggested = countries.iter().take(self.suggested_count).cloned().collect();
                self.countries = countries;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries whose name contains `query`, ignoring case and accents.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = collation_key(query.trim());
        self.countries
            .iter()
            .filter(|name| needle.is_empty() || collation_key(name).contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn success_stores_list_and_first_four_suggestions() {
        let mut catalog = CountryCatalog::default();
        catalog.begin_loading();
        assert!(catalog.is_loading);

        catalog.finish_loading(Ok(names(&["Aruba", "Canada", "Chad", "Denmark", "Egypt", "Zambia"])));

        assert!(!catalog.is_loading);
        assert_eq!(catalog.countries.len(), 6);
        assert_eq!(catalog.suggested, names(&["Aruba", "Canada", "Chad", "Denmark"]));
        assert!(catalog.error.is_none());
    }

    #[test]
    fn short_list_suggests_everything() {
        let mut catalog = CountryCatalog::default();
        catalog.begin_loading();
        catalog.finish_loading(Ok(names(&["Aruba", "Canada", "Zambia"])));

        assert_eq!(catalog.countries, names(&["Aruba", "Canada", "Zambia"]));
        assert_eq!(catalog.suggested, catalog.countries);
    }

    #[test]
    fn failure_keeps_list_empty_and_clears_loading() {
        let mut catalog = CountryCatalog::default();
        catalog.begin_loading();
        catalog.finish_loading(Err("Failed to fetch countries.".to_string()));

        assert!(!catalog.is_loading);
        assert!(catalog.is_empty());
        assert!(catalog.suggested.is_empty());
        assert_eq!(catalog.error.as_deref(), Some("Failed to fetch countries."));
    }

    #[test]
    fn search_ignores_case_and_accents() {
        let mut catalog = CountryCatalog::default();
        catalog.finish_loading(Ok(names(&["Åland Islands", "Curaçao", "Iceland", "Poland"])));

        assert_eq!(catalog.search("LAND"), vec!["Åland Islands", "Iceland", "Poland"]);
        assert_eq!(catalog.search("curac"), vec!["Curaçao"]);
        assert_eq!(catalog.search("  ").len(), 4);
    }
}
