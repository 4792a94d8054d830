use super::core::DbOperations;
use crate::error::TermFoldResult;
use crate::mapping::types::Datasource;

impl DbOperations {
    /// Stores a datasource keyed by its prefix, replacing any existing one.
    pub fn store_datasource(&self, datasource: &Datasource) -> TermFoldResult<()> {
        self.store_in_tree(&self.datasources_tree, &datasource.prefix, datasource)
    }

    /// Merge-style insert: a bare prefix never overwrites an enriched
    /// datasource that is already stored.
    pub fn merge_datasource(&self, datasource: &Datasource) -> TermFoldResult<()> {
        if let Some(existing) = self.get_datasource(&datasource.prefix)? {
            if existing.is_enriched() && !datasource.is_enriched() {
                return Ok(());
            }
        }
        self.store_datasource(datasource)
    }

    /// Gets a datasource by prefix
    pub fn get_datasource(&self, prefix: &str) -> TermFoldResult<Option<Datasource>> {
        self.get_from_tree(&self.datasources_tree, prefix)
    }

    /// Checks if a datasource exists
    pub fn datasource_exists(&self, prefix: &str) -> TermFoldResult<bool> {
        self.exists_in_tree(&self.datasources_tree, prefix)
    }

    /// Lists all datasource prefixes
    pub fn list_datasources(&self) -> TermFoldResult<Vec<String>> {
        self.list_keys_in_tree(&self.datasources_tree)
    }
}
