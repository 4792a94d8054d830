use super::core::DbOperations;
use crate::error::TermFoldResult;
use crate::mapping::types::Term;

impl DbOperations {
    /// Stores a term keyed by its curie, replacing any existing one.
    pub fn store_term(&self, term: &Term) -> TermFoldResult<()> {
        self.store_in_tree(&self.terms_tree, &term.curie, term)
    }

    /// Upserts a term: label and category already stored are kept when the
    /// incoming term has none, so a sparse row never erases earlier detail.
    pub fn upsert_term(&self, term: &Term) -> TermFoldResult<()> {
        let merged = match self.get_term(&term.curie)? {
            Some(existing) => Term {
                curie: term.curie.clone(),
                label: term.label.clone().or(existing.label),
                category: term.category.clone().or(existing.category),
                prefix: term.prefix.clone(),
            },
            None => term.clone(),
        };
        self.store_term(&merged)
    }

    /// Gets a term by curie
    pub fn get_term(&self, curie: &str) -> TermFoldResult<Option<Term>> {
        self.get_from_tree(&self.terms_tree, curie)
    }

    /// Checks if a term exists
    pub fn term_exists(&self, curie: &str) -> TermFoldResult<bool> {
        self.exists_in_tree(&self.terms_tree, curie)
    }

    /// Lists all term curies
    pub fn list_terms(&self) -> TermFoldResult<Vec<String>> {
        self.list_keys_in_tree(&self.terms_tree)
    }
}
