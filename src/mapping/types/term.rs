use serde::{Deserialize, Serialize};

use crate::error::{TermFoldError, TermFoldResult};

/// A single identifier in the mapping graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Compact URI identifying the term, e.g. `"MESH:D009103"`.
    pub curie: String,
    /// Human-readable label, when the source supplied one.
    pub label: Option<String>,
    /// Optional category the source assigned, e.g. `"disease"`.
    pub category: Option<String>,
    /// Prefix of the datasource the term belongs to.
    pub prefix: String,
}

impl Term {
    pub fn new(curie: String, prefix: String) -> Self {
        Self {
            curie,
            label: None,
            category: None,
            prefix,
        }
    }
}

/// Extract the namespace prefix of a curie: the text before the first `:`.
pub fn curie_prefix(curie: &str) -> TermFoldResult<&str> {
    match curie.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => Ok(prefix),
        _ => Err(TermFoldError::InvalidCurie(format!(
            "'{}' is not of the form prefix:identifier",
            curie
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curie_prefix() {
        assert_eq!(curie_prefix("DOID:1234").unwrap(), "DOID");
        assert_eq!(curie_prefix("MESH:D009103").unwrap(), "MESH");
    }

    #[test]
    fn test_curie_prefix_keeps_only_first_colon() {
        assert_eq!(curie_prefix("UMLS:CUI:C0027651").unwrap(), "UMLS");
    }

    #[test]
    fn test_curie_prefix_rejects_malformed() {
        assert!(curie_prefix("no-colon").is_err());
        assert!(curie_prefix(":1234").is_err());
        assert!(curie_prefix("DOID:").is_err());
        assert!(curie_prefix("").is_err());
    }
}
