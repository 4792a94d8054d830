use serde::{Deserialize, Serialize};

/// A vocabulary or ontology that terms belong to, keyed by its prefix.
///
/// Loading a term file only establishes the prefix; the descriptive fields
/// are filled in when an enriched datasource file is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datasource {
    pub prefix: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version_info: Option<String>,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub alternate_prefixes: Vec<String>,
}

impl Datasource {
    /// Create a bare datasource known only by its prefix.
    pub fn new(prefix: String) -> Self {
        Self {
            prefix,
            name: None,
            description: None,
            version_info: None,
            licence: None,
            alternate_prefixes: Vec::new(),
        }
    }

    /// Whether any descriptive field beyond the prefix has been filled in.
    pub fn is_enriched(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.version_info.is_some()
            || self.licence.is_some()
            || !self.alternate_prefixes.is_empty()
    }
}
