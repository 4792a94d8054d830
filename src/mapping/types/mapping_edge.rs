use serde::{Deserialize, Serialize};

/// One cross-reference assertion between two terms.
///
/// Edges are stored directed (subject to object) but the graph is walked
/// in both directions during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEdge {
    pub subject_id: String,
    pub object_id: String,
    /// Mapping predicate, e.g. `"skos:exactMatch"` or `"oboInOwl:hasDbXref"`.
    pub predicate: String,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub mapping_tool: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub match_category: Option<String>,
    #[serde(default)]
    pub match_string: Option<String>,
}

impl MappingEdge {
    pub fn new(subject_id: String, object_id: String, predicate: String) -> Self {
        Self {
            subject_id,
            object_id,
            predicate,
            match_type: None,
            mapping_tool: None,
            confidence: None,
            match_category: None,
            match_string: None,
        }
    }

    /// The endpoint of the edge that is not `curie`.
    ///
    /// Callers guarantee `curie` is one of the endpoints; an edge scanned
    /// out of the reverse tree still reports the correct far side.
    pub fn other_endpoint<'a>(&'a self, curie: &str) -> &'a str {
        if self.subject_id == curie {
            &self.object_id
        } else {
            &self.subject_id
        }
    }
}
