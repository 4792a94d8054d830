use serde::{Deserialize, Serialize};

use super::Scope;

/// The result of mapping one identifier into a target vocabulary.
///
/// This is the payload shape returned by resolution: a pure data snapshot
/// with no reference back to the store that produced it. Construction
/// assigns values verbatim; any validation belongs to the code building
/// the record. Field names on the wire are fixed (`curie`, `label`,
/// `sourcePrefixes`, `targetPrefix`, `distance`, `scope`) and
/// `sourcePrefixes` keeps its insertion order when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    /// Compact URI of the mapped term, e.g. `"DOID:1234"`.
    pub curie: String,
    /// Human-readable label for the term, when one is known.
    pub label: Option<String>,
    /// Namespace prefixes of the input identifiers that produced this
    /// mapping, in the order the inputs were given.
    pub source_prefixes: Vec<String>,
    /// Namespace prefix of the vocabulary `curie` belongs to.
    pub target_prefix: String,
    /// Number of mapping hops between the source and target identifiers.
    pub distance: u32,
    /// Relationship between the source and target identifiers.
    pub scope: Option<Scope>,
}

impl MappingRecord {
    /// Build a record from all six fields, assigned verbatim.
    pub fn new(
        curie: String,
        label: Option<String>,
        source_prefixes: Vec<String>,
        target_prefix: String,
        distance: u32,
        scope: Scope,
    ) -> Self {
        Self {
            curie,
            label,
            source_prefixes,
            target_prefix,
            distance,
            scope: Some(scope),
        }
    }
}
