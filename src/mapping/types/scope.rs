use serde::{Deserialize, Serialize};

/// Classifies the semantic relationship of a mapping between two terms.
///
/// Serialized as its uppercase tag (`"EXACT"`, `"BROADER"`, ...), which is
/// the representation used on the wire by [`MappingRecord`](super::MappingRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    Exact,
    Broader,
    Narrower,
    Related,
}

impl Scope {
    /// Classify a mapping predicate into a per-hop scope.
    ///
    /// Bare cross-reference predicates with no SKOS match qualifier are
    /// treated as exact.
    pub fn from_predicate(predicate: &str) -> Self {
        if predicate.contains("broadMatch") {
            Scope::Broader
        } else if predicate.contains("narrowMatch") {
            Scope::Narrower
        } else if predicate.contains("relatedMatch") {
            Scope::Related
        } else {
            Scope::Exact
        }
    }

    /// Combine the scope accumulated along a path with the next hop.
    ///
    /// Exact is the identity. Related absorbs everything. A path that both
    /// broadens and narrows no longer has a direction and degrades to
    /// related.
    pub fn combine(self, hop: Scope) -> Scope {
        use Scope::*;
        match (self, hop) {
            (Exact, s) => s,
            (s, Exact) => s,
            (Related, _) | (_, Related) => Related,
            (Broader, Broader) => Broader,
            (Narrower, Narrower) => Narrower,
            (Broader, Narrower) | (Narrower, Broader) => Related,
        }
    }
}
