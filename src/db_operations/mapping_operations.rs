use super::core::{DbOperations, KEY_SEP};
use crate::error::TermFoldResult;
use crate::mapping::types::MappingEdge;

fn edge_key(a: &str, b: &str, predicate: &str) -> String {
    format!("{a}{KEY_SEP}{b}{KEY_SEP}{predicate}")
}

impl DbOperations {
    /// Stores a mapping edge, mirrored into the reverse tree so both
    /// endpoints can be prefix-scanned. Re-asserting the same
    /// subject/object/predicate overwrites in place.
    pub fn store_mapping(&self, edge: &MappingEdge) -> TermFoldResult<()> {
        let forward = edge_key(&edge.subject_id, &edge.object_id, &edge.predicate);
        let reverse = edge_key(&edge.object_id, &edge.subject_id, &edge.predicate);
        self.store_in_tree(&self.mappings_tree, &forward, edge)?;
        self.store_in_tree(&self.mappings_rev_tree, &reverse, edge)
    }

    /// Gets a mapping edge by its subject, object, and predicate
    pub fn get_mapping(
        &self,
        subject_id: &str,
        object_id: &str,
        predicate: &str,
    ) -> TermFoldResult<Option<MappingEdge>> {
        self.get_from_tree(
            &self.mappings_tree,
            &edge_key(subject_id, object_id, predicate),
        )
    }

    /// All edges touching `curie`, regardless of direction.
    ///
    /// Self-mappings are skipped in the reverse scan so an edge never
    /// appears twice.
    pub fn neighbors(&self, curie: &str) -> TermFoldResult<Vec<MappingEdge>> {
        let mut edges = Vec::new();
        let prefix = format!("{curie}{KEY_SEP}");

        for result in self.mappings_tree.scan_prefix(prefix.as_bytes()) {
            let (_, value) = result?;
            let edge: MappingEdge = serde_json::from_slice(&value)?;
            edges.push(edge);
        }
        for result in self.mappings_rev_tree.scan_prefix(prefix.as_bytes()) {
            let (_, value) = result?;
            let edge: MappingEdge = serde_json::from_slice(&value)?;
            if edge.subject_id != edge.object_id {
                edges.push(edge);
            }
        }

        Ok(edges)
    }

    /// Total number of stored mapping edges
    pub fn mapping_count(&self) -> u64 {
        self.mappings_tree.len() as u64
    }
}
