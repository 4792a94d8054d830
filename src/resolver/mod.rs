//! Mapping resolution: walks the cross-reference graph outward from a set
//! of input identifiers and reports which terms they reach in the
//! requested target vocabularies, how many hops away, and with what scope.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use log::debug;

use crate::constants::MAX_MAPPING_DISTANCE;
use crate::db_operations::DbOperations;
use crate::error::TermFoldResult;
use crate::mapping::types::{curie_prefix, MappingRecord, Scope};

pub struct MappingResolver {
    db_ops: Arc<DbOperations>,
}

impl MappingResolver {
    pub fn new(db_ops: Arc<DbOperations>) -> Self {
        Self { db_ops }
    }

    /// Resolve each input curie into the target vocabularies.
    ///
    /// `target_prefixes` empty means report reachable terms in every
    /// vocabulary. `max_distance` is clamped to [`MAX_MAPPING_DISTANCE`].
    /// Inputs that are not in the graph contribute nothing; a target
    /// reached from several inputs yields a single record holding the
    /// minimum distance and the distinct input prefixes in input order.
    pub fn resolve(
        &self,
        input_ids: &[String],
        target_prefixes: &[String],
        max_distance: u32,
    ) -> TermFoldResult<Vec<MappingRecord>> {
        let max_distance = max_distance.min(MAX_MAPPING_DISTANCE);
        let mut merged: HashMap<String, MappingRecord> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for input in input_ids {
            let input_prefix = curie_prefix(input)?.to_string();
            let hits = self.search_from(input, target_prefixes, max_distance)?;
            debug!("{} reached {} targets", input, hits.len());

            for (curie, distance, scope) in hits {
                match merged.get_mut(&curie) {
                    Some(record) => {
                        if distance < record.distance {
                            record.distance = distance;
                            record.scope = Some(scope);
                        }
                        if !record.source_prefixes.contains(&input_prefix) {
                            record.source_prefixes.push(input_prefix.clone());
                        }
                    }
                    None => {
                        let label = self
                            .db_ops
                            .get_term(&curie)?
                            .and_then(|term| term.label);
                        let target_prefix = curie_prefix(&curie)?.to_string();
                        let record = MappingRecord::new(
                            curie.clone(),
                            label,
                            vec![input_prefix.clone()],
                            target_prefix,
                            distance,
                            scope,
                        );
                        merged.insert(curie.clone(), record);
                        order.push(curie);
                    }
                }
            }
        }

        Ok(order
            .into_iter()
            .filter_map(|curie| merged.remove(&curie))
            .collect())
    }

    /// Breadth-first walk from one curie. Returns `(curie, distance, scope)`
    /// for every reachable term whose prefix is wanted, excluding the
    /// starting point itself.
    fn search_from(
        &self,
        start: &str,
        target_prefixes: &[String],
        max_distance: u32,
    ) -> TermFoldResult<Vec<(String, u32, Scope)>> {
        let mut hits = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<(String, u32, Scope)> = VecDeque::new();

        visited.insert(start.to_string());
        frontier.push_back((start.to_string(), 0, Scope::Exact));

        while let Some((curie, distance, scope)) = frontier.pop_front() {
            if distance == max_distance {
                continue;
            }
            for edge in self.db_ops.neighbors(&curie)? {
                let next = edge.other_endpoint(&curie);
                if !visited.insert(next.to_string()) {
                    continue;
                }
                let next_scope = scope.combine(Scope::from_predicate(&edge.predicate));
                let next_distance = distance + 1;

                let prefix = curie_prefix(next)?;
                if target_prefixes.is_empty()
                    || target_prefixes.iter().any(|t| t == prefix)
                {
                    hits.push((next.to_string(), next_distance, next_scope));
                }
                frontier.push_back((next.to_string(), next_distance, next_scope));
            }
        }

        Ok(hits)
    }
}
