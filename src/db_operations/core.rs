use crate::error::{TermFoldError, TermFoldResult};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// Separator between key components in the mapping trees. Curies contain
/// `:`, so a non-printing byte keeps prefix scans unambiguous.
pub(crate) const KEY_SEP: char = '\x1f';

/// Unified access to the sled-backed mapping graph.
#[derive(Clone)]
pub struct DbOperations {
    /// The underlying sled database instance
    db: sled::Db,
    /// Cached trees for performance
    pub(crate) datasources_tree: sled::Tree,
    pub(crate) terms_tree: sled::Tree,
    pub(crate) mappings_tree: sled::Tree,
    pub(crate) mappings_rev_tree: sled::Tree,
    pub(crate) metadata_tree: sled::Tree,
}

impl DbOperations {
    /// Creates a new DbOperations instance with all required trees
    pub fn new(db: sled::Db) -> Result<Self, sled::Error> {
        let datasources_tree = db.open_tree("datasources")?;
        let terms_tree = db.open_tree("terms")?;
        let mappings_tree = db.open_tree("mappings")?;
        let mappings_rev_tree = db.open_tree("mappings_rev")?;
        let metadata_tree = db.open_tree("metadata")?;

        Ok(Self {
            db,
            datasources_tree,
            terms_tree,
            mappings_tree,
            mappings_rev_tree,
            metadata_tree,
        })
    }

    /// Gets a reference to the underlying database
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    // ========== GENERIC TREE OPERATIONS ==========

    /// Generic function to store any serializable item in a specific tree
    pub fn store_in_tree<T: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &str,
        item: &T,
    ) -> TermFoldResult<()> {
        let bytes = serde_json::to_vec(item)?;

        tree.insert(key.as_bytes(), bytes)?;
        tree.flush()?;

        Ok(())
    }

    /// Generic function to retrieve any deserializable item from a specific tree
    pub fn get_from_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
        key: &str,
    ) -> TermFoldResult<Option<T>> {
        match tree.get(key.as_bytes())? {
            Some(bytes) => {
                let item = serde_json::from_slice(&bytes)?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    /// List all keys in a tree
    pub fn list_keys_in_tree(&self, tree: &sled::Tree) -> TermFoldResult<Vec<String>> {
        let mut keys = Vec::new();
        for result in tree.iter() {
            let (key, _) = result?;
            keys.push(String::from_utf8_lossy(&key).to_string());
        }
        Ok(keys)
    }

    /// List all key-value pairs in a tree
    pub fn list_items_in_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
    ) -> TermFoldResult<Vec<(String, T)>> {
        let mut items = Vec::new();
        for result in tree.iter() {
            let (key, value) = result?;
            let key_str = String::from_utf8_lossy(&key).to_string();
            let item = serde_json::from_slice(&value).map_err(|e| {
                TermFoldError::InvalidData(format!(
                    "Deserialization failed for key '{}': {}",
                    key_str, e
                ))
            })?;
            items.push((key_str, item));
        }
        Ok(items)
    }

    /// Delete an item from a specific tree
    pub fn delete_from_tree(&self, tree: &sled::Tree, key: &str) -> TermFoldResult<bool> {
        let existed = tree.remove(key.as_bytes())?.is_some();
        tree.flush()?;
        Ok(existed)
    }

    /// Check if a key exists in a specific tree
    pub fn exists_in_tree(&self, tree: &sled::Tree, key: &str) -> TermFoldResult<bool> {
        Ok(tree.contains_key(key.as_bytes())?)
    }

    /// Gets database statistics: item counts per logical tree. The reverse
    /// mapping mirror is excluded since it always matches `mappings`.
    pub fn get_stats(&self) -> TermFoldResult<HashMap<String, u64>> {
        let mut stats = HashMap::new();
        stats.insert(
            "datasources".to_string(),
            self.datasources_tree.len() as u64,
        );
        stats.insert("terms".to_string(), self.terms_tree.len() as u64);
        stats.insert("mappings".to_string(), self.mappings_tree.len() as u64);
        stats.insert("metadata".to_string(), self.metadata_tree.len() as u64);
        Ok(stats)
    }

    /// Clears everything, mappings first so terms are never left pointing at
    /// edges that still exist. Returns the number of items removed per tree.
    pub fn wipe(&self) -> TermFoldResult<HashMap<String, u64>> {
        let mut removed = HashMap::new();

        for (name, tree) in [
            ("mappings", &self.mappings_tree),
            ("mappings_rev", &self.mappings_rev_tree),
            ("terms", &self.terms_tree),
            ("datasources", &self.datasources_tree),
            ("metadata", &self.metadata_tree),
        ] {
            let count = tree.len() as u64;
            tree.clear()?;
            tree.flush()?;
            log::info!("Wiped {} items from '{}'", count, name);
            removed.insert(name.to_string(), count);
        }

        Ok(removed)
    }
}
