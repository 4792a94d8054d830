use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use crate::config::NodeConfig;
use crate::db_operations::DbOperations;
use crate::error::TermFoldResult;
use crate::loader::Loader;
use crate::resolver::MappingResolver;

/// Composition root: owns the sled database and hands out the loader and
/// resolver that operate on it.
pub struct TermFoldNode {
    config: NodeConfig,
    db_ops: Arc<DbOperations>,
}

impl TermFoldNode {
    /// Opens the database at the configured storage path.
    pub fn new(config: NodeConfig) -> TermFoldResult<Self> {
        info!("Opening mapping store at {}", config.storage_path.display());
        let db = sled::open(&config.storage_path)?;
        let db_ops = Arc::new(DbOperations::new(db)?);
        Ok(Self { config, db_ops })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn db_ops(&self) -> Arc<DbOperations> {
        Arc::clone(&self.db_ops)
    }

    pub fn loader(&self) -> Loader {
        Loader::new(Arc::clone(&self.db_ops))
    }

    pub fn resolver(&self) -> MappingResolver {
        MappingResolver::new(Arc::clone(&self.db_ops))
    }

    pub fn stats(&self) -> TermFoldResult<HashMap<String, u64>> {
        self.db_ops.get_stats()
    }

    pub fn wipe(&self) -> TermFoldResult<HashMap<String, u64>> {
        self.db_ops.wipe()
    }
}
