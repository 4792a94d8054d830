//! TSV ingestion for the three file kinds the mapping graph is built from:
//! datasources, terms, and mappings. Files follow the exchange format of
//! the upstream pipeline: tab-separated with a header row, blank cells for
//! absent values.

mod tsv;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db_operations::DbOperations;
use crate::error::{TermFoldError, TermFoldResult};
use crate::mapping::types::{Datasource, MappingEdge, Term};
use tsv::TsvFile;

const DATASOURCE_COLUMNS: &[&str] = &["subject_source", "object_source"];
const TERM_COLUMNS: &[&str] = &[
    "subject_id",
    "subject_label",
    "subject_category",
    "subject_source",
    "object_id",
    "object_label",
    "object_category",
    "object_source",
];
const MAPPING_COLUMNS: &[&str] = &[
    "subject_id",
    "object_id",
    "predicate_id",
    "match_type",
    "mapping_tool",
    "confidence",
    "match_category",
    "match_string",
];

/// Record of one completed load, kept in the metadata tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReceipt {
    pub batch_id: Uuid,
    pub kind: String,
    pub file: String,
    pub rows: u64,
    pub loaded_at: DateTime<Utc>,
}

/// Loads TSV files into the mapping graph.
pub struct Loader {
    db_ops: Arc<DbOperations>,
}

impl Loader {
    pub fn new(db_ops: Arc<DbOperations>) -> Self {
        Self { db_ops }
    }

    /// Loads a datasource file: every distinct prefix in the
    /// `subject_source` and `object_source` columns becomes a datasource.
    pub fn load_datasources<P: AsRef<Path>>(&self, path: P) -> TermFoldResult<LoadReceipt> {
        let path = path.as_ref();
        info!("Loading datasources from {}", path.display());

        let contents = fs::read_to_string(path)?;
        let file = TsvFile::parse(&contents, DATASOURCE_COLUMNS)?;

        for row in file.rows() {
            for column in DATASOURCE_COLUMNS {
                let prefix = row.required(column)?;
                self.db_ops
                    .merge_datasource(&Datasource::new(prefix.to_string()))?;
            }
        }

        self.finish("datasources", path, file.row_count())
    }

    /// Loads a term file. Each row carries a subject and an object term;
    /// both are upserted, and both source columns must name datasources
    /// that have already been loaded.
    pub fn load_terms<P: AsRef<Path>>(&self, path: P) -> TermFoldResult<LoadReceipt> {
        let path = path.as_ref();
        info!("Loading terms from {}", path.display());

        let contents = fs::read_to_string(path)?;
        let file = TsvFile::parse(&contents, TERM_COLUMNS)?;

        for row in file.rows() {
            for side in ["subject", "object"] {
                let curie = row.required(&format!("{side}_id"))?;
                let source = row.required(&format!("{side}_source"))?;

                if !self.db_ops.datasource_exists(source)? {
                    return Err(TermFoldError::DatasourceNotFound(format!(
                        "'{}' referenced at line {}",
                        source,
                        row.line()
                    )));
                }

                let term = Term {
                    curie: curie.to_string(),
                    label: row.optional(&format!("{side}_label"))?,
                    category: row.optional(&format!("{side}_category"))?,
                    prefix: source.to_string(),
                };
                self.db_ops.upsert_term(&term)?;
            }
        }

        self.finish("terms", path, file.row_count())
    }

    /// Loads a mapping file. Both endpoints of every edge must already be
    /// loaded as terms.
    pub fn load_mappings<P: AsRef<Path>>(&self, path: P) -> TermFoldResult<LoadReceipt> {
        let path = path.as_ref();
        info!("Loading mappings from {}", path.display());

        let contents = fs::read_to_string(path)?;
        let file = TsvFile::parse(&contents, MAPPING_COLUMNS)?;

        for row in file.rows() {
            let subject_id = row.required("subject_id")?;
            let object_id = row.required("object_id")?;

            for curie in [subject_id, object_id] {
                if !self.db_ops.term_exists(curie)? {
                    return Err(TermFoldError::TermNotFound(format!(
                        "'{}' referenced at line {}",
                        curie,
                        row.line()
                    )));
                }
            }

            let edge = MappingEdge {
                subject_id: subject_id.to_string(),
                object_id: object_id.to_string(),
                predicate: row.required("predicate_id")?.to_string(),
                match_type: row.optional("match_type")?,
                mapping_tool: row.optional("mapping_tool")?,
                confidence: row.optional("confidence")?,
                match_category: row.optional("match_category")?,
                match_string: row.optional("match_string")?,
            };
            self.db_ops.store_mapping(&edge)?;
        }

        self.finish("mappings", path, file.row_count())
    }

    /// All load receipts recorded so far, oldest first.
    pub fn load_receipts(&self) -> TermFoldResult<Vec<LoadReceipt>> {
        let mut receipts: Vec<LoadReceipt> = self
            .db_ops
            .list_items_in_tree(&self.db_ops.metadata_tree)?
            .into_iter()
            .filter(|(key, _)| key.starts_with("load:"))
            .map(|(_, receipt)| receipt)
            .collect();
        receipts.sort_by_key(|r| r.loaded_at);
        Ok(receipts)
    }

    fn finish(&self, kind: &str, path: &Path, rows: u64) -> TermFoldResult<LoadReceipt> {
        let receipt = LoadReceipt {
            batch_id: Uuid::new_v4(),
            kind: kind.to_string(),
            file: path.display().to_string(),
            rows,
            loaded_at: Utc::now(),
        };
        self.db_ops.store_in_tree(
            &self.db_ops.metadata_tree,
            &format!("load:{}", receipt.batch_id),
            &receipt,
        )?;
        info!("Loaded {} {} rows from {}", rows, kind, path.display());
        Ok(receipt)
    }
}
