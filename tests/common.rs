//! Common test utilities and fixtures for termfold integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use termfold::{NodeConfig, TermFoldNode};

/// Common test fixture: a node backed by a throwaway sled database plus a
/// scratch directory for TSV files.
pub struct CommonTestFixture {
    pub node: TermFoldNode,
    pub _temp_dir: TempDir,
}

impl CommonTestFixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp directory");
        let config = NodeConfig::new(temp_dir.path().join("store"));
        let node = TermFoldNode::new(config).expect("failed to open node");
        Self {
            node,
            _temp_dir: temp_dir,
        }
    }

    /// Write `lines` tab-joined into a file under the scratch directory.
    pub fn write_tsv(&self, name: &str, lines: &[&[&str]]) -> PathBuf {
        let contents: String = lines
            .iter()
            .map(|cells| cells.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
        let path = self._temp_dir.path().join(name);
        fs::write(&path, contents).expect("failed to write TSV file");
        path
    }

    /// Datasource file declaring the MESH/ICD10/DOID vocabularies.
    pub fn sample_datasources(&self) -> PathBuf {
        self.write_tsv(
            "datasources.tsv",
            &[
                &["subject_source", "object_source"],
                &["MESH", "DOID"],
                &["ICD10", "DOID"],
            ],
        )
    }

    /// Term file for the multiple sclerosis fixture graph.
    pub fn sample_terms(&self) -> PathBuf {
        self.write_tsv(
            "terms.tsv",
            &[
                &[
                    "subject_id",
                    "subject_label",
                    "subject_category",
                    "subject_source",
                    "object_id",
                    "object_label",
                    "object_category",
                    "object_source",
                ],
                &[
                    "MESH:D009103",
                    "Multiple Sclerosis",
                    "",
                    "MESH",
                    "DOID:2377",
                    "multiple sclerosis",
                    "disease",
                    "DOID",
                ],
                &[
                    "ICD10:G35",
                    "Multiple sclerosis",
                    "",
                    "ICD10",
                    "DOID:2377",
                    "multiple sclerosis",
                    "disease",
                    "DOID",
                ],
            ],
        )
    }

    /// Mapping file: ICD10:G35 -> MESH:D009103 -> DOID:2377.
    pub fn sample_mappings(&self) -> PathBuf {
        self.write_tsv(
            "mappings.tsv",
            &[
                &[
                    "subject_id",
                    "object_id",
                    "predicate_id",
                    "match_type",
                    "mapping_tool",
                    "confidence",
                    "match_category",
                    "match_string",
                ],
                &[
                    "MESH:D009103",
                    "DOID:2377",
                    "skos:exactMatch",
                    "LABEL",
                    "loader",
                    "0.95",
                    "",
                    "multiple sclerosis",
                ],
                &[
                    "ICD10:G35",
                    "MESH:D009103",
                    "skos:exactMatch",
                    "XREF",
                    "loader",
                    "1.0",
                    "",
                    "",
                ],
            ],
        )
    }

    /// Load all three sample files in order.
    pub fn load_sample_graph(&self) {
        let loader = self.node.loader();
        loader
            .load_datasources(self.sample_datasources())
            .expect("datasource load failed");
        loader
            .load_terms(self.sample_terms())
            .expect("term load failed");
        loader
            .load_mappings(self.sample_mappings())
            .expect("mapping load failed");
    }
}
