pub mod config;
pub mod constants;
pub mod db_operations;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod node;
pub mod resolver;

pub use config::{load_node_config, NodeConfig};
pub use db_operations::DbOperations;
pub use error::{TermFoldError, TermFoldResult};
pub use loader::{LoadReceipt, Loader};
pub use mapping::types::{curie_prefix, Datasource, MappingEdge, MappingRecord, Scope, Term};
pub use node::TermFoldNode;
pub use resolver::MappingResolver;
