pub mod types;

pub use types::{curie_prefix, Datasource, MappingEdge, MappingRecord, Scope, Term};
