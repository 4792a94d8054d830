mod datasource;
mod mapping_edge;
mod record;
mod scope;
mod term;

pub use datasource::Datasource;
pub use mapping_edge::MappingEdge;
pub use record::MappingRecord;
pub use scope::Scope;
pub use term::{curie_prefix, Term};
