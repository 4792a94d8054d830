// Core database operations
pub mod core;
mod datasource_operations;
mod mapping_operations;
mod term_operations;

// Re-export the main DbOperations struct
pub use core::DbOperations;
