//! Schema module for table_alter
//!
//! This module handles table extraction, comparison, and statement generation.

pub mod diff;
pub mod extractor;
pub mod generator;
pub mod types;

// Re-export key types
pub use diff::SchemaDiff;
pub use extractor::extract;
pub use generator::MigrationGenerator;
pub use types::{Column, TableSchema};
