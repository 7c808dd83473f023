//! Schema difference calculator
//!
//! This module compares two versions of a table and classifies every column

use indexmap::IndexMap;
use serde::Serialize;

use crate::schema::types::{Column, TableSchema};

/// Represents the column changes between two versions of a table.
///
/// A column name appears in at most one of the three maps. Unchanged columns
/// appear in none. Map order follows the classification pass: new-schema
/// order for `added` and `modified`, old-schema order for `removed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDiff {
    /// Columns only in the new schema
    pub added: IndexMap<String, Column>,
    /// Columns only in the old schema, with their old definition
    pub removed: IndexMap<String, Column>,
    /// Columns whose definition changed, with their new definition
    pub modified: IndexMap<String, Column>,
}

impl SchemaDiff {
    /// Generate a schema diff between two versions of a table
    pub fn generate(old_schema: &TableSchema, new_schema: &TableSchema) -> Self {
        let mut diff = Self::default();

        for new_col in new_schema.columns() {
            match old_schema.column(&new_col.name) {
                None => {
                    diff.added.insert(new_col.name.clone(), new_col.clone());
                }
                // Any change to the definition string counts, not just the type
                Some(old_col) if old_col.raw_definition != new_col.raw_definition => {
                    diff.modified.insert(new_col.name.clone(), new_col.clone());
                }
                Some(_) => {}
            }
        }

        for old_col in old_schema.columns() {
            if !new_schema.contains(&old_col.name) {
                diff.removed.insert(old_col.name.clone(), old_col.clone());
            }
        }

        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            modified = diff.modified.len(),
            "computed column diff"
        );

        diff
    }

    /// Check if the diff is empty (no changes needed)
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}
