//! Migration generator
//!
//! This module renders `ALTER TABLE` statements from a schema diff

use crate::schema::diff::SchemaDiff;
use crate::schema::types::{Column, TableSchema};

/// ALTER statement generator for one table
pub struct MigrationGenerator<'a> {
    table_name: &'a str,
}

impl<'a> MigrationGenerator<'a> {
    /// Create a new migration generator
    pub fn new(table_name: &'a str) -> Self {
        Self { table_name }
    }

    /// Generate statements that move the table from the old shape to the new
    /// one: every ADD, then every DROP, then every type change.
    pub fn generate_forward(&self, diff: &SchemaDiff) -> Vec<String> {
        let mut statements =
            Vec::with_capacity(diff.added.len() + diff.removed.len() + diff.modified.len());

        for column in diff.added.values() {
            statements.push(self.add_column_sql(column));
        }

        for column_name in diff.removed.keys() {
            statements.push(self.drop_column_sql(column_name));
        }

        for column in diff.modified.values() {
            statements.push(self.alter_column_type_sql(column));
        }

        statements
    }

    /// Generate statements that move the table from the new shape back to
    /// the old one: drop what was added, then re-add what was removed.
    ///
    /// Modified columns get no reverse statement.
    pub fn generate_reverse(&self, diff: &SchemaDiff, old_schema: &TableSchema) -> Vec<String> {
        let mut statements = Vec::with_capacity(diff.added.len() + diff.removed.len());

        for column_name in diff.added.keys() {
            statements.push(self.drop_column_sql(column_name));
        }

        for (column_name, removed) in &diff.removed {
            let column = old_schema.column(column_name).unwrap_or(removed);
            statements.push(self.add_column_sql(column));
        }

        for column_name in diff.modified.keys() {
            if let Some(old) = old_schema.column(column_name) {
                tracing::warn!(
                    table = self.table_name,
                    column = %column_name,
                    old_definition = %old.raw_definition,
                    "modified column has no reverse statement"
                );
            }
        }

        statements
    }

    fn add_column_sql(&self, column: &Column) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {};",
            self.table_name, column.raw_definition
        )
    }

    fn drop_column_sql(&self, column_name: &str) -> String {
        format!("ALTER TABLE {} DROP COLUMN {};", self.table_name, column_name)
    }

    /// Inline constraints ride along after the type, exactly as written.
    fn alter_column_type_sql(&self, column: &Column) -> String {
        format!(
            "ALTER TABLE {} ALTER COLUMN {} TYPE {};",
            self.table_name,
            column.name,
            column.type_and_constraints()
        )
    }
}
