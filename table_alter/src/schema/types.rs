//! Type definitions for the table column model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a single column clause of a `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// The whole clause (name, type, inline constraints) on one line with
    /// single spaces between tokens. Always starts with `name`.
    /// SQL comments inside the clause are not kept.
    pub raw_definition: String,
    /// The first whitespace-delimited word after the name, empty when the
    /// clause has none
    pub data_type: String,
}

impl Column {
    /// Create a new column
    pub fn new(name: &str, raw_definition: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            raw_definition: raw_definition.to_string(),
            data_type: data_type.to_string(),
        }
    }

    /// Everything in the definition after the column name: the type plus any
    /// inline constraints
    pub fn type_and_constraints(&self) -> &str {
        self.raw_definition
            .strip_prefix(self.name.as_str())
            .unwrap_or(&self.raw_definition)
            .trim_start()
    }
}

/// Represents one table's columns, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    column_order: Vec<String>,
    columns: HashMap<String, Column>,
}

impl TableSchema {
    /// Create a new table schema with no columns
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            column_order: Vec::new(),
            columns: HashMap::new(),
        }
    }

    /// Add a column to the table.
    ///
    /// A column whose name is already present replaces the earlier one and
    /// moves to the end of the column order. Returns the replaced column.
    pub fn add_column(&mut self, column: Column) -> Option<Column> {
        let replaced = self.columns.insert(column.name.clone(), column.clone());
        if replaced.is_some() {
            self.column_order.retain(|name| name != &column.name);
        }
        self.column_order.push(column.name);
        replaced
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in source order
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// Columns in source order
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.column_order
            .iter()
            .filter_map(|name| self.columns.get(name))
    }

    pub fn len(&self) -> usize {
        self.column_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_order.is_empty()
    }
}
