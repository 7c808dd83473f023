//! table_alter: generate ALTER TABLE migrations from two versions of a table
//!
//! Given the old and new `CREATE TABLE` statement for one table, table_alter
//! works out which columns were added, removed or changed and writes the
//! `ALTER TABLE` statements that apply the change, plus the statements that
//! roll the added and removed columns back. Nothing is executed.

pub mod config;
pub mod error;
pub mod output;
pub mod schema;
pub mod tokenizer;
pub mod utils;


use serde::Serialize;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use schema::diff::SchemaDiff;
pub use schema::generator::MigrationGenerator;
pub use schema::types::{Column, TableSchema};

/// Initialize table_alter with the specified configuration file
pub fn init(config_path: &str) -> Result<TableAlterClient> {
    let config = config::load_from_file(config_path)?;
    Ok(TableAlterClient::new(config))
}

/// The statements produced for one pair of table definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub table_name: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
    pub forward: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Vec<String>>,
}

impl MigrationPlan {
    /// Check if the plan has no statements to run
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Reverse statements, empty when they were left out
    pub fn reverse_statements(&self) -> &[String] {
        self.reverse.as_deref().unwrap_or_default()
    }

    /// A copy of the plan with the reverse statements left out
    pub fn without_reverse(&self) -> Self {
        Self {
            reverse: None,
            ..self.clone()
        }
    }
}

/// The main client for interacting with table_alter
pub struct TableAlterClient {
    config: Config,
}

impl TableAlterClient {
    /// Create a new table_alter client from configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract both table definitions, diff them and generate the forward
    /// and reverse statements.
    ///
    /// The table name in the statements is `table_name` if given, else the
    /// configured `schema.table_name`, else the name in `old_ddl`.
    pub fn plan(
        &self,
        old_ddl: &str,
        new_ddl: &str,
        table_name: Option<&str>,
    ) -> Result<MigrationPlan> {
        let old_schema = schema::extract(old_ddl)?;
        let new_schema = schema::extract(new_ddl)?;

        let table_name = self.resolve_table_name(&old_schema, table_name)?;
        if utils::unquote_identifier(&old_schema.table_name)
            != utils::unquote_identifier(&new_schema.table_name)
        {
            tracing::warn!(
                old = %old_schema.table_name,
                new = %new_schema.table_name,
                "old and new DDL name different tables"
            );
        }

        let diff = SchemaDiff::generate(&old_schema, &new_schema);
        if diff.is_empty() {
            tracing::info!(table = %table_name, "table definitions match, nothing to migrate");
        }

        let generator = MigrationGenerator::new(&table_name);
        let forward = generator.generate_forward(&diff);
        let reverse = generator.generate_reverse(&diff, &old_schema);
        tracing::info!(
            table = %table_name,
            forward = forward.len(),
            reverse = reverse.len(),
            "generated ALTER statements"
        );

        Ok(MigrationPlan {
            added: diff.added.keys().cloned().collect(),
            removed: diff.removed.keys().cloned().collect(),
            modified: diff.modified.keys().cloned().collect(),
            table_name,
            forward,
            reverse: Some(reverse),
        })
    }

    /// Render a plan using the configured output settings
    pub fn render(&self, plan: &MigrationPlan) -> Result<String> {
        output::render_plan(plan, &self.config.output)
    }

    fn resolve_table_name(
        &self,
        old_schema: &TableSchema,
        explicit: Option<&str>,
    ) -> Result<String> {
        let Some(name) = explicit.or(self.config.schema.table_name.as_deref()) else {
            return Ok(old_schema.table_name.clone());
        };

        let name = name.trim();
        if !utils::is_valid_table_name(name) {
            return Err(Error::ConfigError(format!("invalid table name: {:?}", name)));
        }
        if utils::unquote_identifier(name) != utils::unquote_identifier(&old_schema.table_name) {
            tracing::info!(
                parsed = %old_schema.table_name,
                using = name,
                "overriding table name from DDL"
            );
        }
        Ok(name.to_string())
    }
}
