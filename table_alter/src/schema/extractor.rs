//! Schema extractor
//!
//! This module reads a `CREATE TABLE` statement into a [`TableSchema`].

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schema::types::{Column, TableSchema};
use crate::tokenizer::{self, Parenthesis, Statement, StatementType, TokenTree};

/// Extract the table name and columns from the first `CREATE TABLE`
/// statement in `ddl`.
///
/// Fails when there is no such statement, when no table name precedes the
/// column list, or when the column list is missing. Column clauses that
/// cannot be read are logged and skipped.
pub fn extract(ddl: &str) -> Result<TableSchema> {
    let statements = tokenizer::tokenize(ddl);
    let statement = statements
        .iter()
        .find(|stmt| stmt.statement_type() == StatementType::CreateTable)
        .ok_or_else(|| Error::ParseError("no CREATE TABLE statement found".to_string()))?;

    let table_name = table_name(statement)
        .ok_or_else(|| Error::ParseError("table name not found".to_string()))?;

    let column_list = column_list(statement).ok_or_else(|| {
        Error::ParseError(format!("no column list found for table {}", table_name))
    })?;
    if column_list.close.is_none() {
        warn!(table = %table_name, "column list is not closed, reading to end of input");
    }

    let mut schema = TableSchema::new(&table_name);
    for (position, clause) in column_list.items().into_iter().enumerate() {
        match column_from_clause(statement, position + 1, clause) {
            Ok(Some(column)) => {
                if let Some(previous) = schema.add_column(column) {
                    warn!(
                        table = %table_name,
                        column = %previous.name,
                        "duplicate column, keeping the last definition"
                    );
                }
            }
            Ok(None) => debug!(
                table = %table_name,
                clause = %statement.normalized_text(clause),
                "skipping table-level constraint"
            ),
            Err(e) => warn!(table = %table_name, error = %e, "skipping column clause"),
        }
    }

    debug!(table = %table_name, columns = schema.len(), "extracted table schema");
    Ok(schema)
}

/// The first name at the top level of the statement, before the column list
fn table_name(statement: &Statement<'_>) -> Option<String> {
    for node in &statement.tokens {
        match node {
            TokenTree::Identifier(ident) => return Some(ident.text(statement.source())),
            TokenTree::IdentifierList(list) => {
                return list
                    .identifiers
                    .first()
                    .map(|ident| ident.text(statement.source()));
            }
            TokenTree::Parenthesis(_) => return None,
            TokenTree::Keyword(..) | TokenTree::Punctuation(..) | TokenTree::Other(_) => {}
        }
    }
    None
}

/// The first top-level parenthesized group; later groups are table options
fn column_list<'s>(statement: &'s Statement<'_>) -> Option<&'s Parenthesis> {
    statement.tokens.iter().find_map(|node| match node {
        TokenTree::Parenthesis(paren) => Some(paren),
        _ => None,
    })
}

/// Read one comma-separated clause of the column list.
///
/// Returns `Ok(None)` for table-level constraints such as
/// `PRIMARY KEY (id)`, which are not columns.
fn column_from_clause(
    statement: &Statement<'_>,
    position: usize,
    clause: &[TokenTree],
) -> Result<Option<Column>> {
    let malformed = |reason: &str| Error::MalformedColumnClause {
        position,
        reason: reason.to_string(),
    };

    let (first, rest) = clause
        .split_first()
        .ok_or_else(|| malformed("empty clause"))?;

    let name = match first {
        TokenTree::Identifier(ident) => ident.text(statement.source()),
        TokenTree::Keyword(keyword, _) if keyword.starts_table_constraint() => return Ok(None),
        TokenTree::Keyword(_, span) => span.slice(statement.source()).to_string(),
        TokenTree::IdentifierList(_)
        | TokenTree::Parenthesis(_)
        | TokenTree::Punctuation(..)
        | TokenTree::Other(_) => {
            return Err(malformed(&format!(
                "expected a column name, found `{}`",
                statement.normalized_text(std::slice::from_ref(first))
            )));
        }
    };

    let tail = statement.normalized_text(rest);
    let raw_definition = if tail.is_empty() {
        name.clone()
    } else {
        format!("{} {}", name, tail)
    };

    // First word after the name, so `NUMERIC(10, 2)` gives `NUMERIC(10,`
    let data_type = tail.split_whitespace().next().unwrap_or_default();

    Ok(Some(Column::new(&name, &raw_definition, data_type)))
}
