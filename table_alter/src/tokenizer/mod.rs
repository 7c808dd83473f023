//! SQL tokenizer
//!
//! Turns raw SQL text into statements whose tokens are grouped into a shallow
//! tree: names, keywords, punctuation and nested parenthesized groups. This is
//! just enough structure to read a `CREATE TABLE` column list; it is not a SQL
//! grammar. Every call is independent and keeps no state.

mod lexer;
mod tree;

pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use tree::{Identifier, IdentifierList, Parenthesis, Statement, StatementType, TokenTree};

/// Split `sql` into statements and build each statement's token tree.
pub fn tokenize(sql: &str) -> Vec<Statement<'_>> {
    tree::build(sql)
}
