//! Naming utilities for table_alter
//!
//! This module validates identifiers supplied from outside the DDL text, such
//! as a table name override, before they are spliced into statements.

use once_cell::sync::Lazy;
use regex::Regex;

/// One identifier part: a bare name or a double-quoted / backtick-quoted name
/// with doubled-quote escapes
const IDENTIFIER_PART: &str = r#"(?:[A-Za-z_][A-Za-z0-9_$]*|"(?:[^"]|"")+"|`(?:[^`]|``)+`)"#;

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{part}(?:\.{part})*$", part = IDENTIFIER_PART))
        .expect("table name pattern is valid")
});

/// Check that `name` is a table name usable in an `ALTER TABLE` statement:
/// one or more identifiers joined by dots (`users`, `public.users`,
/// `"My Schema"."Users"`)
pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME.is_match(name)
}

/// Strip one level of identifier quoting, undoing doubled-quote escapes
pub fn unquote_identifier(name: &str) -> String {
    for quote in ['"', '`'] {
        if name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote) {
            let inner = &name[1..name.len() - 1];
            return inner.replace(&format!("{quote}{quote}"), &quote.to_string());
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(is_valid_table_name("users"));
        assert!(is_valid_table_name("_tmp$1"));
        assert!(is_valid_table_name("\"first name\""));
        assert!(is_valid_table_name("`order`"));
    }

    #[test]
    fn test_invalid_table_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("1users"));
        assert!(!is_valid_table_name("users; DROP TABLE x"));
        assert!(!is_valid_table_name("\"unterminated"));
    }

    #[test]
    fn test_qualified_table_names() {
        assert!(is_valid_table_name("public.users"));
        assert!(is_valid_table_name("\"My Schema\".\"Users\""));
        assert!(!is_valid_table_name("public."));
        assert!(!is_valid_table_name("users example"));
    }

    #[test]
    fn test_unquote_identifier() {
        assert_eq!(unquote_identifier("\"say \"\"hi\"\"\""), "say \"hi\"");
        assert_eq!(unquote_identifier("`order`"), "order");
        assert_eq!(unquote_identifier("plain"), "plain");
    }
}
