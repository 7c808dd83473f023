//! Flat SQL lexer.

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the source text covered by this span.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Keywords the extractor cares about. Every other bare word is an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Create,
    Table,
    Temporary,
    Temp,
    Unlogged,
    Global,
    Local,
    Or,
    Replace,
    If,
    Not,
    Exists,
    Alter,
    Drop,
    Insert,
    Select,
    Update,
    Delete,
    With,
    Primary,
    Foreign,
    Key,
    Unique,
    Check,
    Constraint,
    Exclude,
    References,
    Default,
    Null,
}

impl Keyword {
    /// Looks up a keyword, ignoring case.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_uppercase().as_str() {
            "CREATE" => Self::Create,
            "TABLE" => Self::Table,
            "TEMPORARY" => Self::Temporary,
            "TEMP" => Self::Temp,
            "UNLOGGED" => Self::Unlogged,
            "GLOBAL" => Self::Global,
            "LOCAL" => Self::Local,
            "OR" => Self::Or,
            "REPLACE" => Self::Replace,
            "IF" => Self::If,
            "NOT" => Self::Not,
            "EXISTS" => Self::Exists,
            "ALTER" => Self::Alter,
            "DROP" => Self::Drop,
            "INSERT" => Self::Insert,
            "SELECT" => Self::Select,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "WITH" => Self::With,
            "PRIMARY" => Self::Primary,
            "FOREIGN" => Self::Foreign,
            "KEY" => Self::Key,
            "UNIQUE" => Self::Unique,
            "CHECK" => Self::Check,
            "CONSTRAINT" => Self::Constraint,
            "EXCLUDE" => Self::Exclude,
            "REFERENCES" => Self::References,
            "DEFAULT" => Self::Default,
            "NULL" => Self::Null,
            _ => return None,
        };
        Some(keyword)
    }

    /// Keywords allowed between `CREATE` and `TABLE`.
    #[must_use]
    pub const fn modifies_create(self) -> bool {
        matches!(
            self,
            Self::Or
                | Self::Replace
                | Self::Global
                | Self::Local
                | Self::Temporary
                | Self::Temp
                | Self::Unlogged
        )
    }

    /// Keywords that open a table-level constraint inside a column list.
    #[must_use]
    pub const fn starts_table_constraint(self) -> bool {
        matches!(
            self,
            Self::Primary
                | Self::Foreign
                | Self::Unique
                | Self::Check
                | Self::Constraint
                | Self::Exclude
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier(String),
    /// `"name"` or `` `name` ``, holding the unescaped name.
    QuotedIdentifier(String),
    String(String),
    Number,
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    Dot,
    /// Operators and anything else the extractor never branches on.
    Symbol(char),
    /// Unterminated literal or quoted identifier.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace, `--` comments and `/* */` comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn scan_word(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_word(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(text.to_string())),
        }
    }

    /// Scans a quoted run starting at the opening quote. A doubled quote is
    /// an escaped quote character.
    fn scan_quoted(&mut self, quote: char) -> Result<String, String> {
        self.advance();
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        return Ok(value);
                    }
                }
                Some(c) => value.push(c),
                None => return Err(value),
            }
        }
    }

    fn scan_number(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number)
    }

    /// Scans the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let c = self.peek()?;
        let token = match c {
            '(' | ')' | ',' | ';' | '.' => {
                self.advance();
                let kind = match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Dot,
                };
                self.make_token(kind)
            }
            '\'' => match self.scan_quoted('\'') {
                Ok(value) => self.make_token(TokenKind::String(value)),
                Err(_) => self.make_token(TokenKind::Error(
                    "Unterminated string literal".to_string(),
                )),
            },
            '"' | '`' => match self.scan_quoted(c) {
                Ok(name) => self.make_token(TokenKind::QuotedIdentifier(name)),
                Err(_) => self.make_token(TokenKind::Error(
                    "Unterminated quoted identifier".to_string(),
                )),
            },
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            c => {
                self.advance();
                self.make_token(TokenKind::Symbol(c))
            }
        };
        Some(token)
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("create Table"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
            ]
        );
    }

    #[test]
    fn test_type_names_are_identifiers() {
        assert_eq!(
            kinds("age INT"),
            vec![
                TokenKind::Identifier("age".to_string()),
                TokenKind::Identifier("INT".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("a -- trailing\n/* block */ b"),
            vec![
                TokenKind::Identifier("a".to_string()),
                TokenKind::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_identifier_with_escape() {
        assert_eq!(
            kinds("\"say \"\"hi\"\"\""),
            vec![TokenKind::QuotedIdentifier("say \"hi\"".to_string())]
        );
    }

    #[test]
    fn test_string_literal_keeps_inner_text() {
        assert_eq!(
            kinds("'it''s  here'"),
            vec![TokenKind::String("it's  here".to_string())]
        );
    }

    #[test]
    fn test_unterminated_string_is_an_error_token() {
        assert!(matches!(kinds("'oops")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_punctuation_and_numbers() {
        assert_eq!(
            kinds("(10,2);"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("CREATE  foo").tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 11));
        assert_eq!(tokens[1].span.slice("CREATE  foo"), "foo");
    }
}
