//! Statement splitting and token grouping.

use super::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Coarse classification of a statement by its leading keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementType {
    CreateTable,
    Create,
    Alter,
    Drop,
    Insert,
    Select,
    Update,
    Delete,
    Unknown,
}

/// A name, possibly dotted (`public.users`) or quoted.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Unquoted name parts, outermost qualifier first.
    pub parts: Vec<String>,
    /// Spans of the name parts and the dots between them.
    pub spans: Vec<Span>,
}

impl Identifier {
    /// The name as written, quotes kept, whitespace around dots dropped.
    #[must_use]
    pub fn text(&self, source: &str) -> String {
        self.spans.iter().map(|span| span.slice(source)).collect()
    }
}

/// Comma-separated names at statement top level, e.g. `DROP TABLE a, b`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierList {
    pub identifiers: Vec<Identifier>,
    pub commas: Vec<Span>,
}

/// A parenthesized group. `close` is `None` when the input ends first.
#[derive(Debug, Clone, PartialEq)]
pub struct Parenthesis {
    pub open: Span,
    pub children: Vec<TokenTree>,
    pub close: Option<Span>,
}

impl Parenthesis {
    /// Splits the interior at commas that sit directly inside this group.
    ///
    /// Commas inside nested groups belong to child `Parenthesis` nodes, so
    /// `a NUMERIC(10,2), b INT` yields two items. Empty items are kept.
    #[must_use]
    pub fn items(&self) -> Vec<&[TokenTree]> {
        self.children
            .split(|node| matches!(node, TokenTree::Punctuation(',', _)))
            .collect()
    }
}

/// One node of a statement's token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    Identifier(Identifier),
    IdentifierList(IdentifierList),
    Parenthesis(Parenthesis),
    Keyword(Keyword, Span),
    Punctuation(char, Span),
    Other(Span),
}

impl TokenTree {
    /// Pushes the span of every lexer token under this node, in source order.
    fn collect_leaves(&self, out: &mut Vec<Span>) {
        match self {
            Self::Identifier(ident) => out.extend(&ident.spans),
            Self::IdentifierList(list) => {
                for (i, ident) in list.identifiers.iter().enumerate() {
                    if let Some(comma) = i.checked_sub(1).and_then(|c| list.commas.get(c)) {
                        out.push(*comma);
                    }
                    out.extend(&ident.spans);
                }
            }
            Self::Parenthesis(paren) => {
                out.push(paren.open);
                for child in &paren.children {
                    child.collect_leaves(out);
                }
                if let Some(close) = paren.close {
                    out.push(close);
                }
            }
            Self::Keyword(_, span) | Self::Punctuation(_, span) | Self::Other(span) => {
                out.push(*span);
            }
        }
    }
}

/// One SQL statement, without its terminating semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'a> {
    source: &'a str,
    pub tokens: Vec<TokenTree>,
}

impl<'a> Statement<'a> {
    /// The full text the statement was tokenized from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub fn statement_type(&self) -> StatementType {
        let mut keywords = self.tokens.iter().map_while(|node| match node {
            TokenTree::Keyword(keyword, _) => Some(*keyword),
            _ => None,
        });

        match keywords.next() {
            Some(Keyword::Create) => {
                let is_table = keywords
                    .find(|k| !k.modifies_create())
                    .is_some_and(|k| k == Keyword::Table);
                if is_table {
                    StatementType::CreateTable
                } else {
                    StatementType::Create
                }
            }
            Some(Keyword::Alter) => StatementType::Alter,
            Some(Keyword::Drop) => StatementType::Drop,
            Some(Keyword::Insert) => StatementType::Insert,
            Some(Keyword::Select) => StatementType::Select,
            Some(Keyword::Update) => StatementType::Update,
            Some(Keyword::Delete) => StatementType::Delete,
            _ => StatementType::Unknown,
        }
    }

    /// Renders a run of nodes with every gap between tokens (whitespace,
    /// newlines, comments) collapsed to one space.
    #[must_use]
    pub fn normalized_text(&self, nodes: &[TokenTree]) -> String {
        let mut leaves = Vec::new();
        for node in nodes {
            node.collect_leaves(&mut leaves);
        }

        let mut text = String::new();
        let mut prev_end: Option<usize> = None;
        for leaf in leaves {
            if prev_end.is_some_and(|end| end < leaf.start) {
                text.push(' ');
            }
            text.push_str(leaf.slice(self.source));
            prev_end = Some(leaf.end);
        }
        text
    }
}

/// Splits `sql` into statements and groups each statement's tokens.
pub(super) fn build(sql: &str) -> Vec<Statement<'_>> {
    let tokens = Lexer::new(sql).tokenize();

    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth = depth.saturating_sub(1),
            TokenKind::Semicolon if depth == 0 => {
                push_statement(sql, &tokens[start..i], &mut statements);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_statement(sql, &tokens[start..], &mut statements);

    statements
}

fn push_statement<'a>(source: &'a str, tokens: &[Token], statements: &mut Vec<Statement<'a>>) {
    if tokens.is_empty() {
        return;
    }
    let mut builder = TreeBuilder { tokens, pos: 0 };
    let nodes = builder.parse_nodes(false);
    statements.push(Statement {
        source,
        tokens: group_identifier_lists(nodes),
    });
}

struct TreeBuilder<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TreeBuilder<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn parse_nodes(&mut self, nested: bool) -> Vec<TokenTree> {
        let mut nodes = Vec::new();

        while let Some(token) = self.peek() {
            let span = token.span;
            let node = match &token.kind {
                TokenKind::RightParen if nested => break,
                TokenKind::RightParen => {
                    self.pos += 1;
                    TokenTree::Punctuation(')', span)
                }
                TokenKind::LeftParen => {
                    self.pos += 1;
                    let children = self.parse_nodes(true);
                    let close = match self.peek() {
                        Some(Token {
                            kind: TokenKind::RightParen,
                            span,
                        }) => {
                            let close = *span;
                            self.pos += 1;
                            Some(close)
                        }
                        _ => None,
                    };
                    TokenTree::Parenthesis(Parenthesis {
                        open: span,
                        children,
                        close,
                    })
                }
                TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => {
                    TokenTree::Identifier(self.parse_identifier())
                }
                TokenKind::Keyword(keyword) => {
                    let keyword = *keyword;
                    self.pos += 1;
                    TokenTree::Keyword(keyword, span)
                }
                TokenKind::Comma => {
                    self.pos += 1;
                    TokenTree::Punctuation(',', span)
                }
                TokenKind::Semicolon => {
                    self.pos += 1;
                    TokenTree::Punctuation(';', span)
                }
                TokenKind::Dot => {
                    self.pos += 1;
                    TokenTree::Punctuation('.', span)
                }
                TokenKind::String(_)
                | TokenKind::Number
                | TokenKind::Symbol(_)
                | TokenKind::Error(_) => {
                    self.pos += 1;
                    TokenTree::Other(span)
                }
            };
            nodes.push(node);
        }

        nodes
    }

    /// Consumes `name ( . name )*`. The current token must be a name.
    fn parse_identifier(&mut self) -> Identifier {
        let mut parts = Vec::new();
        let mut spans = Vec::new();

        loop {
            let Some(token) = self.peek() else { break };
            match &token.kind {
                TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => {
                    parts.push(name.clone());
                    spans.push(token.span);
                    self.pos += 1;
                }
                _ => break,
            }

            let dot = match self.tokens.get(self.pos) {
                Some(Token {
                    kind: TokenKind::Dot,
                    span,
                }) => *span,
                _ => break,
            };
            let next_is_name = matches!(
                self.tokens.get(self.pos + 1).map(|t| &t.kind),
                Some(TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_))
            );
            if !next_is_name {
                break;
            }
            spans.push(dot);
            self.pos += 1;
        }

        Identifier { parts, spans }
    }
}

/// Folds top-level `ident , ident [, ident]*` runs into `IdentifierList`s.
fn group_identifier_lists(nodes: Vec<TokenTree>) -> Vec<TokenTree> {
    let mut grouped: Vec<TokenTree> = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();

    while let Some(node) = iter.next() {
        let TokenTree::Identifier(first) = node else {
            grouped.push(node);
            continue;
        };

        let mut identifiers = vec![first];
        let mut commas = Vec::new();
        let mut pending_comma = None;
        loop {
            match iter.peek() {
                Some(TokenTree::Punctuation(',', span)) if pending_comma.is_none() => {
                    pending_comma = Some(*span);
                    iter.next();
                }
                Some(TokenTree::Identifier(_)) if pending_comma.is_some() => {
                    if let Some(TokenTree::Identifier(ident)) = iter.next() {
                        identifiers.push(ident);
                    }
                    commas.extend(pending_comma.take());
                }
                _ => break,
            }
        }

        if identifiers.len() == 1 {
            grouped.extend(identifiers.into_iter().map(TokenTree::Identifier));
        } else {
            grouped.push(TokenTree::IdentifierList(IdentifierList {
                identifiers,
                commas,
            }));
        }
        if let Some(comma) = pending_comma {
            grouped.push(TokenTree::Punctuation(',', comma));
        }
    }

    grouped
}
