//! Pattern tokens.

use std::fmt;

use crate::diagnostic::SourcePosition;

/// What a pattern token is.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Plus,
    Asterisk,
    /// Bare word naming a terminal, e.g. `s` or `ε`.
    Terminal(String),
    /// `'`-prefixed word; holds the name without the quote.
    Literal(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Asterisk => f.write_str("*"),
            TokenKind::Terminal(name) => f.write_str(name),
            TokenKind::Literal(name) => write!(f, "'{name}"),
        }
    }
}

/// A token and the position of its first character.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Token { kind, position }
    }
}
