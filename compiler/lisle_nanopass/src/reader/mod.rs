//! Recursive descent reader: pattern tokens to a [`Clause`] tree.
//!
//! ```text
//! pattern  := clause
//! clause   := (list | group | 'name | name) quant?
//! list     := '(' clause* ')'
//! group    := '[' clause+ ']'        ; only inside a list
//! quant    := '*' | '+'
//! ```
//!
//! Terminal names are not resolved here. They are looked up in the active
//! language at match time, which allows forward references and the
//! self-referential `ε`.

use thiserror::Error;

use crate::clause::{Clause, Quantifier};
use crate::diagnostic::{Snippet, SourcePosition};
use crate::lexer::{lex, LexError};
use crate::token::{Token, TokenKind};

/// A reader error with a rendered source snippet.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{position}: {kind}\n{snippet}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: SourcePosition,
    pub snippet: Snippet,
}

/// What kind of reader error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    /// `)`, `]`, `+` or `*` where a clause was expected.
    #[error("unexpected '{0}'")]
    UnexpectedToken(TokenKind),
    #[error("unterminated list: expected ')'")]
    UnterminatedList,
    #[error("unterminated group: expected ']'")]
    UnterminatedGroup,
    #[error("empty pattern")]
    EmptyPattern,
    #[error("a group '[...]' is only valid inside a list")]
    GroupOutsideList,
    #[error("empty group '[]'")]
    EmptyGroup,
    #[error("unexpected '{0}' after the end of the pattern")]
    TrailingToken(TokenKind),
}

/// Either stage of pattern compilation can fail.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum PatternError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Compile pattern text into its root clause.
pub fn read_pattern(source: &str) -> Result<Clause, PatternError> {
    let tokens = lex(source)?;
    let mut reader = Reader {
        source,
        tokens: &tokens,
        pos: 0,
    };
    Ok(reader.read_root()?)
}

struct Reader<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_root(&mut self) -> Result<Clause, ParseError> {
        let Some(first) = self.peek() else {
            return Err(self.error_at_end(ParseErrorKind::EmptyPattern));
        };
        if first.kind == TokenKind::LBracket {
            return Err(self.error(ParseErrorKind::GroupOutsideList, first.position));
        }

        let root = self.read_clause()?;

        if let Some(extra) = self.peek() {
            let kind = ParseErrorKind::TrailingToken(extra.kind.clone());
            return Err(self.error(kind, extra.position));
        }
        Ok(root)
    }

    fn read_clause(&mut self) -> Result<Clause, ParseError> {
        let Some(token) = self.next() else {
            return Err(self.error_at_end(ParseErrorKind::EmptyPattern));
        };
        let clause = match &token.kind {
            TokenKind::LParen => Clause::list(self.read_list(token.position)?),
            TokenKind::LBracket => Clause::group(self.read_group(token.position)?),
            TokenKind::Literal(name) => Clause::literal(name.clone()),
            TokenKind::Terminal(name) => Clause::terminal(name.clone()),
            kind @ (TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Plus
            | TokenKind::Asterisk) => {
                let kind = ParseErrorKind::UnexpectedToken(kind.clone());
                return Err(self.error(kind, token.position));
            }
        };
        Ok(clause.quantified(self.read_quantifier()))
    }

    /// Body of a list; the opening `(` is already consumed.
    fn read_list(&mut self, open: SourcePosition) -> Result<Vec<Clause>, ParseError> {
        let mut body = Vec::new();
        loop {
            match self.peek().map(|t| &t.kind) {
                None => return Err(self.error(ParseErrorKind::UnterminatedList, open)),
                Some(TokenKind::RParen) => {
                    self.pos += 1;
                    return Ok(body);
                }
                Some(_) => body.push(self.read_clause()?),
            }
        }
    }

    /// Body of a group; the opening `[` is already consumed.
    fn read_group(&mut self, open: SourcePosition) -> Result<Vec<Clause>, ParseError> {
        let mut body = Vec::new();
        loop {
            match self.peek().map(|t| &t.kind) {
                None => return Err(self.error(ParseErrorKind::UnterminatedGroup, open)),
                Some(TokenKind::RBracket) => {
                    self.pos += 1;
                    if body.is_empty() {
                        return Err(self.error(ParseErrorKind::EmptyGroup, open));
                    }
                    return Ok(body);
                }
                Some(_) => body.push(self.read_clause()?),
            }
        }
    }

    /// Consume a trailing `*` or `+`, if present.
    fn read_quantifier(&mut self) -> Quantifier {
        let quantifier = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Asterisk) => Quantifier::ZeroOrMore,
            Some(TokenKind::Plus) => Quantifier::OneOrMore,
            _ => return Quantifier::One,
        };
        self.pos += 1;
        quantifier
    }

    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error_at_end(&self, kind: ParseErrorKind) -> ParseError {
        self.error(kind, SourcePosition::end_of(self.source))
    }

    fn error(&self, kind: ParseErrorKind, position: SourcePosition) -> ParseError {
        ParseError {
            kind,
            position,
            snippet: Snippet::new(self.source, position),
        }
    }
}
