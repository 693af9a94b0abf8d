//! Pattern lexer.
//!
//! Turns pattern text such as `('fn ([s*]) ε+)` into [`Token`]s.
//!
//! # Character Classes
//!
//! - `( ) [ ] + *` are single-character tokens.
//! - `'` starts a literal symbol; the following symbol characters are its name.
//! - Any other symbol character except a digit starts a terminal name.
//! - Whitespace separates tokens; `;` comments run to end of line.
//!
//! Symbol characters are all non-whitespace, non-control characters other
//! than the reserved `( ) [ ] + * ' ;`. That covers letters, digits,
//! punctuation and Unicode symbols, so `ε`, `vector-set!` and `pair?` are all
//! single names.

use thiserror::Error;

use crate::cursor::Cursor;
use crate::diagnostic::{Snippet, SourcePosition};
use crate::token::{Token, TokenKind};

/// A lexer error with a rendered source snippet.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{position}: {kind}\n{snippet}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
    pub snippet: Snippet,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
    /// A `'` not followed by a symbol name.
    #[error("expected a symbol name after '")]
    EmptyLiteral,
}

/// Characters with a token of their own, or special meaning after a name.
const RESERVED: [char; 8] = ['(', ')', '[', ']', '+', '*', '\'', ';'];

/// Whether `c` may appear in a terminal or literal name.
#[inline]
fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !RESERVED.contains(&c)
}

/// Tokenize a whole pattern.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer {
        cursor: Cursor::new(source),
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    tracing::trace!(count = tokens.len(), pattern = source, "lexed pattern");
    Ok(tokens)
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl Lexer<'_> {
    /// Produce the next token, or `None` at EOF.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_trivia();
        let position = self.cursor.position();
        let Some(c) = self.cursor.current() else {
            return Ok(None);
        };

        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '+' => self.single(TokenKind::Plus),
            '*' => self.single(TokenKind::Asterisk),
            '\'' => {
                self.cursor.advance();
                let name = self.cursor.eat_while(is_symbol_char);
                if name.is_empty() {
                    return Err(self.error(LexErrorKind::EmptyLiteral, position));
                }
                TokenKind::Literal(name.to_string())
            }
            c if is_symbol_char(c) && !c.is_ascii_digit() => {
                TokenKind::Terminal(self.cursor.eat_while(is_symbol_char).to_string())
            }
            c => return Err(self.error(LexErrorKind::UnrecognizedCharacter(c), position)),
        };

        Ok(Some(Token::new(kind, position)))
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Skip whitespace and `;` comments.
    fn skip_trivia(&mut self) {
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                Some(';') => self.cursor.skip_line(),
                Some(c) if c.is_whitespace() => self.cursor.advance(),
                _ => break,
            }
        }
    }

    fn error(&self, kind: LexErrorKind, position: SourcePosition) -> LexError {
        LexError {
            kind,
            position,
            snippet: Snippet::new(self.cursor.source(), position),
        }
    }
}
