//! S-expression reader for tests.
//!
//! Program text is normally turned into a [`Tree`] by an external reader.
//! Tests in this workspace only need a convenient way to write trees down, so
//! this module provides a small reader for the same surface syntax:
//! lists in `( )`, integers, floats, `"strings"` with `\"`, `\\`, `\n` and
//! `\t` escapes, `true`/`false`, and symbols. `;` comments run to end of line.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::{Number, Tree};

/// Error produced by [`read`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ReadError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected ')' at byte {0}")]
    UnexpectedClose(usize),
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("unknown escape '\\{escape}' at byte {offset}")]
    UnknownEscape { escape: char, offset: usize },
    #[error("trailing input at byte {0}")]
    TrailingInput(usize),
}

/// Read exactly one tree from `source`.
pub fn read(source: &str) -> Result<Tree, ReadError> {
    let mut reader = Reader {
        chars: source.char_indices().peekable(),
    };
    let tree = reader.read_tree()?;
    reader.skip_trivia();
    match reader.chars.peek() {
        Some(&(offset, _)) => Err(ReadError::TrailingInput(offset)),
        None => Ok(tree),
    }
}

struct Reader<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Reader<'_> {
    fn skip_trivia(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else if c == ';' {
                while let Some((_, c)) = self.chars.next() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_tree(&mut self) -> Result<Tree, ReadError> {
        self.skip_trivia();
        let Some(&(offset, c)) = self.chars.peek() else {
            return Err(ReadError::UnexpectedEof);
        };
        match c {
            '(' => {
                self.chars.next();
                self.read_list()
            }
            ')' => Err(ReadError::UnexpectedClose(offset)),
            '"' => {
                self.chars.next();
                self.read_string(offset)
            }
            _ => Ok(self.read_atom()),
        }
    }

    fn read_list(&mut self) -> Result<Tree, ReadError> {
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            match self.chars.peek() {
                None => return Err(ReadError::UnexpectedEof),
                Some(&(_, ')')) => {
                    self.chars.next();
                    return Ok(Tree::List(items));
                }
                Some(_) => items.push(self.read_tree()?),
            }
        }
    }

    fn read_string(&mut self, start: usize) -> Result<Tree, ReadError> {
        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => return Err(ReadError::UnterminatedString(start)),
                Some((_, '"')) => return Ok(Tree::String(value)),
                Some((offset, '\\')) => match self.chars.next() {
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, escape)) => return Err(ReadError::UnknownEscape { escape, offset }),
                    None => return Err(ReadError::UnterminatedString(start)),
                },
                Some((_, c)) => value.push(c),
            }
        }
    }

    fn read_atom(&mut self) -> Tree {
        let mut text = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || matches!(c, '(' | ')' | '"' | ';') {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        classify_atom(text)
    }
}

fn classify_atom(text: String) -> Tree {
    match text.as_str() {
        "true" => return Tree::Boolean(true),
        "false" => return Tree::Boolean(false),
        _ => {}
    }
    if let Ok(value) = text.parse::<i64>() {
        return Tree::Number(Number::Int(value));
    }
    // `+`, `-`, `inf` and `nan` parse as floats but are symbols here.
    let looks_numeric = text
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if looks_numeric {
        if let Ok(value) = text.parse::<f64>() {
            return Tree::Number(Number::Float(value));
        }
    }
    Tree::Symbol(text)
}
