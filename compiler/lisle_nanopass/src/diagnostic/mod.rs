//! Source positions and caret snippets for pattern diagnostics.
//!
//! Pattern errors render as:
//!
//! ```text
//! 1:6: unrecognized character '1'
//! 	('if 1)
//! 	     ^
//! ```

use std::fmt;

/// A location in pattern text.
///
/// `offset` is a byte index; `line` and `column` are 1-based and count
/// characters, so `ε` occupies one column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourcePosition {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    /// Position of the first character.
    pub const START: SourcePosition = SourcePosition {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Position just past the last character of `source`.
    pub fn end_of(source: &str) -> Self {
        let mut position = Self::START;
        for c in source.chars() {
            position = position.advanced_by(c);
        }
        position
    }

    /// Position after stepping over `c`.
    #[inline]
    pub(crate) fn advanced_by(self, c: char) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a char is at most 4 bytes"
        )]
        let width = c.len_utf8() as u32;
        if c == '\n' {
            SourcePosition {
                offset: self.offset + width,
                line: self.line + 1,
                column: 1,
            }
        } else {
            SourcePosition {
                offset: self.offset + width,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The offending source line with a caret under the error column.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Snippet {
    pub line: String,
    pub column: u32,
}

impl Snippet {
    /// Cut the line containing `position` out of `source`.
    pub fn new(source: &str, position: SourcePosition) -> Self {
        let line = source
            .lines()
            .nth(position.line.saturating_sub(1) as usize)
            .unwrap_or("");
        Snippet {
            line: line.to_string(),
            column: position.column,
        }
    }

    /// The marker line: padding up to the column, then `^`.
    ///
    /// Tabs in the source line are copied so the caret stays aligned.
    pub fn marker(&self) -> String {
        let mut marker: String = self
            .line
            .chars()
            .take(self.column.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        marker.push('^');
        marker
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}\n\t{}", self.line, self.marker())
    }
}
