//! Character cursor over pattern text.
//!
//! Patterns are short and may contain non-ASCII names such as `ε`, so the
//! cursor steps by `char` and keeps the line/column of the current character
//! up to date for diagnostics. EOF is `current() == None`.

use crate::diagnostic::SourcePosition;

/// Cursor over pattern source text.
///
/// The cursor is [`Copy`], so a snapshot can be taken before a speculative
/// scan and restored afterwards.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    position: SourcePosition,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first character of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: SourcePosition::START,
        }
    }

    /// The whole source text.
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    /// Position of the current character.
    #[inline]
    pub(crate) fn position(&self) -> SourcePosition {
        self.position
    }

    /// Unconsumed text, starting at the current character.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.position.offset as usize..]
    }

    /// The current character, or `None` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.rest().is_empty()
    }

    /// Step over the current character. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.position = self.position.advanced_by(c);
        }
    }

    /// Consume characters while `pred` holds and return them as a slice.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position.offset as usize;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.position.offset as usize]
    }

    /// Skip to the start of the next line, or to EOF.
    pub(crate) fn skip_line(&mut self) {
        self.eat_while(|c| c != '\n');
        self.advance();
    }
}
