//! Nanopass engine for the Lisle rewriter.
//!
//! A program [`Tree`](lisle_ir::Tree) is threaded through an ordered chain of
//! grammars. Each [`Pass`] accepts a richer dialect and emits a simpler one.
//!
//! # Pipeline Position
//!
//! ```text
//! pattern text → Lex → Read → Clause ─┐
//!                                     ├→ Language₀ → Pass₁ → Language₁ → … → Languageₙ
//! Tree ───────────────────────────────┘
//! ```
//!
//! # Pattern Syntax
//!
//! | Syntax      | Meaning                                                  |
//! |-------------|----------------------------------------------------------|
//! | `( ... )`   | list: the body must consume every element                |
//! | `[ ... ]`   | group: a chunk of sub-clauses repeated as a unit          |
//! | `x*`, `x+`  | zero-or-more / one-or-more of the preceding clause        |
//! | `'if`       | the exact symbol `if`                                     |
//! | `s`         | the terminal registered as `s` in the active language     |
//! | `ε`         | any expression accepted by the active language            |
//! | `; ...`     | comment to end of line                                    |
//!
//! # Pass Scoping
//!
//! Rewrite functions are never attached to clauses. Every [`Pass`] owns an
//! immutable [`RewriteTable`] keyed by [`ClauseId`], and the active
//! [`Language`] is an explicit argument to matching. Running a pass mutates
//! nothing, so one [`PassManager`] can run on many threads at once.

mod clause;
mod cursor;
mod diagnostic;
mod error;
mod language;
mod lexer;
mod pass;
mod reader;
mod rewrite;
mod stack;
mod terminal;
mod token;

pub use clause::{Clause, ClauseKind, Quantifier};
pub use diagnostic::{Snippet, SourcePosition};
pub use error::{GrammarError, NanopassError};
pub use language::{ClauseId, Language, LanguageClause, EXPRESSION_TERMINAL};
pub use lexer::{lex, LexError, LexErrorKind};
pub use pass::{Pass, PassDefinition, PassManager};
pub use reader::{read_pattern, ParseError, ParseErrorKind, PatternError};
pub use rewrite::{Rewrite, RewriteTable};
pub use terminal::{is_primitive, Terminal, PRIMITIVES};
pub use token::{Token, TokenKind};
