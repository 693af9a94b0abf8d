//! Terminal registry entries: named leaf predicates.

use std::fmt;

use lisle_ir::Tree;

use crate::language::Language;

/// Builtin procedure names recognized by [`Terminal::Primitive`].
pub const PRIMITIVES: &[&str] = &[
    // Arithmetic
    "+",
    "-",
    "*",
    "/",
    // Pairs
    "cons",
    "car",
    "cdr",
    "pair?",
    // Vectors
    "vector",
    "make-vector",
    "vector-length",
    "vector-ref",
    "vector-set!",
    "vector?",
    // Strings
    "string",
    "make-string",
    "string-length",
    "string-ref",
    "string-set!",
    "string?",
    "void",
];

/// Whether `name` is one of the [`PRIMITIVES`].
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// The kinds of terminal a language can register.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Terminal {
    /// Any symbol.
    Variable,
    /// A symbol naming a builtin procedure.
    Primitive,
    /// A number, string or boolean.
    Constant,
    /// Anything at all, including lists.
    Datum,
    /// Anything some top-level clause of the active language accepts.
    ///
    /// Resolved against the language passed to [`Terminal::matches`] on
    /// every call; the answer changes from pass to pass as clauses are added
    /// and removed, so it is never cached.
    Expression,
}

impl Terminal {
    pub fn matches(self, tree: &Tree, language: &Language) -> bool {
        match self {
            Terminal::Variable => matches!(tree, Tree::Symbol(_)),
            Terminal::Primitive => tree.as_symbol().is_some_and(is_primitive),
            Terminal::Constant => tree.is_constant(),
            Terminal::Datum => true,
            Terminal::Expression => language.form_matches(tree),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Terminal::Variable => "variable",
            Terminal::Primitive => "primitive",
            Terminal::Constant => "constant",
            Terminal::Datum => "datum",
            Terminal::Expression => "expression",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
