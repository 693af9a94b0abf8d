//! The universal program tree.

use std::fmt;

/// Numeric atom. Integers and floats are kept apart so that printing a
/// rewritten tree reproduces the literal the reader saw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            // `{:?}` keeps the trailing `.0` on whole floats.
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// A program value: an atom or an ordered list of trees.
///
/// Trees are immutable once built. Rewrites take a tree by value and return
/// a new one.
#[derive(Clone, Debug, PartialEq)]
pub enum Tree {
    Symbol(String),
    Number(Number),
    String(String),
    Boolean(bool),
    List(Vec<Tree>),
}

impl Tree {
    /// Symbol atom.
    pub fn symbol(name: impl Into<String>) -> Self {
        Tree::Symbol(name.into())
    }

    /// Integer atom.
    pub fn int(value: i64) -> Self {
        Tree::Number(Number::Int(value))
    }

    /// Float atom.
    pub fn float(value: f64) -> Self {
        Tree::Number(Number::Float(value))
    }

    /// String atom.
    pub fn string(value: impl Into<String>) -> Self {
        Tree::String(value.into())
    }

    /// List of trees.
    pub fn list(items: impl IntoIterator<Item = Tree>) -> Self {
        Tree::List(items.into_iter().collect())
    }

    /// Returns the symbol name if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Tree::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the elements if this is a list.
    pub fn as_list(&self) -> Option<&[Tree]> {
        match self {
            Tree::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for a symbol spelled exactly `name`.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }

    /// True for numbers, strings and booleans.
    pub fn is_constant(&self) -> bool {
        matches!(self, Tree::Number(_) | Tree::String(_) | Tree::Boolean(_))
    }

    /// Short kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Tree::Symbol(_) => "symbol",
            Tree::Number(_) => "number",
            Tree::String(_) => "string",
            Tree::Boolean(_) => "boolean",
            Tree::List(_) => "list",
        }
    }
}

impl From<Number> for Tree {
    fn from(value: Number) -> Self {
        Tree::Number(value)
    }
}

impl From<bool> for Tree {
    fn from(value: bool) -> Self {
        Tree::Boolean(value)
    }
}

impl fmt::Display for Tree {
    /// Renders the tree as an s-expression, e.g. `(if true 1 nil)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Symbol(name) => f.write_str(name),
            Tree::Number(number) => write!(f, "{number}"),
            Tree::String(value) => {
                f.write_str("\"")?;
                for c in value.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Tree::Boolean(true) => f.write_str("true"),
            Tree::Boolean(false) => f.write_str("false"),
            Tree::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
