//! Clause matchers: the compiled form of a pattern.
//!
//! A [`Clause`] is a tree of matcher nodes produced by
//! [`read_pattern`](crate::read_pattern). Matching is purely structural and
//! never mutates anything. Terminal names are looked up in the [`Language`]
//! passed to [`Clause::matches`], which is how `ε` can mean "whatever the
//! active language accepts" without the clause holding a reference to it.
//!
//! # Sequence Matching
//!
//! List bodies are matched left to right, greedily and without
//! backtracking. Once a quantified clause stops matching, the walk moves on
//! to the next body clause for good. A list only matches if the walk consumes
//! every element.
//!
//! Groups repeat their sub-clauses as a unit. A chunk counts only when every
//! position in it matches; the first failing chunk ends the scan.

use std::fmt;

use lisle_ir::Tree;

use crate::language::Language;
use crate::stack::ensure_sufficient_stack;

/// How many consecutive elements a clause captures.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Quantifier {
    #[default]
    One,
    /// `*` suffix.
    ZeroOrMore,
    /// `+` suffix.
    OneOrMore,
}

impl Quantifier {
    /// The pattern suffix for this quantifier.
    pub fn suffix(self) -> &'static str {
        match self {
            Quantifier::One => "",
            Quantifier::ZeroOrMore => "*",
            Quantifier::OneOrMore => "+",
        }
    }
}

/// The matcher node kinds.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ClauseKind {
    /// `( ... )`: matches a list whose elements the body consumes exactly.
    List(Vec<Clause>),
    /// `[ ... ]`: a repeated chunk; only meaningful inside a list body.
    Group(Vec<Clause>),
    /// `'name`: the exact symbol `name`.
    Literal(String),
    /// `name`: delegates to the terminal registered under `name`.
    Terminal(String),
}

/// A matcher node together with its capture quantifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Clause {
    pub kind: ClauseKind,
    pub quantifier: Quantifier,
}

impl Clause {
    pub fn new(kind: ClauseKind, quantifier: Quantifier) -> Self {
        Clause { kind, quantifier }
    }

    pub fn list(body: Vec<Clause>) -> Self {
        Clause::new(ClauseKind::List(body), Quantifier::One)
    }

    pub fn group(body: Vec<Clause>) -> Self {
        Clause::new(ClauseKind::Group(body), Quantifier::One)
    }

    pub fn literal(name: impl Into<String>) -> Self {
        Clause::new(ClauseKind::Literal(name.into()), Quantifier::One)
    }

    pub fn terminal(name: impl Into<String>) -> Self {
        Clause::new(ClauseKind::Terminal(name.into()), Quantifier::One)
    }

    /// The same clause with a different quantifier.
    #[must_use]
    pub fn quantified(mut self, quantifier: Quantifier) -> Self {
        self.quantifier = quantifier;
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, ClauseKind::List(_))
    }

    /// Every terminal name referenced anywhere in this clause, in order.
    pub fn terminal_names(&self) -> Vec<&str> {
        fn collect<'c>(clause: &'c Clause, names: &mut Vec<&'c str>) {
            match &clause.kind {
                ClauseKind::List(body) | ClauseKind::Group(body) => {
                    for sub in body {
                        collect(sub, names);
                    }
                }
                ClauseKind::Terminal(name) => names.push(name),
                ClauseKind::Literal(_) => {}
            }
        }

        let mut names = Vec::new();
        collect(self, &mut names);
        names
    }

    /// Whether `tree` matches this clause as a single element.
    ///
    /// The quantifier is ignored here; it only governs how many elements a
    /// clause consumes inside a list body. A group never matches on its own.
    pub fn matches(&self, tree: &Tree, language: &Language) -> bool {
        ensure_sufficient_stack(|| match &self.kind {
            ClauseKind::List(body) => match tree {
                Tree::List(items) => {
                    match_sequence(body, items, language, None) == Some(items.len())
                }
                _ => false,
            },
            ClauseKind::Group(_) => false,
            ClauseKind::Literal(name) => tree.is_symbol(name),
            ClauseKind::Terminal(name) => language
                .terminal(name)
                .is_some_and(|terminal| terminal.matches(tree, language)),
        })
    }

    /// For a list clause matching `items`, the body clause that captured each
    /// element, position by position.
    ///
    /// Group sub-clauses are reported directly, so `[s ε]+` over `x 1 y 2`
    /// yields `s ε s ε`. `None` if this is not a list clause or it does not
    /// match.
    pub fn captures<'c>(
        &'c self,
        items: &[Tree],
        language: &Language,
    ) -> Option<Vec<&'c Clause>> {
        let ClauseKind::List(body) = &self.kind else {
            return None;
        };
        let mut captures = Vec::with_capacity(items.len());
        let consumed = match_sequence(body, items, language, Some(&mut captures))?;
        (consumed == items.len()).then_some(captures)
    }
}

/// Walk `body` over `items`. Returns how many elements were consumed, or
/// `None` if some body clause could not be satisfied.
///
/// Leftover elements are not an error here; list matching checks that the
/// whole list was consumed, group matching uses the count as the chunk width.
/// When `captures` is given, the capturing clause of every consumed element
/// is pushed onto it.
fn match_sequence<'c>(
    body: &'c [Clause],
    items: &[Tree],
    language: &Language,
    mut captures: Option<&mut Vec<&'c Clause>>,
) -> Option<usize> {
    let mut consumed = 0;
    for clause in body {
        let rest = &items[consumed..];
        consumed += match &clause.kind {
            ClauseKind::Group(group_body) => match_group(
                group_body,
                clause.quantifier,
                rest,
                language,
                captures.as_deref_mut(),
            )?,
            _ => {
                let count = match_repeated(clause, rest, language)?;
                if let Some(captures) = captures.as_deref_mut() {
                    captures.extend(std::iter::repeat(clause).take(count));
                }
                count
            }
        };
    }
    Some(consumed)
}

/// Consume elements for a non-group body clause according to its quantifier.
fn match_repeated(clause: &Clause, items: &[Tree], language: &Language) -> Option<usize> {
    let greedy = || {
        items
            .iter()
            .take_while(|item| clause.matches(item, language))
            .count()
    };
    match clause.quantifier {
        Quantifier::One => items
            .first()
            .filter(|item| clause.matches(item, language))
            .map(|_| 1),
        Quantifier::ZeroOrMore => Some(greedy()),
        Quantifier::OneOrMore => Some(greedy()).filter(|&count| count > 0),
    }
}

/// Consume whole chunks of `body` from the front of `items`.
///
/// With only `One` sub-clauses a chunk is exactly `body.len()` elements wide.
/// Quantified sub-clauses (`[s*]`) make the width variable. A chunk that
/// consumes nothing counts once and ends the scan, so `[s*]*` terminates.
fn match_group<'c>(
    body: &'c [Clause],
    quantifier: Quantifier,
    items: &[Tree],
    language: &Language,
    mut captures: Option<&mut Vec<&'c Clause>>,
) -> Option<usize> {
    let mut consumed = 0;
    let mut chunks = 0usize;
    loop {
        let mark = captures.as_deref().map_or(0, Vec::len);
        let Some(width) =
            match_sequence(body, &items[consumed..], language, captures.as_deref_mut())
        else {
            // Drop whatever the failed chunk captured before it gave up.
            if let Some(captures) = captures.as_deref_mut() {
                captures.truncate(mark);
            }
            break;
        };
        consumed += width;
        chunks += 1;
        if width == 0 || quantifier == Quantifier::One {
            break;
        }
    }
    match quantifier {
        Quantifier::One | Quantifier::OneOrMore => (chunks > 0).then_some(consumed),
        Quantifier::ZeroOrMore => Some(consumed),
    }
}

impl fmt::Display for Clause {
    /// Renders the normalized signature, e.g. `('let ([s ε]+) ε+)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn body(f: &mut fmt::Formatter<'_>, clauses: &[Clause]) -> fmt::Result {
            for (i, clause) in clauses.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{clause}")?;
            }
            Ok(())
        }

        match &self.kind {
            ClauseKind::List(clauses) => {
                f.write_str("(")?;
                body(f, clauses)?;
                f.write_str(")")?;
            }
            ClauseKind::Group(clauses) => {
                f.write_str("[")?;
                body(f, clauses)?;
                f.write_str("]")?;
            }
            ClauseKind::Literal(name) => write!(f, "'{name}")?,
            ClauseKind::Terminal(name) => f.write_str(name)?,
        }
        f.write_str(self.quantifier.suffix())
    }
}

#[cfg(test)]
mod tests;
