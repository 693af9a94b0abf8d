//! Languages: ordered sets of top-level clauses plus a terminal registry.
//!
//! A [`Language`] is the grammar a pass accepts or produces. Clause order
//! matters: [`Language::matching_clause`] returns the first entry that
//! matches, and [`Language::add_clause`] inserts at the front, so clauses a
//! pass introduces shadow the ones it inherited.
//!
//! Entries are shared between a language and its children through `Arc` and
//! keep their [`ClauseId`], which is what pass rewrite tables are keyed by.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use lisle_ir::Tree;
use rustc_hash::FxHashMap;

use crate::clause::{Clause, ClauseKind};
use crate::error::GrammarError;
use crate::reader::read_pattern;
use crate::terminal::Terminal;

/// The terminal name that always means "any form of the active language".
pub const EXPRESSION_TERMINAL: &str = "ε";

/// Identity of a top-level clause entry.
///
/// Allocated from a process-wide counter when the entry is created and
/// preserved by [`Language::create_child`]. Two entries with the same
/// signature in unrelated languages have different ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ClauseId(u32);

impl ClauseId {
    fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        ClauseId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A top-level clause of a language.
#[derive(Debug)]
pub struct LanguageClause {
    id: ClauseId,
    signature: String,
    clause: Clause,
    transform_children: bool,
}

impl LanguageClause {
    #[inline]
    pub fn id(&self) -> ClauseId {
        self.id
    }

    /// Normalized pattern text, e.g. `('if ε ε)`.
    #[inline]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    #[inline]
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    /// Whether a matched list has its elements transformed before the
    /// entry's own rewrite runs. False for opaque forms such as `quote`.
    #[inline]
    pub fn transform_children(&self) -> bool {
        self.transform_children
    }

    pub fn matches(&self, tree: &Tree, language: &Language) -> bool {
        self.clause.matches(tree, language)
    }
}

/// Where a new entry goes in the clause list.
#[derive(Copy, Clone)]
enum Placement {
    Front,
    Back,
}

#[derive(Clone, Debug)]
pub struct Language {
    name: String,
    clauses: Vec<Arc<LanguageClause>>,
    terminals: FxHashMap<String, Terminal>,
}

impl Language {
    /// An empty language. Only `ε` is defined until terminals are registered.
    pub fn new(name: impl Into<String>) -> Self {
        Language {
            name: name.into(),
            clauses: Vec::new(),
            terminals: FxHashMap::default(),
        }
    }

    /// Register a terminal under `name`.
    #[must_use]
    pub fn with_terminal(mut self, name: impl Into<String>, terminal: Terminal) -> Self {
        self.terminals.insert(name.into(), terminal);
        self
    }

    /// Append a clause whose list elements are transformed.
    pub fn with_clause(mut self, pattern: &str) -> Result<Self, GrammarError> {
        self.insert(pattern, true, Placement::Back)?;
        Ok(self)
    }

    /// Append a clause whose contents are left alone.
    pub fn with_opaque_clause(mut self, pattern: &str) -> Result<Self, GrammarError> {
        self.insert(pattern, false, Placement::Back)?;
        Ok(self)
    }

    /// Insert a clause at the front, ahead of every existing clause.
    pub fn add_clause(&mut self, pattern: &str) -> Result<ClauseId, GrammarError> {
        self.insert(pattern, true, Placement::Front)
    }

    /// [`add_clause`](Self::add_clause) for a clause whose contents are left
    /// alone.
    pub fn add_opaque_clause(&mut self, pattern: &str) -> Result<ClauseId, GrammarError> {
        self.insert(pattern, false, Placement::Front)
    }

    /// Remove the entry whose signature matches `pattern`.
    pub fn remove_clause(&mut self, pattern: &str) -> Result<Arc<LanguageClause>, GrammarError> {
        let (_, signature) = compile(pattern)?;
        let index = self
            .position(&signature)
            .ok_or_else(|| self.unknown_clause(signature))?;
        let removed = self.clauses.remove(index);
        tracing::debug!(
            language = %self.name,
            clause = %removed.signature,
            id = %removed.id,
            "removed clause"
        );
        Ok(removed)
    }

    /// The id of the entry whose signature matches `pattern`.
    pub fn clause_id(&self, pattern: &str) -> Result<ClauseId, GrammarError> {
        let (_, signature) = compile(pattern)?;
        self.position(&signature)
            .map(|index| self.clauses[index].id)
            .ok_or_else(|| self.unknown_clause(signature))
    }

    /// A new language sharing this one's entries and terminals.
    pub fn create_child(&self, name: impl Into<String>) -> Language {
        Language {
            name: name.into(),
            clauses: self.clauses.clone(),
            terminals: self.terminals.clone(),
        }
    }

    /// Whether some top-level clause accepts `tree`.
    pub fn form_matches(&self, tree: &Tree) -> bool {
        self.matching_clause(tree).is_some()
    }

    /// The first entry, in clause order, that accepts `tree`.
    pub fn matching_clause(&self, tree: &Tree) -> Option<&Arc<LanguageClause>> {
        self.clauses.iter().find(|entry| entry.matches(tree, self))
    }

    /// The entry with identity `id`, if this language still has it.
    pub fn clause(&self, id: ClauseId) -> Option<&Arc<LanguageClause>> {
        self.clauses.iter().find(|entry| entry.id == id)
    }

    /// Resolve a terminal name. `ε` is always the expression terminal.
    pub fn terminal(&self, name: &str) -> Option<Terminal> {
        if name == EXPRESSION_TERMINAL {
            return Some(Terminal::Expression);
        }
        self.terminals.get(name).copied()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn clauses(&self) -> &[Arc<LanguageClause>] {
        &self.clauses
    }

    /// Entry signatures in clause order.
    pub fn signatures(&self) -> impl Iterator<Item = &str> + '_ {
        self.clauses.iter().map(|entry| entry.signature())
    }

    fn insert(
        &mut self,
        pattern: &str,
        transform_children: bool,
        placement: Placement,
    ) -> Result<ClauseId, GrammarError> {
        let (clause, signature) = compile(pattern)?;
        self.validate(&clause, &signature)?;

        let entry = Arc::new(LanguageClause {
            id: ClauseId::fresh(),
            signature,
            clause,
            transform_children,
        });
        let id = entry.id;
        tracing::debug!(
            language = %self.name,
            clause = %entry.signature,
            %id,
            opaque = !transform_children,
            "added clause"
        );
        match placement {
            Placement::Front => self.clauses.insert(0, entry),
            Placement::Back => self.clauses.push(entry),
        }
        Ok(id)
    }

    fn validate(&self, clause: &Clause, signature: &str) -> Result<(), GrammarError> {
        if let Some(name) = clause
            .terminal_names()
            .into_iter()
            .find(|name| self.terminal(name).is_none())
        {
            return Err(GrammarError::UnknownTerminal {
                name: name.to_string(),
                signature: signature.to_string(),
            });
        }
        if let ClauseKind::Terminal(name) = &clause.kind {
            if self.terminal(name) == Some(Terminal::Expression) {
                return Err(GrammarError::LeftRecursive {
                    signature: signature.to_string(),
                    language: self.name.clone(),
                });
            }
        }
        if self.position(signature).is_some() {
            return Err(GrammarError::DuplicateClause {
                signature: signature.to_string(),
                language: self.name.clone(),
            });
        }
        Ok(())
    }

    fn position(&self, signature: &str) -> Option<usize> {
        self.clauses
            .iter()
            .position(|entry| entry.signature == signature)
    }

    fn unknown_clause(&self, signature: String) -> GrammarError {
        GrammarError::UnknownClause {
            signature,
            language: self.name.clone(),
        }
    }
}

/// Read `pattern` and render its normalized signature.
fn compile(pattern: &str) -> Result<(Clause, String), GrammarError> {
    let clause = read_pattern(pattern).map_err(|source| GrammarError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let signature = clause.to_string();
    Ok((clause, signature))
}
