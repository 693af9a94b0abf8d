//! Pass-scoped rewrite tables and the bottom-up tree transformer.

use std::fmt;
use std::sync::Arc;

use lisle_ir::Tree;
use rustc_hash::FxHashMap;

use crate::clause::{Clause, ClauseKind};
use crate::language::{ClauseId, Language, LanguageClause};
use crate::stack::ensure_sufficient_stack;
use crate::terminal::Terminal;

/// A rewrite: takes a matched (already transformed) tree, returns its
/// replacement.
pub type Rewrite = Arc<dyn Fn(Tree) -> Tree + Send + Sync>;

/// Rewrites of one pass, keyed by the clause they apply to.
///
/// Built once when the pass is defined and never changed afterwards, so a
/// rewrite can never apply outside its own pass.
#[derive(Clone, Default)]
pub struct RewriteTable {
    rewrites: FxHashMap<ClauseId, Rewrite>,
}

impl RewriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rewrite` for `id`, returning the one it replaced.
    pub fn insert(&mut self, id: ClauseId, rewrite: Rewrite) -> Option<Rewrite> {
        self.rewrites.insert(id, rewrite)
    }

    #[inline]
    pub fn get(&self, id: ClauseId) -> Option<&Rewrite> {
        self.rewrites.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: ClauseId) -> bool {
        self.rewrites.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }
}

impl fmt::Debug for RewriteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.rewrites.keys().copied().collect();
        ids.sort_unstable();
        f.debug_struct("RewriteTable").field("clauses", &ids).finish()
    }
}

/// Applies one pass's rewrites over a tree of its source language.
pub(crate) struct Rewriter<'a> {
    language: &'a Language,
    rewrites: &'a RewriteTable,
}

impl<'a> Rewriter<'a> {
    pub(crate) fn new(language: &'a Language, rewrites: &'a RewriteTable) -> Self {
        Rewriter { language, rewrites }
    }

    /// Transform `tree`, which `entry` is known to match.
    ///
    /// Unless `entry` is opaque, list elements are transformed first, each
    /// according to the body clause that captured it. Then the entry's
    /// rewrite, if any, replaces the rebuilt tree.
    pub(crate) fn transform(&self, entry: &LanguageClause, tree: Tree) -> Tree {
        ensure_sufficient_stack(|| {
            let tree = if entry.transform_children() {
                self.transform_elements(entry.clause(), tree)
            } else {
                tree
            };
            match self.rewrites.get(entry.id()) {
                Some(rewrite) => {
                    tracing::trace!(clause = entry.signature(), %tree, "rewriting");
                    rewrite(tree)
                }
                None => tree,
            }
        })
    }

    /// Rebuild a list matched by the list clause `clause`, element by element.
    fn transform_elements(&self, clause: &Clause, tree: Tree) -> Tree {
        let Tree::List(items) = tree else {
            return tree;
        };
        let Some(captures) = clause.captures(&items, self.language) else {
            return Tree::List(items);
        };
        Tree::List(
            items
                .into_iter()
                .zip(captures)
                .map(|(item, capture)| self.transform_captured(capture, item))
                .collect(),
        )
    }

    /// Only expression slots and nested list clauses are descended into.
    /// Literals, names, constants and data stay as written.
    fn transform_captured(&self, capture: &Clause, item: Tree) -> Tree {
        match &capture.kind {
            ClauseKind::List(_) => self.transform_elements(capture, item),
            ClauseKind::Terminal(name)
                if self.language.terminal(name) == Some(Terminal::Expression) =>
            {
                self.transform_expression(item)
            }
            _ => item,
        }
    }

    fn transform_expression(&self, item: Tree) -> Tree {
        match self.language.matching_clause(&item) {
            Some(entry) => self.transform(entry, item),
            None => {
                tracing::trace!(tree = %item, "no clause matches, kept as is");
                item
            }
        }
    }
}
