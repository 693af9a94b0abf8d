//! Passes and the pass manager.
//!
//! A pass is defined by how its output grammar differs from its input
//! grammar, plus the rewrites that turn one into the other:
//!
//! ```text
//! PassDefinition::new("remove-one-armed-if")
//!     .remove_clause("('if ε ε)")
//!     .rewrite("('if ε ε)", append_nil)
//! ```
//!
//! [`PassManager::add_pass`] derives the target language from the latest one
//! and resolves every rewrite pattern to a [`ClauseId`] of the source
//! language. After that nothing about the pass changes.

use std::sync::Arc;

use lisle_ir::Tree;

use crate::error::{GrammarError, NanopassError};
use crate::language::{ClauseId, Language};
use crate::rewrite::{Rewrite, RewriteTable, Rewriter};

/// A clause a pass adds to its target language.
struct Addition {
    pattern: String,
    transform_children: bool,
}

/// The grammar delta and rewrites of a pass, by pattern text.
pub struct PassDefinition {
    name: String,
    additions: Vec<Addition>,
    removals: Vec<String>,
    rewrites: Vec<(String, Rewrite)>,
}

impl PassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        PassDefinition {
            name: name.into(),
            additions: Vec::new(),
            removals: Vec::new(),
            rewrites: Vec::new(),
        }
    }

    /// Add a clause to the target language. Added clauses end up at the
    /// front of the target, in the order they were listed.
    #[must_use]
    pub fn add_clause(mut self, pattern: impl Into<String>) -> Self {
        self.additions.push(Addition {
            pattern: pattern.into(),
            transform_children: true,
        });
        self
    }

    /// [`add_clause`](Self::add_clause) for a clause whose contents are left
    /// alone.
    #[must_use]
    pub fn add_opaque_clause(mut self, pattern: impl Into<String>) -> Self {
        self.additions.push(Addition {
            pattern: pattern.into(),
            transform_children: false,
        });
        self
    }

    /// Remove a source clause from the target language.
    #[must_use]
    pub fn remove_clause(mut self, pattern: impl Into<String>) -> Self {
        self.removals.push(pattern.into());
        self
    }

    /// Rewrite trees matched by the source clause `pattern`.
    #[must_use]
    pub fn rewrite(
        mut self,
        pattern: impl Into<String>,
        rewrite: impl Fn(Tree) -> Tree + Send + Sync + 'static,
    ) -> Self {
        self.rewrites.push((pattern.into(), Arc::new(rewrite)));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A pass: source language, target language and rewrite table.
#[derive(Debug)]
pub struct Pass {
    name: String,
    source: Arc<Language>,
    target: Arc<Language>,
    rewrites: RewriteTable,
}

impl Pass {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grammar this pass accepts.
    #[inline]
    pub fn source(&self) -> &Arc<Language> {
        &self.source
    }

    /// The grammar this pass produces.
    #[inline]
    pub fn target(&self) -> &Arc<Language> {
        &self.target
    }

    #[inline]
    pub fn rewrites(&self) -> &RewriteTable {
        &self.rewrites
    }

    /// Transform one tree of the source language.
    #[tracing::instrument(level = "debug", skip_all, fields(pass = %self.name))]
    pub fn run(&self, tree: Tree) -> Result<Tree, NanopassError> {
        let Some(entry) = self.source.matching_clause(&tree) else {
            return Err(NanopassError::InputMismatch {
                pass: self.name.clone(),
                tree: tree.to_string(),
            });
        };
        tracing::debug!(clause = entry.signature(), "matched root");
        Ok(Rewriter::new(&self.source, &self.rewrites).transform(entry, tree))
    }
}

/// An ordered chain of passes over a base language.
///
/// Passes only read shared state while running, so `run_passes` takes
/// `&self` and may be called from several threads at once.
#[derive(Debug)]
pub struct PassManager {
    base: Arc<Language>,
    passes: Vec<Pass>,
}

impl PassManager {
    pub fn new(base: Language) -> Self {
        PassManager {
            base: Arc::new(base),
            passes: Vec::new(),
        }
    }

    /// Derive the next pass from the latest language and append it.
    pub fn add_pass(&mut self, definition: PassDefinition) -> Result<(), GrammarError> {
        let PassDefinition {
            name,
            additions,
            removals,
            rewrites,
        } = definition;
        let source = Arc::clone(self.current_language());

        let mut table = RewriteTable::new();
        for (pattern, rewrite) in rewrites {
            let id = source.clause_id(&pattern)?;
            if table.contains(id) {
                return Err(GrammarError::DuplicateRewrite {
                    signature: signature_of(&source, id, pattern),
                    pass: name,
                });
            }
            table.insert(id, rewrite);
        }

        let mut target = source.create_child(name.as_str());
        for pattern in &removals {
            target.remove_clause(pattern)?;
        }
        // Each insert goes to the front, so walk backwards to keep the order.
        for addition in additions.iter().rev() {
            if addition.transform_children {
                target.add_clause(&addition.pattern)?;
            } else {
                target.add_opaque_clause(&addition.pattern)?;
            }
        }

        tracing::debug!(
            pass = %name,
            source = source.name(),
            added = additions.len(),
            removed = removals.len(),
            rewrites = table.len(),
            "defined pass"
        );
        let pass = Pass {
            name,
            source,
            target: Arc::new(target),
            rewrites: table,
        };
        self.passes.push(pass);
        Ok(())
    }

    /// The base language, or the target of the last pass.
    pub fn current_language(&self) -> &Arc<Language> {
        self.passes.last().map_or(&self.base, |pass| &pass.target)
    }

    #[inline]
    pub fn base_language(&self) -> &Arc<Language> {
        &self.base
    }

    #[inline]
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Thread `tree` through every pass in order.
    ///
    /// The first failing pass aborts the run. The final tree must belong to
    /// the last pass's target language.
    pub fn run_passes(&self, tree: Tree) -> Result<Tree, NanopassError> {
        let mut tree = tree;
        for pass in &self.passes {
            tree = pass.run(tree)?;
        }
        if let Some(last) = self.passes.last() {
            if !last.target.form_matches(&tree) {
                return Err(NanopassError::OutputMismatch {
                    pass: last.name.clone(),
                    tree: tree.to_string(),
                });
            }
        }
        Ok(tree)
    }
}

fn signature_of(language: &Language, id: ClauseId, pattern: String) -> String {
    language
        .clause(id)
        .map_or(pattern, |entry| entry.signature().to_string())
}
