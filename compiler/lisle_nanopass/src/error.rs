//! Grammar construction and pipeline errors.

use thiserror::Error;

use crate::reader::PatternError;

/// A language or pass definition that cannot be built.
///
/// Every variant is raised while the pipeline is being assembled, never
/// while a tree is being rewritten.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}`\n{source}")]
    InvalidPattern {
        pattern: String,
        source: PatternError,
    },
    #[error("no clause `{signature}` in language `{language}`")]
    UnknownClause { signature: String, language: String },
    #[error("clause `{signature}` is already defined in language `{language}`")]
    DuplicateClause { signature: String, language: String },
    #[error("unknown terminal `{name}` in clause `{signature}`")]
    UnknownTerminal { name: String, signature: String },
    /// A top-level clause that is just `ε` would have to match itself first.
    #[error("clause `{signature}` in language `{language}` is left-recursive")]
    LeftRecursive { signature: String, language: String },
    #[error("pass `{pass}` defines more than one rewrite for clause `{signature}`")]
    DuplicateRewrite { pass: String, signature: String },
}

/// Any failure of the nanopass pipeline.
///
/// Trees are carried in rendered form so the error stays `Eq` and `Send`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NanopassError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("pass `{pass}`: tree does not belong to this pass's grammar: {tree}")]
    InputMismatch { pass: String, tree: String },
    #[error("pass `{pass}`: output does not belong to the final grammar: {tree}")]
    OutputMismatch { pass: String, tree: String },
}
