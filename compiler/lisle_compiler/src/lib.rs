//! The Lisle rewriter: base language plus the standard pass pipeline.
//!
//! ```text
//! L0 ─ remove-one-armed-if → L1 ─ explicit-do-in-let → L2 ─ explicit-do-in-fn → L3
//! ```
//!
//! Each language is named after the pass that produced it, except the base
//! language [`BASE_LANGUAGE`].

use std::sync::{Arc, Once};

use lisle_ir::Tree;
use lisle_nanopass::{Language, NanopassError, Pass, PassManager};

mod grammar;
mod passes;

pub use grammar::{base_language, BASE_LANGUAGE, TERMINALS};
pub use passes::{
    explicit_do_in_fn, explicit_do_in_let, remove_one_armed_if, standard_passes,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once, and
/// when another global subscriber is already installed, which is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            // The host application's own subscriber stays in charge.
            if let Err(err) = installed {
                tracing::debug!(%err, "keeping the existing tracing subscriber");
            }
        }
    });
}

/// The standard pipeline, ready to run.
#[derive(Debug)]
pub struct Compiler {
    manager: PassManager,
}

impl Compiler {
    pub fn new() -> Result<Self, NanopassError> {
        let mut manager = PassManager::new(base_language()?);
        for definition in standard_passes() {
            manager.add_pass(definition)?;
        }
        Ok(Compiler { manager })
    }

    /// Rewrite a base-language program into the final language.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn compile(&self, tree: Tree) -> Result<Tree, NanopassError> {
        self.manager.run_passes(tree)
    }

    pub fn pass_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.manager.passes().iter().map(Pass::name)
    }

    #[inline]
    pub fn passes(&self) -> &[Pass] {
        self.manager.passes()
    }

    #[inline]
    pub fn base_language(&self) -> &Arc<Language> {
        self.manager.base_language()
    }

    /// The language every compiled program belongs to.
    #[inline]
    pub fn final_language(&self) -> &Arc<Language> {
        self.manager.current_language()
    }
}
