//! Lisle IR - the program tree shared by every rewriting stage.
//!
//! The nanopass engine (`lisle_nanopass`) matches and rewrites values of
//! [`Tree`]. An external reader produces the first tree and an external
//! backend consumes the last one; in between, every pass builds a fresh tree
//! rather than mutating its input.
//!
//! With the `test-helpers` feature, [`test_helpers::read`] parses
//! s-expression text into a [`Tree`] so tests can state inputs and expected
//! outputs as source text.

mod tree;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use tree::{Number, Tree};
