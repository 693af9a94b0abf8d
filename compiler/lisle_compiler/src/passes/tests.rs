#![allow(clippy::unwrap_used)]

use lisle_ir::test_helpers::read;
use pretty_assertions::assert_eq;

use super::*;

fn tree(source: &str) -> Tree {
    read(source).unwrap()
}

#[test]
fn append_nil_adds_else_branch() {
    assert_eq!(append_nil(tree("(if true 1)")), tree("(if true 1 nil)"));
}

#[test]
fn explicit_do_wraps_multiple_bodies() {
    assert_eq!(
        explicit_do(tree("(fn (x y) (+ x y) (+ x x))")),
        tree("(fn (x y) (do (+ x y) (+ x x)))")
    );
    assert_eq!(
        explicit_do(tree("(let (x 1) (f x) (g x) x)")),
        tree("(let (x 1) (do (f x) (g x) x))")
    );
}

#[test]
fn explicit_do_keeps_single_body() {
    let single = tree("(fn (x) x)");
    assert_eq!(explicit_do(single.clone()), single);
}

#[test]
fn pipeline_order() {
    let names: Vec<_> = standard_passes()
        .iter()
        .map(|pass| pass.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["remove-one-armed-if", "explicit-do-in-let", "explicit-do-in-fn"]
    );
}
