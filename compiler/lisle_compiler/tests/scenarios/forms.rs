//! How each base-language form comes out of the pipeline.

use pretty_assertions::assert_eq;

use crate::common::compile;

// === if ===

#[test]
fn one_armed_if_gets_nil() {
    assert_eq!(compile("(if true 1)"), "(if true 1 nil)");
}

#[test]
fn two_armed_if_is_unchanged() {
    assert_eq!(compile("(if c 1 2)"), "(if c 1 2)");
}

#[test]
fn nested_ifs_are_all_rewritten() {
    assert_eq!(
        compile("(if (if a b) (if c d) (if e f))"),
        "(if (if a b nil) (if c d nil) (if e f nil))"
    );
    assert_eq!(
        compile("(if a (if b (if c d)))"),
        "(if a (if b (if c d nil) nil) nil)"
    );
}

// === let ===

#[test]
fn let_with_several_bodies_gets_do() {
    assert_eq!(
        compile("(let (x 1 y 2) (f x) (+ x y))"),
        "(let (x 1 y 2) (do (f x) (+ x y)))"
    );
}

#[test]
fn let_with_one_body_is_unchanged() {
    assert_eq!(compile("(let (x 1) (+ x x))"), "(let (x 1) (+ x x))");
}

#[test]
fn let_bindings_are_rewritten_too() {
    assert_eq!(
        compile("(let (x (if a b)) x)"),
        "(let (x (if a b nil)) x)"
    );
    assert_eq!(
        compile("(let (x (if a b) y (let (z 1) z z)) y)"),
        "(let (x (if a b nil) y (let (z 1) (do z z))) y)"
    );
}

#[test]
fn binding_list_shaped_like_let_is_unchanged() {
    assert_eq!(
        compile("(let (let (x 1) y z) let)"),
        "(let (let (x 1) y z) let)"
    );
}

// === fn ===

#[test]
fn fn_with_several_bodies_gets_do() {
    assert_eq!(
        compile("(fn (x y) (+ x y) (+ x x))"),
        "(fn (x y) (do (+ x y) (+ x x)))"
    );
}

#[test]
fn fn_with_one_body_is_unchanged() {
    assert_eq!(compile("(fn (x) x)"), "(fn (x) x)");
}

#[test]
fn parameter_list_shaped_like_if_is_unchanged() {
    assert_eq!(compile("(fn (if x y) x)"), "(fn (if x y) x)");
    assert_eq!(
        compile("(fn (if x y) (if x y) x)"),
        "(fn (if x y) (do (if x y nil) x))"
    );
}

#[test]
fn fn_without_parameters() {
    assert_eq!(compile("(fn () (f) (g))"), "(fn () (do (f) (g)))");
}

// === Combined ===

#[test]
fn all_passes_apply_in_one_program() {
    assert_eq!(
        compile("(fn (x) (let (y (car x)) (if y 1) y) (if x x))"),
        "(fn (x) (do (let (y (car x)) (do (if y 1 nil) y)) (if x x nil)))"
    );
}

#[test]
fn quote_is_left_untouched() {
    assert_eq!(
        compile("(f (quote (if a b)) (if a b))"),
        "(f (quote (if a b)) (if a b nil))"
    );
}

#[test]
fn atoms_pass_through() {
    assert_eq!(compile("x"), "x");
    assert_eq!(compile("42"), "42");
    assert_eq!(compile("\"a \\\"b\\\"\""), "\"a \\\"b\\\"\"");
}

#[test]
fn logic_forms_recurse() {
    assert_eq!(
        compile("(and (or a (if b c)) (not (if d e)))"),
        "(and (or a (if b c nil)) (not (if d e nil)))"
    );
}
