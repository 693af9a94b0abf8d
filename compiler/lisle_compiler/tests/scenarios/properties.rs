//! Generated base-language programs.

use lisle_ir::Tree;
use proptest::prelude::*;

use crate::common::{compiler, forms_headed};

fn sym(name: &str) -> Tree {
    Tree::symbol(name)
}

fn headed(head: &str, rest: impl IntoIterator<Item = Tree>) -> Tree {
    Tree::list(std::iter::once(sym(head)).chain(rest))
}

fn arb_atom() -> impl Strategy<Value = Tree> {
    prop_oneof![
        prop::sample::select(vec!["x", "y", "z", "car", "+"]).prop_map(sym),
        (-5i64..5).prop_map(Tree::int),
        any::<bool>().prop_map(Tree::from),
    ]
}

/// Well-formed L0 programs.
fn arb_program() -> impl Strategy<Value = Tree> {
    arb_atom().prop_recursive(4, 48, 4, |inner| {
        let bodies = prop::collection::vec(inner.clone(), 1..4);
        let names = prop::collection::vec(
            prop::sample::select(vec!["a", "b", "c"]).prop_map(sym),
            0..3,
        );
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(t, c)| headed("if", [t, c])),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(t, c, a)| headed("if", [t, c, a])),
            (inner.clone(), bodies.clone()).prop_map(|(f, args)| {
                Tree::list(std::iter::once(f).chain(args))
            }),
            (prop::collection::vec(inner.clone(), 1..3), bodies.clone()).prop_map(
                |(values, body)| {
                    let bindings = values
                        .into_iter()
                        .enumerate()
                        .flat_map(|(i, value)| [sym(&format!("v{i}")), value]);
                    headed("let", std::iter::once(Tree::list(bindings)).chain(body))
                }
            ),
            (names, bodies).prop_map(|(params, body)| {
                headed("fn", std::iter::once(Tree::list(params)).chain(body))
            }),
            inner.prop_map(|datum| headed("quote", [datum])),
        ]
    })
}

/// The forms inside `quote` are data and keep their shape.
fn strip_quotes(tree: &Tree) -> Tree {
    match tree.as_list() {
        Some(items) if items.first().is_some_and(|head| head.is_symbol("quote")) => {
            sym("quoted")
        }
        Some(items) => Tree::list(items.iter().map(strip_quotes)),
        None => tree.clone(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_belongs_to_final_language(program in arb_program()) {
        let compiler = compiler();
        let output = compiler.compile(program).unwrap();
        prop_assert!(compiler.final_language().form_matches(&output));
    }

    #[test]
    fn no_one_armed_if_survives(program in arb_program()) {
        let output = strip_quotes(&compiler().compile(program).unwrap());
        let mut ifs = Vec::new();
        forms_headed(&output, "if", &mut ifs);
        for items in ifs {
            prop_assert_eq!(items.len(), 4);
        }
    }

    #[test]
    fn binding_forms_have_one_body(program in arb_program()) {
        let output = strip_quotes(&compiler().compile(program).unwrap());
        for head in ["let", "fn"] {
            let mut forms = Vec::new();
            forms_headed(&output, head, &mut forms);
            for items in forms {
                prop_assert_eq!(items.len(), 3);
            }
        }
    }

    #[test]
    fn removed_clause_never_matches_later(program in arb_program()) {
        let compiler = compiler();
        for pass in compiler.passes() {
            let signatures: Vec<_> = pass.target().signatures().collect();
            prop_assert!(!signatures.contains(&"('if ε ε)"));
        }
        let output = compiler.compile(program).unwrap();
        let entry = compiler.final_language().matching_clause(&output);
        prop_assert!(entry.is_some_and(|entry| entry.signature() != "('if ε ε)"));
    }
}
