#![allow(clippy::unwrap_used)]

use lisle_ir::test_helpers::read;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::reader::read_pattern;
use crate::terminal::Terminal;

/// Atoms only, so `ε` means "variable or constant" in these tests.
fn atoms() -> Language {
    Language::new("atoms")
        .with_terminal("s", Terminal::Variable)
        .with_terminal("c", Terminal::Constant)
        .with_terminal("d", Terminal::Datum)
        .with_clause("s")
        .unwrap()
        .with_clause("c")
        .unwrap()
}

fn matches(pattern: &str, source: &str) -> bool {
    read_pattern(pattern)
        .unwrap()
        .matches(&read(source).unwrap(), &atoms())
}

// === Atoms ===

#[test]
fn literal_matches_exact_symbol() {
    assert!(matches("'nil", "nil"));
    assert!(!matches("'nil", "null"));
    assert!(!matches("'nil", "\"nil\""));
}

#[test]
fn terminal_delegates_to_registry() {
    assert!(matches("s", "x"));
    assert!(!matches("s", "1"));
    assert!(matches("c", "1.5"));
    assert!(matches("c", "false"));
    assert!(matches("d", "(a (b))"));
}

#[test]
fn unregistered_terminal_never_matches() {
    assert!(!matches("pr", "car"));
}

#[test]
fn list_clause_rejects_atoms() {
    assert!(!matches("(s*)", "x"));
    assert!(!matches("s", "(x)"));
}

#[test]
fn bare_group_never_matches() {
    let group = Clause::group(vec![Clause::terminal("s")]);
    assert!(!group.matches(&read("x").unwrap(), &atoms()));
    assert!(!group.matches(&read("(x)").unwrap(), &atoms()));
}

// === Sequences ===

#[test]
fn list_must_be_consumed_entirely() {
    assert!(matches("('if ε ε)", "(if a 1)"));
    assert!(!matches("('if ε ε)", "(if a 1 b)"));
    assert!(!matches("('if ε ε)", "(if a)"));
}

#[test]
fn one_or_more_needs_a_capture() {
    assert!(matches("('do ε+)", "(do a b c)"));
    assert!(!matches("('do ε+)", "(do)"));
}

#[test]
fn zero_or_more_accepts_empty_remainder() {
    assert!(matches("('f s*)", "(f)"));
    assert!(matches("('f s*)", "(f a b)"));
}

#[test]
fn quantified_clause_is_greedy_without_backtracking() {
    // `s*` takes both symbols and never gives one back to the trailing `s`.
    assert!(!matches("(s* s)", "(a b)"));
    assert!(matches("(s* c)", "(a b 1)"));
}

#[test]
fn nested_lists_match_recursively() {
    assert!(matches("(('f s) c)", "((f x) 1)"));
    assert!(!matches("(('f s) c)", "((f 1) 1)"));
}

// === Groups ===

#[test]
fn let_bindings_match_in_pairs() {
    // `(+ x y)` is not an atom, so the atom-only language rejects it.
    assert!(!matches("('let ([s ε]+) ε+)", "(let (x 1 y 2) (+ x y))"));
    let lang = atoms().with_clause("(ε+)").unwrap();
    let clause = read_pattern("('let ([s ε]+) ε+)").unwrap();
    assert!(clause.matches(&read("(let (x 1 y 2) (+ x y))").unwrap(), &lang));
    assert!(!clause.matches(&read("(let (x) (+ x))").unwrap(), &lang));
}

#[test]
fn group_chunk_must_match_at_every_position() {
    // The second chunk `(2 y)` fails at its first position.
    assert!(!matches("([s c]+)", "(x 1 2 y)"));
    assert!(matches("([s c]+)", "(x 1 y 2)"));
}

#[test]
fn failing_chunk_ends_the_scan() {
    assert!(matches("([s c]* c)", "(x 1 2)"));
    assert!(!matches("([s c]* c)", "(x 1 y)"));
}

#[test]
fn group_one_takes_a_single_chunk() {
    assert!(matches("([s c])", "(x 1)"));
    assert!(!matches("([s c])", "(x 1 y 2)"));
}

#[test]
fn zero_or_more_group_accepts_empty() {
    assert!(matches("('f [s c]*)", "(f)"));
    assert!(!matches("('f [s c]+)", "(f)"));
}

#[test]
fn variable_width_group() {
    assert!(matches("('fn ([s*]) ε+)", "(fn (x y) x)"));
    assert!(matches("('fn ([s*]) ε+)", "(fn () 1)"));
    assert!(!matches("('fn ([s*]) ε+)", "(fn (x 1) x)"));
}

#[test]
fn zero_width_chunk_terminates() {
    assert!(matches("([s*]*)", "()"));
    assert!(matches("([s*]+ c)", "(1)"));
}

// === Captures ===

fn captured(pattern: &str, source: &str) -> Option<Vec<String>> {
    let clause = read_pattern(pattern).unwrap();
    let Tree::List(items) = read(source).unwrap() else {
        panic!("source must be a list");
    };
    clause
        .captures(&items, &atoms())
        .map(|captures| captures.iter().map(ToString::to_string).collect())
}

#[test]
fn captures_name_the_clause_for_each_element() {
    assert_eq!(
        captured("('let ([s ε]+) ε+)", "(let (x 1 y 2) x)"),
        Some(vec!["'let".to_string(), "([s ε]+)".to_string(), "ε+".to_string()])
    );
}

#[test]
fn captures_flatten_group_chunks() {
    assert_eq!(
        captured("([s ε]+)", "(x 1 y 2)"),
        Some(vec!["s", "ε", "s", "ε"].into_iter().map(String::from).collect())
    );
}

#[test]
fn captures_drop_a_failed_chunk() {
    assert_eq!(
        captured("([s c]* s)", "(x 1 y)"),
        Some(vec!["s", "c", "s"].into_iter().map(String::from).collect())
    );
}

#[test]
fn captures_of_empty_parameter_list() {
    assert_eq!(captured("([s*])", "()"), Some(vec![]));
}

#[test]
fn captures_require_a_full_match() {
    assert_eq!(captured("(s c)", "(x y)"), None);
    assert_eq!(captured("(s)", "(x y)"), None);
    assert_eq!(captured("s", "(x)"), None);
}

// === Display ===

#[test]
fn display_renders_signature() {
    let clause = Clause::list(vec![
        Clause::literal("fn"),
        Clause::list(vec![Clause::group(vec![
            Clause::terminal("s").quantified(Quantifier::ZeroOrMore)
        ])]),
        Clause::terminal("ε").quantified(Quantifier::OneOrMore),
    ]);
    assert_eq!(clause.to_string(), "('fn ([s*]) ε+)");
}

#[test]
fn terminal_names_in_order() {
    let clause = read_pattern("('let ([s ε]+) c*)").unwrap();
    assert_eq!(clause.terminal_names(), vec!["s", "ε", "c"]);
}

// === Quantifier Laws ===

fn symbols(count: usize) -> Vec<Tree> {
    (0..count).map(|i| Tree::symbol(format!("x{i}"))).collect()
}

proptest! {
    #[test]
    fn zero_or_more_consumes_every_match(count in 0usize..16) {
        let clause = Clause::terminal("s").quantified(Quantifier::ZeroOrMore);
        let items = symbols(count);
        prop_assert_eq!(match_repeated(&clause, &items, &atoms()), Some(count));
    }

    #[test]
    fn one_or_more_on_empty_fails(quantified in any::<bool>()) {
        let clause = if quantified {
            Clause::terminal("s").quantified(Quantifier::OneOrMore)
        } else {
            Clause::group(vec![Clause::terminal("s")]).quantified(Quantifier::OneOrMore)
        };
        prop_assert!(match_sequence(std::slice::from_ref(&clause), &[], &atoms(), None).is_none());
    }

    #[test]
    fn zero_or_more_on_empty_succeeds(pattern in prop::sample::select(vec!["s*", "[s c]*", "(s)*"])) {
        let list = read_pattern(&format!("({pattern})")).unwrap();
        let ClauseKind::List(body) = list.kind else {
            unreachable!("pattern is a list");
        };
        prop_assert_eq!(match_sequence(&body, &[], &atoms(), None), Some(0));
    }

    #[test]
    fn pairs_match_iff_well_formed(pairs in 1usize..6, break_at in 0usize..12) {
        let mut items = Vec::new();
        for i in 0..pairs {
            items.push(Tree::symbol(format!("v{i}")));
            items.push(Tree::int(i64::try_from(i).unwrap()));
        }
        let broken = break_at < items.len();
        if broken {
            items[break_at] = if break_at % 2 == 0 { Tree::int(0) } else { Tree::List(vec![]) };
        }
        let clause = read_pattern("([s c]+)").unwrap();
        prop_assert_eq!(clause.matches(&Tree::List(items), &atoms()), !broken);
    }
}
