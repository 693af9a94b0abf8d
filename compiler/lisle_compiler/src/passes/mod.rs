//! The standard passes, in pipeline order.

use lisle_ir::Tree;
use lisle_nanopass::PassDefinition;

/// Every `if` gets an else branch.
pub fn remove_one_armed_if() -> PassDefinition {
    PassDefinition::new("remove-one-armed-if")
        .remove_clause("('if ε ε)")
        .rewrite("('if ε ε)", append_nil)
}

/// `let` takes exactly one body expression.
pub fn explicit_do_in_let() -> PassDefinition {
    PassDefinition::new("explicit-do-in-let")
        .add_clause("('let ([s ε]+) ε)")
        .remove_clause("('let ([s ε]+) ε+)")
        .rewrite("('let ([s ε]+) ε+)", explicit_do)
}

/// `fn` takes exactly one body expression.
pub fn explicit_do_in_fn() -> PassDefinition {
    PassDefinition::new("explicit-do-in-fn")
        .add_clause("('fn ([s*]) ε)")
        .remove_clause("('fn ([s*]) ε+)")
        .rewrite("('fn ([s*]) ε+)", explicit_do)
}

pub fn standard_passes() -> Vec<PassDefinition> {
    vec![
        remove_one_armed_if(),
        explicit_do_in_let(),
        explicit_do_in_fn(),
    ]
}

/// `(if test then)` → `(if test then nil)`
fn append_nil(tree: Tree) -> Tree {
    match tree {
        Tree::List(mut items) => {
            items.push(Tree::symbol("nil"));
            Tree::List(items)
        }
        tree => tree,
    }
}

/// `(head header body…)` → `(head header (do body…))` for two or more body
/// forms. A single body form is left as is.
fn explicit_do(tree: Tree) -> Tree {
    match tree {
        Tree::List(mut items) if items.len() > 3 => {
            let body = items.split_off(2);
            items.push(Tree::list(std::iter::once(Tree::symbol("do")).chain(body)));
            Tree::List(items)
        }
        tree => tree,
    }
}

#[cfg(test)]
mod tests;
