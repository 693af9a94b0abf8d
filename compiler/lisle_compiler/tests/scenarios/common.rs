//! Shared helpers for pipeline tests.

use lisle_compiler::Compiler;
use lisle_ir::test_helpers::read;
use lisle_ir::Tree;

pub fn compiler() -> Compiler {
    lisle_compiler::init_tracing();
    Compiler::new().unwrap()
}

pub fn tree(source: &str) -> Tree {
    read(source).unwrap()
}

/// Compile `source` and render the result.
pub fn compile(source: &str) -> String {
    compiler().compile(tree(source)).unwrap().to_string()
}

/// Every list in `tree` whose head is the symbol `head`, outermost first.
pub fn forms_headed<'t>(tree: &'t Tree, head: &str, found: &mut Vec<&'t [Tree]>) {
    if let Some(items) = tree.as_list() {
        if items.first().is_some_and(|first| first.is_symbol(head)) {
            found.push(items);
        }
        for item in items {
            forms_headed(item, head, found);
        }
    }
}
