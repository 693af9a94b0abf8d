//! Programs the base language does not accept.

use lisle_nanopass::NanopassError;
use pretty_assertions::assert_eq;

use crate::common::{compiler, tree};

#[test]
fn empty_list_is_rejected_by_first_pass() {
    let err = compiler().compile(tree("()")).unwrap_err();
    assert_eq!(
        err,
        NanopassError::InputMismatch {
            pass: "remove-one-armed-if".to_string(),
            tree: "()".to_string(),
        }
    );
}

#[test]
fn nested_empty_list_is_rejected() {
    let err = compiler().compile(tree("(if x (f ()))")).unwrap_err();
    assert!(matches!(err, NanopassError::InputMismatch { .. }));
}

#[test]
fn error_message_names_pass_and_tree() {
    let err = compiler().compile(tree("(g ())")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "pass `remove-one-armed-if`: tree does not belong to this pass's grammar: (g ())"
    );
}
