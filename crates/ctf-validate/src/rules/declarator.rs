//! Local rule for `type-declarator` nodes (section 4.3).

use std::rc::Rc;

use ctf_ast::{DeclaratorForm, Node, NodeKind, Payload};

use crate::error::ValidationError;
use crate::fail;
use crate::sink::DiagnosticSink;

/// Applies the nesting and `form` checks. Does not recurse; the caller
/// walks `pointers`/`inner`/`length`/`bitfield_length` afterward the same
/// way it walks every other node's children.
pub fn check(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    let (pointers, form) = match &node.payload {
        Payload::TypeDeclarator { pointers, form, .. } => (pointers, *form),
        _ => unreachable!("rules::declarator::check called on a non-type-declarator node"),
    };

    if let Some(parent) = node.parent() {
        if parent.kind == NodeKind::TypeDeclarator && !pointers.is_empty() {
            return fail(
                sink,
                ValidationError::structure_not_allowed(
                    "type-declarator(node): a nested type-declarator cannot carry its own pointers",
                ),
            );
        }
    }

    match form {
        DeclaratorForm::Id | DeclaratorForm::Nested => Ok(()),
        DeclaratorForm::Unrecognized(tag) => fail(
            sink,
            ValidationError::invalid_argument(format!(
                "type-declarator(node) carries an unrecognized form tag {tag}"
            )),
        ),
    }
}
