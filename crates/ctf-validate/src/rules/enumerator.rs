//! Local rule for `enumerator` nodes (section 4.4).

use std::rc::Rc;

use ctf_ast::unary::UnaryLink;
use ctf_ast::{Node, Payload};

use crate::error::ValidationError;
use crate::fail;
use crate::sink::DiagnosticSink;

/// Checks the shape of the `values` sequence. Does not recurse into the
/// elements; the caller walks them afterward through the normal dispatch,
/// which applies `rules::unary` to each in turn.
pub fn check(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    let values = match &node.payload {
        Payload::Enumerator { values } => values,
        _ => unreachable!("rules::enumerator::check called on a non-enumerator node"),
    };

    for (index, value) in values.iter().enumerate() {
        let (ty, link) = match &value.payload {
            Payload::UnaryExpression { ty, link, .. } => (*ty, *link),
            _ => {
                return fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "enumerator(node): value list elements must be unary expressions",
                    ),
                );
            }
        };

        let expected_link = match index {
            0 => UnaryLink::Unknown,
            1 => UnaryLink::DotDotDot,
            _ => {
                return fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "enumerator(node): value list takes at most two elements",
                    ),
                )
            }
        };

        if !ty.is_numeric_const() {
            return fail(
                sink,
                ValidationError::structure_not_allowed(
                    "enumerator(node): value list elements must be numeric constants",
                ),
            );
        }
        if link != expected_link {
            return fail(
                sink,
                ValidationError::structure_not_allowed(format!(
                    "enumerator(node): value list element {index} must use the '{expected_link}' link"
                )),
            );
        }
    }

    Ok(())
}

