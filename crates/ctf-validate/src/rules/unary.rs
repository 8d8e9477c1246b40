//! Local rules for `unary-expression` nodes (section 4.1).
//!
//! A unary expression's legality depends on two independent things: what
//! kind of node contains it and where in that container's sequence it sits
//! (the "parent rules"), and how its own `link` tag connects it to its
//! predecessor (the "link rules"). Both groups are checked; the first
//! failure, in parent-then-link order, is what the caller reports.

use std::rc::Rc;

use ctf_ast::unary::{UnaryLink, UnaryType};
use ctf_ast::{Node, NodeKind, Payload};

use crate::error::ValidationError;
use crate::fail;
use crate::sink::DiagnosticSink;

/// Which of a parent's owned sequences a unary expression was found in,
/// determined by locating the node among its parent's children. `Other`
/// covers every parent shape section 4.1 does not recognize at all -- such
/// a node is rejected by the parent rule before sequence position ever
/// matters.
enum Position {
    CtfLeft { index: usize },
    CtfRight { index: usize },
    EnumeratorValue { index: usize },
    /// A single-slot field (`type-declarator.length`/`.bitfield_length`,
    /// `enum.container_type`) -- trivially both first and last.
    Single,
    Other,
}

impl Position {
    fn is_first(&self) -> bool {
        match self {
            Position::CtfLeft { index } | Position::CtfRight { index } | Position::EnumeratorValue { index } => {
                *index == 0
            }
            Position::Single => true,
            Position::Other => false,
        }
    }
}

fn locate(node: &Node, parent: &Node) -> Position {
    match &parent.payload {
        Payload::CtfExpression { left, right } => {
            if let Some(index) = left.iter().position(|n| std::ptr::eq(n.as_ref(), node)) {
                Position::CtfLeft { index }
            } else if let Some(index) = right.iter().position(|n| std::ptr::eq(n.as_ref(), node)) {
                Position::CtfRight { index }
            } else {
                Position::Other
            }
        }
        Payload::Enumerator { values } => {
            match values.iter().position(|n| std::ptr::eq(n.as_ref(), node)) {
                Some(index) => Position::EnumeratorValue { index },
                None => Position::Other,
            }
        }
        Payload::TypeDeclarator { length, bitfield_length, .. } => {
            let is_length = length.as_deref().is_some_and(|n| std::ptr::eq(n, node));
            let is_bitfield = bitfield_length
                .as_deref()
                .is_some_and(|n| std::ptr::eq(n, node));
            if is_length || is_bitfield {
                Position::Single
            } else {
                Position::Other
            }
        }
        Payload::Enum { container_type, .. } => {
            if container_type.as_deref().is_some_and(|n| std::ptr::eq(n, node)) {
                Position::Single
            } else {
                Position::Other
            }
        }
        _ => Position::Other,
    }
}

pub fn check(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    let (ty, link) = match &node.payload {
        Payload::UnaryExpression { ty, link, .. } => (*ty, *link),
        _ => unreachable!("rules::unary::check called on a non-unary-expression node"),
    };

    if let UnaryLink::Unrecognized(tag) = link {
        return fail(
            sink,
            ValidationError::invalid_argument(format!(
                "unary-expression(node) carries an unrecognized link tag {tag}"
            )),
        );
    }

    let parent = node
        .parent()
        .expect("unary-expression always has a parent post parent-link");
    let parent_kind = parent.kind;
    let position = locate(node, &parent);

    check_parent_rule(ty, parent_kind, &position, sink)?;
    check_link_rule(ty, link, parent_kind, &position, sink)?;
    Ok(())
}

fn check_parent_rule(
    ty: UnaryType,
    parent_kind: NodeKind,
    position: &Position,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ValidationError> {
    match parent_kind {
        NodeKind::CtfExpression => match position {
            Position::CtfLeft { .. } if ty != UnaryType::String => fail(
                sink,
                ValidationError::structure_not_allowed(
                    "unary-expression(node): ctf-expression(parent) left-hand side must be a string",
                ),
            ),
            Position::CtfLeft { .. } | Position::CtfRight { .. } => Ok(()),
            _ => fail(
                sink,
                ValidationError::incoherent_structure(
                    "unary-expression(node): not found in either sequence of its ctf-expression(parent)",
                ),
            ),
        },
        NodeKind::TypeDeclarator | NodeKind::Enum => {
            if ty.is_numeric_const() {
                Ok(())
            } else {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(format!(
                        "unary-expression(node): {parent_kind}(parent) requires a numeric constant"
                    )),
                )
            }
        }
        NodeKind::Enumerator => Ok(()),
        NodeKind::UnaryExpression => fail(
            sink,
            ValidationError::structure_not_allowed(
                "unary-expression(node): nested unary expressions are not allowed under unary-expression(parent)",
            ),
        ),
        _ => fail(
            sink,
            ValidationError::incoherent_structure(format!(
                "unary-expression(node): {parent_kind}(parent) cannot contain a unary expression"
            )),
        ),
    }
}

fn check_link_rule(
    ty: UnaryType,
    link: UnaryLink,
    parent_kind: NodeKind,
    position: &Position,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ValidationError> {
    match link {
        UnaryLink::Unknown => {
            if position.is_first() {
                Ok(())
            } else {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): unlinked expression must be first in its sequence",
                    ),
                )
            }
        }
        UnaryLink::Dot | UnaryLink::Arrow => {
            if parent_kind != NodeKind::CtfExpression {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): '.'/'->' links are only valid under a ctf-expression",
                    ),
                )
            } else if ty != UnaryType::String {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): '.'/'->' links require a string expression",
                    ),
                )
            } else if position.is_first() {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): '.'/'->' links cannot start a sequence",
                    ),
                )
            } else {
                Ok(())
            }
        }
        UnaryLink::DotDotDot => {
            if parent_kind != NodeKind::Enumerator {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): '...' is only valid inside an enumerator value list",
                    ),
                )
            } else if position.is_first() {
                fail(
                    sink,
                    ValidationError::structure_not_allowed(
                        "unary-expression(node): '...' cannot be the first value in an enumerator",
                    ),
                )
            } else {
                Ok(())
            }
        }
        UnaryLink::Unrecognized(_) => unreachable!("handled before check_parent_rule"),
    }
}
