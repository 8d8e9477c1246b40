//! The semantic-check pass (section 4.0): a single recursive dispatch over
//! `node.kind` that verifies each node's parent is a permitted container
//! and applies whatever local rule that kind carries, then recurses into
//! every owned child in declaration order.

use std::rc::Rc;

use ctf_ast::{Node, NodeKind};

use crate::error::ValidationError;
use crate::fail;
use crate::rules;
use crate::sink::DiagnosticSink;

/// Runs the semantic-check pass over `root` and everything beneath it.
/// `root` itself is exempt from the `AllowedParents` check -- it is the one
/// node with no structural container.
pub fn check_tree(root: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    check_root(root, sink)
}

fn check_root(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    if let NodeKind::Unknown(tag) = node.kind {
        return fail(
            sink,
            ValidationError::invalid_argument(format!(
                "root(node) carries an unrecognized node kind tag {tag}"
            )),
        );
    }
    if node.kind != NodeKind::Root {
        return fail(
            sink,
            ValidationError::incoherent_structure(format!(
                "{}(node): validation must start from a root node",
                node.kind
            )),
        );
    }
    for child in node.children() {
        check(&child, sink)?;
    }
    Ok(())
}

/// Dispatches on `node.kind`, applying the `AllowedParents` check and any
/// node-specific local rule, then recurses into `node`'s children.
fn check(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    if let NodeKind::Unknown(tag) = node.kind {
        return fail(
            sink,
            ValidationError::invalid_argument(format!(
                "node carries an unrecognized node kind tag {tag}"
            )),
        );
    }

    match node.kind {
        NodeKind::UnaryExpression => rules::unary::check(node, sink)?,
        NodeKind::TypeDeclarator => {
            check_allowed_parent(node, allowed_parents(node.kind), false, sink)?;
            rules::declarator::check(node, sink)?;
        }
        NodeKind::Enumerator => {
            check_allowed_parent(node, allowed_parents(node.kind), false, sink)?;
            rules::enumerator::check(node, sink)?;
        }
        NodeKind::Root => check_nested_root(node, sink)?,
        kind => {
            let overrides_unary_parent = matches!(
                kind,
                NodeKind::FloatingPoint | NodeKind::String | NodeKind::Enum | NodeKind::Struct | NodeKind::Variant
            );
            check_allowed_parent(node, allowed_parents(kind), overrides_unary_parent, sink)?;
        }
    }

    for child in node.children() {
        check(&child, sink)?;
    }
    Ok(())
}

fn check_nested_root(node: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    fail(
        sink,
        ValidationError::incoherent_structure(format!(
            "root(node) found nested under {}(parent); root may only be the tree's entry point",
            node.parent()
                .map(|p| p.kind.to_string())
                .unwrap_or_else(|| "none".to_string())
        )),
    )
}

fn check_allowed_parent(
    node: &Rc<Node>,
    allowed: &[NodeKind],
    treat_unary_parent_as_forbidden: bool,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ValidationError> {
    let parent = node
        .parent()
        .expect("non-root node always has a parent post parent-link");
    let parent_kind = parent.kind;

    if allowed.contains(&parent_kind) {
        return Ok(());
    }
    if treat_unary_parent_as_forbidden && parent_kind == NodeKind::UnaryExpression {
        return fail(
            sink,
            ValidationError::structure_not_allowed(format!(
                "{}(node): cannot appear under unary-expression(parent)",
                node.kind
            )),
        );
    }
    fail(
        sink,
        ValidationError::incoherent_structure(format!(
            "{}(node): {}(parent) is not a recognized container for it",
            node.kind, parent_kind
        )),
    )
}

fn allowed_parents(kind: NodeKind) -> &'static [NodeKind] {
    use NodeKind::*;
    match kind {
        Event | Stream | Trace => &[Root],
        CtfExpression => &[Root, Event, Stream, Trace, FloatingPoint, Integer, String],
        Typedef | Typealias => &[Root, Event, Stream, Trace, Variant, Struct],
        TypealiasTarget | TypealiasAlias => &[Typealias],
        TypeSpecifier => &[
            CtfExpression,
            TypeDeclarator,
            Typedef,
            TypealiasTarget,
            TypealiasAlias,
            Enum,
            StructOrVariantDeclaration,
        ],
        Pointer => &[TypeDeclarator],
        TypeDeclarator => &[
            TypeDeclarator,
            Typedef,
            TypealiasTarget,
            TypealiasAlias,
            StructOrVariantDeclaration,
        ],
        FloatingPoint => &[CtfExpression, Typedef, TypealiasTarget, TypealiasAlias, StructOrVariantDeclaration],
        Integer => &[
            CtfExpression,
            UnaryExpression,
            Typedef,
            TypealiasTarget,
            TypealiasAlias,
            TypeDeclarator,
            Enum,
            StructOrVariantDeclaration,
        ],
        String => &[CtfExpression, Typedef, TypealiasTarget, TypealiasAlias, StructOrVariantDeclaration],
        Enumerator => &[Enum],
        Enum => &[
            Root,
            Event,
            Stream,
            Trace,
            CtfExpression,
            Typedef,
            TypealiasTarget,
            TypealiasAlias,
            TypeDeclarator,
            StructOrVariantDeclaration,
        ],
        Struct | Variant => &[
            Root,
            Event,
            Stream,
            Trace,
            CtfExpression,
            Typedef,
            TypealiasTarget,
            TypealiasAlias,
            StructOrVariantDeclaration,
        ],
        StructOrVariantDeclaration => &[Struct, Variant],
        Root | UnaryExpression | Unknown(_) => {
            unreachable!("{kind} is dispatched before reaching the generic AllowedParents table")
        }
    }
}
