use std::rc::Rc;

use crate::node::Node;

/// Install a `parent` back-reference into every node reachable from `root`.
///
/// Total, idempotent and destructive: it visits every node regardless of
/// whether the tree is otherwise well-formed (it never consults
/// `AllowedParents`, since that table belongs to the validator, not to this
/// pass), overwrites whatever `parent` previously held, and produces the
/// same result no matter how many times it is re-run over the same tree
/// shape. The root itself is never given a parent.
pub fn link_parents(root: &Rc<Node>) {
    root.clear_parent();
    link_children(root);
}

fn link_children(node: &Rc<Node>) {
    for child in node.children() {
        child.set_parent(node);
        link_children(&child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::NodeKind;
    use crate::payload::Payload;
    use ctf_common::Span;

    fn leaf(kind: NodeKind) -> Rc<Node> {
        Node::new(kind, Span::point(0), Payload::Empty)
    }

    #[test]
    fn links_direct_and_nested_children() {
        let grandchild = leaf(NodeKind::UnaryExpression);
        let child = Node::new(
            NodeKind::CtfExpression,
            Span::point(0),
            Payload::CtfExpression {
                left: vec![grandchild.clone()],
                right: vec![],
            },
        );
        let root = Node::new(
            NodeKind::Trace,
            Span::point(0),
            Payload::Block(crate::payload::DeclarationList {
                declarations: vec![child.clone()],
            }),
        );

        link_parents(&root);

        assert!(root.parent().is_none());
        assert_eq!(child.parent().unwrap().id, root.id);
        assert_eq!(grandchild.parent().unwrap().id, child.id);
    }

    #[test]
    fn relinking_is_idempotent() {
        let child = leaf(NodeKind::Event);
        let root = Node::new(
            NodeKind::Root,
            Span::point(0),
            Payload::Root {
                typedefs: vec![],
                type_aliases: vec![],
                declaration_specifiers: vec![],
                traces: vec![],
                streams: vec![],
                events: vec![child.clone()],
            },
        );

        link_parents(&root);
        let first = child.parent().unwrap().id;
        link_parents(&root);
        let second = child.parent().unwrap().id;

        assert_eq!(first, second);
    }

    #[test]
    fn relinking_overwrites_a_stale_parent() {
        let child = leaf(NodeKind::Event);
        let old_root = Node::new(
            NodeKind::Root,
            Span::point(0),
            Payload::Root {
                typedefs: vec![],
                type_aliases: vec![],
                declaration_specifiers: vec![],
                traces: vec![],
                streams: vec![],
                events: vec![child.clone()],
            },
        );
        link_parents(&old_root);
        assert_eq!(child.parent().unwrap().id, old_root.id);

        let new_root = Node::new(
            NodeKind::Root,
            Span::point(0),
            Payload::Root {
                typedefs: vec![],
                type_aliases: vec![],
                declaration_specifiers: vec![],
                traces: vec![],
                streams: vec![],
                events: vec![child.clone()],
            },
        );
        link_parents(&new_root);
        assert_eq!(child.parent().unwrap().id, new_root.id);
    }
}
