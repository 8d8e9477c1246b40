use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ctf_common::{NodeId, Span};

use crate::kind::NodeKind;
use crate::payload::Payload;

/// One node of the metadata AST.
///
/// Ownership runs strictly top-down: a node's children live in its
/// `payload`, held by `Rc`, and the `parent` field is a non-owning `Weak`
/// back-reference installed by the parent-link pass (`linker.rs`). Nothing
/// outside that pass is allowed to set it, which is why the setter is
/// crate-private.
#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub span: Span,
    pub payload: Payload,
    parent: RefCell<Weak<Node>>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span, payload: Payload) -> Rc<Node> {
        Rc::new(Node {
            id: NodeId::fresh(),
            kind,
            span,
            payload,
            parent: RefCell::new(Weak::new()),
        })
    }

    /// The node's structural parent, or `None` for the root or for a node
    /// the linker has not yet visited.
    pub fn parent(&self) -> Option<Rc<Node>> {
        self.parent.borrow().upgrade()
    }

    /// Install this node's parent back-reference. Crate-private: only the
    /// linker (`linker.rs`) is allowed to call this, so that parent links
    /// can only ever be in the state the most recent parent-link pass left
    /// them in.
    pub(crate) fn set_parent(&self, parent: &Rc<Node>) {
        *self.parent.borrow_mut() = Rc::downgrade(parent);
    }

    /// Clear a stale parent link. Used only by the root, which the linker
    /// never assigns a parent to but which may be re-linked after having
    /// been someone else's child in an earlier, discarded tree.
    pub(crate) fn clear_parent(&self) {
        *self.parent.borrow_mut() = Weak::new();
    }

    /// Every node this node owns directly, in declaration order.
    pub fn children(&self) -> Vec<Rc<Node>> {
        self.payload.children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::NodeKind;

    #[test]
    fn fresh_node_has_no_parent() {
        let n = Node::new(NodeKind::Root, Span::point(0), Payload::Empty);
        assert!(n.parent().is_none());
    }

    #[test]
    fn set_parent_is_visible_through_upgrade() {
        let parent = Node::new(NodeKind::Root, Span::point(0), Payload::Empty);
        let child = Node::new(NodeKind::Event, Span::point(0), Payload::Empty);
        child.set_parent(&parent);
        let got = child.parent().expect("parent was just set");
        assert_eq!(got.id, parent.id);
    }
}
