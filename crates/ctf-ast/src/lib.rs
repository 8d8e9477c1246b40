//! Metadata AST node definitions and the parent-link pass.
//!
//! The node/payload shapes mirror a tagged union: one `NodeKind` per
//! construct, one matching `Payload` variant carrying its owned children.
//! Ownership is strictly top-down (`Rc`); `Node::parent` is a non-owning
//! `Weak` back-reference that only the parent-link pass (`linker`) is
//! allowed to write.

pub mod builder;
pub mod declarator;
pub mod kind;
pub mod linker;
pub mod node;
pub mod payload;
pub mod unary;

pub use declarator::DeclaratorForm;
pub use kind::NodeKind;
pub use linker::link_parents;
pub use node::Node;
pub use payload::{DeclarationGroup, DeclarationList, Payload, TypeBody};
pub use unary::{UnaryLink, UnaryType};
