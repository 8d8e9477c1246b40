use std::rc::Rc;

use crate::declarator::DeclaratorForm;
use crate::node::Node;
use crate::unary::{UnaryLink, UnaryType};

/// Shape shared by `typedef`, `typealias-target`, `typealias-alias` and
/// `struct-or-variant-declaration`: a list of declaration specifiers paired
/// with the type declarators they apply to.
#[derive(Debug, Clone, Default)]
pub struct DeclarationGroup {
    pub declaration_specifiers: Vec<Rc<Node>>,
    pub type_declarators: Vec<Rc<Node>>,
}

/// Shape shared by `event`/`stream`/`trace` (a flat declaration list) and by
/// `struct`/`variant` (a declaration list of `struct-or-variant-declaration`
/// nodes specifically, though nothing at this layer enforces that narrowing
/// beyond what the validator's local rules check).
#[derive(Debug, Clone, Default)]
pub struct DeclarationList {
    pub declarations: Vec<Rc<Node>>,
}

/// Shape shared by `floating-point`, `integer` and `string` type nodes: an
/// ordered list of the `ctf-expression`s that configure them.
#[derive(Debug, Clone, Default)]
pub struct TypeBody {
    pub expressions: Vec<Rc<Node>>,
}

/// The union half of the tagged-union AST node. One variant per `NodeKind`,
/// carrying exactly the owned child sequences/fields the data model (section
/// 3) assigns that kind. `Unknown` carries nothing: an unrecognized tag's
/// substructure is, by construction, not interpretable.
#[derive(Debug, Clone, Default)]
pub enum Payload {
    #[default]
    Empty,
    Root {
        typedefs: Vec<Rc<Node>>,
        type_aliases: Vec<Rc<Node>>,
        declaration_specifiers: Vec<Rc<Node>>,
        traces: Vec<Rc<Node>>,
        streams: Vec<Rc<Node>>,
        events: Vec<Rc<Node>>,
    },
    Block(DeclarationList),
    CtfExpression {
        left: Vec<Rc<Node>>,
        right: Vec<Rc<Node>>,
    },
    UnaryExpression {
        ty: UnaryType,
        link: UnaryLink,
        text: String,
        /// The bracketed subscript of a `sbrac` (`a[expr]`) unary expression.
        /// The only slot through which one `unary-expression` can own
        /// another; every other unary form is a leaf.
        index: Option<Rc<Node>>,
    },
    Typedef(DeclarationGroup),
    TypealiasTarget(DeclarationGroup),
    TypealiasAlias(DeclarationGroup),
    Typealias {
        target: Rc<Node>,
        alias: Rc<Node>,
    },
    TypeSpecifier {
        name: String,
    },
    Pointer,
    TypeDeclarator {
        pointers: Vec<Rc<Node>>,
        form: DeclaratorForm,
        inner: Option<Rc<Node>>,
        length: Option<Rc<Node>>,
        bitfield_length: Option<Rc<Node>>,
    },
    FloatingPoint(TypeBody),
    Integer(TypeBody),
    Str(TypeBody),
    Enumerator {
        values: Vec<Rc<Node>>,
    },
    Enum {
        container_type: Option<Rc<Node>>,
        enumerators: Vec<Rc<Node>>,
    },
    StructOrVariant(DeclarationList),
    StructOrVariantDeclaration(DeclarationGroup),
    Unknown,
}

impl Payload {
    /// Every node this payload owns, in the declaration order section 5
    /// requires the walk to preserve. Used by the parent-link pass, which
    /// treats all children uniformly; the validator's local rules match on
    /// the payload directly instead, since they care which sequence a child
    /// came from.
    pub fn children(&self) -> Vec<Rc<Node>> {
        match self {
            Payload::Empty | Payload::Pointer | Payload::TypeSpecifier { .. } | Payload::Unknown => {
                Vec::new()
            }
            Payload::Root {
                typedefs,
                type_aliases,
                declaration_specifiers,
                traces,
                streams,
                events,
            } => typedefs
                .iter()
                .chain(type_aliases)
                .chain(declaration_specifiers)
                .chain(traces)
                .chain(streams)
                .chain(events)
                .cloned()
                .collect(),
            Payload::Block(list) | Payload::StructOrVariant(list) => list.declarations.clone(),
            Payload::CtfExpression { left, right } => {
                left.iter().chain(right).cloned().collect()
            }
            Payload::UnaryExpression { index, .. } => index.iter().cloned().collect(),
            Payload::Typedef(group)
            | Payload::TypealiasTarget(group)
            | Payload::TypealiasAlias(group)
            | Payload::StructOrVariantDeclaration(group) => group
                .declaration_specifiers
                .iter()
                .chain(&group.type_declarators)
                .cloned()
                .collect(),
            Payload::Typealias { target, alias } => vec![target.clone(), alias.clone()],
            Payload::TypeDeclarator {
                pointers,
                inner,
                length,
                bitfield_length,
                ..
            } => pointers
                .iter()
                .cloned()
                .chain(inner.clone())
                .chain(length.clone())
                .chain(bitfield_length.clone())
                .collect(),
            Payload::FloatingPoint(body) | Payload::Integer(body) | Payload::Str(body) => {
                body.expressions.clone()
            }
            Payload::Enumerator { values } => values.clone(),
            Payload::Enum {
                container_type,
                enumerators,
            } => container_type
                .iter()
                .cloned()
                .chain(enumerators.iter().cloned())
                .collect(),
        }
    }
}
