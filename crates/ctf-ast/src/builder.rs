//! Node-construction helpers.
//!
//! Stand in for the (out-of-scope) lexer/grammar parser: since this crate
//! never turns source text into a tree itself, trees are built directly
//! with these helpers, both by this crate's own `#[cfg(test)]` modules and
//! by the integration test suites of sibling crates, which can only reach
//! a dependency's public API.

use std::rc::Rc;

use ctf_common::Span;

use crate::declarator::DeclaratorForm;
use crate::kind::NodeKind;
use crate::node::Node;
use crate::payload::{DeclarationGroup, DeclarationList, Payload, TypeBody};
use crate::unary::{UnaryLink, UnaryType};

fn at(span: Span, kind: NodeKind, payload: Payload) -> Rc<Node> {
    Node::new(kind, span, payload)
}

pub fn root(
    typedefs: Vec<Rc<Node>>,
    type_aliases: Vec<Rc<Node>>,
    declaration_specifiers: Vec<Rc<Node>>,
    traces: Vec<Rc<Node>>,
    streams: Vec<Rc<Node>>,
    events: Vec<Rc<Node>>,
) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Root,
        Payload::Root {
            typedefs,
            type_aliases,
            declaration_specifiers,
            traces,
            streams,
            events,
        },
    )
}

fn block(kind: NodeKind, declarations: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        kind,
        Payload::Block(DeclarationList { declarations }),
    )
}

pub fn trace(declarations: Vec<Rc<Node>>) -> Rc<Node> {
    block(NodeKind::Trace, declarations)
}

pub fn stream(declarations: Vec<Rc<Node>>) -> Rc<Node> {
    block(NodeKind::Stream, declarations)
}

pub fn event(declarations: Vec<Rc<Node>>) -> Rc<Node> {
    block(NodeKind::Event, declarations)
}

pub fn ctf_expression(left: Vec<Rc<Node>>, right: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::CtfExpression,
        Payload::CtfExpression { left, right },
    )
}

pub fn unary(ty: UnaryType, link: UnaryLink, text: impl Into<String>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::UnaryExpression,
        Payload::UnaryExpression {
            ty,
            link,
            text: text.into(),
            index: None,
        },
    )
}

/// A `sbrac` (`name[index]`) unary expression. `index` is typically another
/// unary expression carrying the subscript's numeric constant.
pub fn unary_sbrac(link: UnaryLink, text: impl Into<String>, index: Rc<Node>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::UnaryExpression,
        Payload::UnaryExpression {
            ty: UnaryType::Sbrac,
            link,
            text: text.into(),
            index: Some(index),
        },
    )
}

pub fn unary_string(link: UnaryLink, text: impl Into<String>) -> Rc<Node> {
    unary(UnaryType::String, link, text)
}

pub fn unary_signed(link: UnaryLink, value: i64) -> Rc<Node> {
    unary(UnaryType::SignedConst, link, value.to_string())
}

pub fn unary_unsigned(link: UnaryLink, value: u64) -> Rc<Node> {
    unary(UnaryType::UnsignedConst, link, value.to_string())
}

fn declaration_group(
    kind: NodeKind,
    declaration_specifiers: Vec<Rc<Node>>,
    type_declarators: Vec<Rc<Node>>,
) -> Rc<Node> {
    let group = DeclarationGroup {
        declaration_specifiers,
        type_declarators,
    };
    let payload = match kind {
        NodeKind::Typedef => Payload::Typedef(group),
        NodeKind::TypealiasTarget => Payload::TypealiasTarget(group),
        NodeKind::TypealiasAlias => Payload::TypealiasAlias(group),
        NodeKind::StructOrVariantDeclaration => Payload::StructOrVariantDeclaration(group),
        _ => unreachable!("declaration_group called with non-declaration-group kind"),
    };
    at(Span::point(0), kind, payload)
}

pub fn typedef(declaration_specifiers: Vec<Rc<Node>>, type_declarators: Vec<Rc<Node>>) -> Rc<Node> {
    declaration_group(NodeKind::Typedef, declaration_specifiers, type_declarators)
}

pub fn typealias_target(
    declaration_specifiers: Vec<Rc<Node>>,
    type_declarators: Vec<Rc<Node>>,
) -> Rc<Node> {
    declaration_group(
        NodeKind::TypealiasTarget,
        declaration_specifiers,
        type_declarators,
    )
}

pub fn typealias_alias(
    declaration_specifiers: Vec<Rc<Node>>,
    type_declarators: Vec<Rc<Node>>,
) -> Rc<Node> {
    declaration_group(
        NodeKind::TypealiasAlias,
        declaration_specifiers,
        type_declarators,
    )
}

pub fn struct_or_variant_declaration(
    declaration_specifiers: Vec<Rc<Node>>,
    type_declarators: Vec<Rc<Node>>,
) -> Rc<Node> {
    declaration_group(
        NodeKind::StructOrVariantDeclaration,
        declaration_specifiers,
        type_declarators,
    )
}

pub fn typealias(target: Rc<Node>, alias: Rc<Node>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Typealias,
        Payload::Typealias { target, alias },
    )
}

pub fn type_specifier(name: impl Into<String>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::TypeSpecifier,
        Payload::TypeSpecifier { name: name.into() },
    )
}

pub fn pointer() -> Rc<Node> {
    at(Span::point(0), NodeKind::Pointer, Payload::Pointer)
}

pub fn type_declarator_id(pointers: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::TypeDeclarator,
        Payload::TypeDeclarator {
            pointers,
            form: DeclaratorForm::Id,
            inner: None,
            length: None,
            bitfield_length: None,
        },
    )
}

pub fn type_declarator_nested(
    pointers: Vec<Rc<Node>>,
    inner: Option<Rc<Node>>,
    length: Option<Rc<Node>>,
    bitfield_length: Option<Rc<Node>>,
) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::TypeDeclarator,
        Payload::TypeDeclarator {
            pointers,
            form: DeclaratorForm::Nested,
            inner,
            length,
            bitfield_length,
        },
    )
}

fn type_body(kind: NodeKind, expressions: Vec<Rc<Node>>) -> Rc<Node> {
    let body = TypeBody { expressions };
    let payload = match kind {
        NodeKind::FloatingPoint => Payload::FloatingPoint(body),
        NodeKind::Integer => Payload::Integer(body),
        NodeKind::String => Payload::Str(body),
        _ => unreachable!("type_body called with non-type-body kind"),
    };
    at(Span::point(0), kind, payload)
}

pub fn floating_point(expressions: Vec<Rc<Node>>) -> Rc<Node> {
    type_body(NodeKind::FloatingPoint, expressions)
}

pub fn integer(expressions: Vec<Rc<Node>>) -> Rc<Node> {
    type_body(NodeKind::Integer, expressions)
}

pub fn string_type(expressions: Vec<Rc<Node>>) -> Rc<Node> {
    type_body(NodeKind::String, expressions)
}

pub fn enumerator(values: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Enumerator,
        Payload::Enumerator { values },
    )
}

pub fn r#enum(container_type: Option<Rc<Node>>, enumerators: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Enum,
        Payload::Enum {
            container_type,
            enumerators,
        },
    )
}

pub fn r#struct(declarations: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Struct,
        Payload::StructOrVariant(DeclarationList { declarations }),
    )
}

pub fn variant(declarations: Vec<Rc<Node>>) -> Rc<Node> {
    at(
        Span::point(0),
        NodeKind::Variant,
        Payload::StructOrVariant(DeclarationList { declarations }),
    )
}

/// Build a node with an unrecognized `kind` tag, for exercising the
/// `invalid-argument` path. Carries no children: an unrecognized tag's
/// substructure is not interpretable by definition.
pub fn unknown_kind(tag: u16) -> Rc<Node> {
    at(Span::point(0), NodeKind::Unknown(tag), Payload::Unknown)
}
