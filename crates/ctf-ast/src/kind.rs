use std::fmt;

/// The tag half of the metadata AST's tagged union.
///
/// Mirrors `enum node_type` from the CTF metadata grammar: every node in the
/// tree carries exactly one of these, and `Payload` (see `payload.rs`) carries
/// the matching union arm. `Unknown` exists so that a tree built from a
/// malformed or future grammar extension can still be represented -- the
/// validator rejects it with `invalid-argument` rather than the type system
/// ruling it out before validation ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Event,
    Stream,
    Trace,
    CtfExpression,
    UnaryExpression,
    Typedef,
    TypealiasTarget,
    TypealiasAlias,
    Typealias,
    TypeSpecifier,
    Pointer,
    TypeDeclarator,
    FloatingPoint,
    Integer,
    String,
    Enumerator,
    Enum,
    Struct,
    Variant,
    StructOrVariantDeclaration,
    /// An enum tag this crate does not recognize, carried verbatim so the
    /// validator can report `invalid-argument` instead of panicking.
    Unknown(u16),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Root => "root",
            NodeKind::Event => "event",
            NodeKind::Stream => "stream",
            NodeKind::Trace => "trace",
            NodeKind::CtfExpression => "ctf-expression",
            NodeKind::UnaryExpression => "unary-expression",
            NodeKind::Typedef => "typedef",
            NodeKind::TypealiasTarget => "typealias-target",
            NodeKind::TypealiasAlias => "typealias-alias",
            NodeKind::Typealias => "typealias",
            NodeKind::TypeSpecifier => "type-specifier",
            NodeKind::Pointer => "pointer",
            NodeKind::TypeDeclarator => "type-declarator",
            NodeKind::FloatingPoint => "floating-point",
            NodeKind::Integer => "integer",
            NodeKind::String => "string",
            NodeKind::Enumerator => "enumerator",
            NodeKind::Enum => "enum",
            NodeKind::Struct => "struct",
            NodeKind::Variant => "variant",
            NodeKind::StructOrVariantDeclaration => "struct-or-variant-declaration",
            NodeKind::Unknown(tag) => return write!(f, "unknown(0x{tag:04x})"),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(NodeKind::UnaryExpression.to_string(), "unary-expression");
        assert_eq!(
            NodeKind::StructOrVariantDeclaration.to_string(),
            "struct-or-variant-declaration"
        );
    }

    #[test]
    fn unknown_carries_its_tag() {
        assert_eq!(NodeKind::Unknown(7).to_string(), "unknown(0x0007)");
    }
}
