use std::fmt;

/// The `form` tag of a `type-declarator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaratorForm {
    Id,
    Nested,
    Unrecognized(u16),
}

impl fmt::Display for DeclaratorForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaratorForm::Id => f.write_str("id"),
            DeclaratorForm::Nested => f.write_str("nested"),
            DeclaratorForm::Unrecognized(tag) => write!(f, "unrecognized(0x{tag:04x})"),
        }
    }
}
