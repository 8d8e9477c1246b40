use std::fmt;

/// The errno-equivalent magnitude the upstream validator returns for each
/// failure kind. `EPERM` and `EINVAL` are the two values the source itself
/// uses; this crate never needs a third.
const EPERM: i32 = 1;
const EINVAL: i32 = 22;

/// The three ways a tree can fail validation (section 7).
///
/// `IncoherentStructure` and `InvalidArgument` share a return code
/// (`-EINVAL`) but are kept as distinct variants because they mean different
/// things: the former is a parent/child containment the grammar never
/// allows, the latter is an AST carrying a tag this crate's vocabulary
/// doesn't recognize at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    IncoherentStructure { message: String },
    StructureNotAllowed { message: String },
    InvalidArgument { message: String },
}

impl ValidationError {
    pub fn incoherent_structure(message: impl Into<String>) -> Self {
        ValidationError::IncoherentStructure {
            message: message.into(),
        }
    }

    pub fn structure_not_allowed(message: impl Into<String>) -> Self {
        ValidationError::StructureNotAllowed {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The signed return code callers observe, mirroring `-EPERM`/`-EINVAL`.
    pub fn code(&self) -> i32 {
        match self {
            ValidationError::IncoherentStructure { .. } => -EINVAL,
            ValidationError::StructureNotAllowed { .. } => -EPERM,
            ValidationError::InvalidArgument { .. } => -EINVAL,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationError::IncoherentStructure { message }
            | ValidationError::StructureNotAllowed { message }
            | ValidationError::InvalidArgument { message } => message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[error] {}", self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoherent_and_invalid_argument_share_a_code() {
        let a = ValidationError::incoherent_structure("x");
        let b = ValidationError::invalid_argument("y");
        assert_eq!(a.code(), b.code());
        assert_eq!(a.code(), -22);
    }

    #[test]
    fn structure_not_allowed_has_its_own_code() {
        let e = ValidationError::structure_not_allowed("x");
        assert_eq!(e.code(), -1);
    }

    #[test]
    fn display_prefixes_with_error_tag() {
        let e = ValidationError::structure_not_allowed("bad parent");
        assert_eq!(e.to_string(), "[error] bad parent");
    }
}
