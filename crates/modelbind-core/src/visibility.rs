//! Visibility and scope modifiers for model members and constructors.

use std::fmt;

/// Visibility of a member or constructor as seen from outside its module.
///
/// Only `Public` items are eligible for binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Anything narrower than `pub`: private, `pub(crate)`, `pub(super)`, `pub(in ..)`.
    Restricted,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Restricted => write!(f, "restricted"),
        }
    }
}

/// Whether a member belongs to each instance or to the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Instance,
    Static,
}

impl Scope {
    #[inline]
    pub const fn is_instance(self) -> bool {
        matches!(self, Scope::Instance)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Instance => write!(f, "instance"),
            Scope::Static => write!(f, "static"),
        }
    }
}
