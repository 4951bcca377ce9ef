//! Type identity for registry lookups.
//!
//! This module provides [`TypeKey`], the opaque key the registry caches
//! descriptors under, and [`TypeRef`], a key paired with a readable type name
//! for diagnostics and type-directed conversion.
//!
//! Keys wrap [`std::any::TypeId`], so two distinct Rust types never share a
//! key even when their names are identical.
//!
//! # Examples
//!
//! ```
//! use modelbind_core::{TypeKey, TypeRef};
//!
//! assert_eq!(TypeKey::of::<u32>(), TypeKey::of::<u32>());
//! assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<i32>());
//! assert!(TypeKey::EMPTY.is_empty());
//!
//! let ty = TypeRef::of::<String>();
//! assert_eq!(ty.key(), TypeKey::of::<String>());
//! assert!(ty.name().ends_with("String"));
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque, hashable identity of a Rust type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TypeKey(Option<TypeId>);

impl TypeKey {
    /// The absent identity. Never denotes a real type.
    pub const EMPTY: TypeKey = TypeKey(None);

    /// Key for the type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(Some(TypeId::of::<T>()))
    }

    /// Whether this is [`TypeKey::EMPTY`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The underlying `TypeId`, if any.
    #[inline]
    pub const fn type_id(&self) -> Option<TypeId> {
        self.0
    }
}

impl Default for TypeKey {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "TypeKey({id:?})"),
            None => write!(f, "TypeKey(EMPTY)"),
        }
    }
}

/// A type key together with the type's name.
///
/// Equality and hashing consider only the key.
#[derive(Clone, Copy)]
pub struct TypeRef {
    key: TypeKey,
    name: &'static str,
}

impl TypeRef {
    /// Reference to no type.
    pub const EMPTY: TypeRef = TypeRef {
        key: TypeKey::EMPTY,
        name: "",
    };

    /// Reference to the type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    #[inline]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// Fully qualified type name as reported by [`std::any::type_name`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Whether this refers to `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.key == TypeKey::of::<T>()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "TypeRef(EMPTY)")
        } else {
            write!(f, "TypeRef({})", self.name)
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
