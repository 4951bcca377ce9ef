//! Model trait for bindable types.
//!
//! This module provides the [`Model`] trait which every type a binder can
//! populate implements, and [`ModelType`], the type identity handle the
//! registry is queried with.
//!
//! # Example
//!
//! ```
//! use modelbind_core::{MemberShape, Model, ModelShape, ModelType};
//!
//! struct Verbosity {
//!     level: u8,
//! }
//!
//! impl Model for Verbosity {
//!     fn model_shape() -> ModelShape {
//!         ModelShape::new().with_member(MemberShape::new::<Verbosity, u8>("level"))
//!     }
//! }
//!
//! let model_type = ModelType::of::<Verbosity>();
//! assert!(model_type.type_ref().is::<Verbosity>());
//! assert_eq!(model_type.shape().members.len(), 1);
//! ```
//!
//! With the `#[derive(Model)]` macro (from `modelbind-macros`):
//!
//! ```ignore
//! #[derive(Model)]
//! pub struct Verbosity {
//!     pub level: u8,
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{ModelShape, TypeKey, TypeRef};

/// Trait for types whose shape can be described to a binder.
///
/// # Derive Macro
///
/// The usual way to implement this trait is `#[derive(Model)]`, which reads
/// field visibility and `#[model(...)]` attributes.
pub trait Model: 'static {
    /// Describe every member and constructor the type declares.
    ///
    /// Called at most a handful of times per process, once per cold
    /// registry lookup, so it may allocate freely.
    fn model_shape() -> ModelShape;
}

/// Identity handle for a model type: its key, its name, and where to read
/// its shape from.
///
/// Equality and hashing consider only the key.
#[derive(Clone, Copy)]
pub struct ModelType {
    type_ref: TypeRef,
    shape: fn() -> ModelShape,
}

impl ModelType {
    /// The absent type identity.
    pub const EMPTY: ModelType = ModelType {
        type_ref: TypeRef::EMPTY,
        shape: ModelShape::new,
    };

    /// Identity of `T`.
    #[inline]
    pub fn of<T: Model>() -> Self {
        Self {
            type_ref: TypeRef::of::<T>(),
            shape: T::model_shape,
        }
    }

    /// Identity of a type described by an explicit shape function.
    ///
    /// Used to register types that cannot implement [`Model`] themselves,
    /// such as types from another crate.
    ///
    /// The registry keys on `type_ref` alone. If `type_ref` names a type that
    /// also implements [`Model`], this handle and [`ModelType::of`] share one
    /// cache entry: whichever reaches a registry first is built and published,
    /// and the other's shape function is never called by that registry.
    #[inline]
    pub fn new(type_ref: TypeRef, shape: fn() -> ModelShape) -> Self {
        Self { type_ref, shape }
    }

    #[inline]
    pub fn key(&self) -> TypeKey {
        self.type_ref.key()
    }

    #[inline]
    pub fn type_ref(&self) -> TypeRef {
        self.type_ref
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_ref.name()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_ref.is_empty()
    }

    /// Read the type's shape.
    pub fn shape(&self) -> ModelShape {
        (self.shape)()
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.type_ref == other.type_ref
    }
}

impl Eq for ModelType {}

impl Hash for ModelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_ref.hash(state);
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelType").field(&self.type_ref).finish()
    }
}
