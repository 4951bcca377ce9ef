//! Core types for modelbind.
//!
//! This crate holds everything the registry, the derive macros and an
//! external binder share:
//!
//! - [`TypeKey`], [`TypeRef`] - type identity
//! - [`Model`], [`ModelType`] - bindable types and the handle used to look them up
//! - [`ModelShape`] and friends - the raw declared shape of a type
//! - [`PropertyDescriptor`], [`ConstructorDescriptor`], [`ParameterDescriptor`] -
//!   the filtered, immutable view a binder consumes
//! - [`ValueDescriptor`] - name + type capability implemented by properties and parameters
//! - [`BindingError`] - descriptor construction errors

mod descriptors;
mod error;
mod model;
mod shape;
mod type_key;
mod visibility;

pub use descriptors::{
    ConstructorDescriptor, ParameterDescriptor, PropertyDescriptor, ValueDescriptor,
};
pub use error::{BindingError, BindingResult};
pub use model::{Model, ModelType};
pub use shape::{ConstructorShape, MemberShape, ModelShape, ParamShape};
pub use type_key::{TypeKey, TypeRef};
pub use visibility::{Scope, Visibility};
