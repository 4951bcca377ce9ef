//! modelbind - cached type descriptors for command-line binding.
//!
//! A binder that turns parsed command-line values into user-defined types
//! needs to know, for each target type, which members it may assign and
//! which constructors it may call. This crate answers that question once per
//! type and caches the answer for the life of the process.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use modelbind::{Model, ModelDescriptor, ValueDescriptor, constructor};
//!
//! #[derive(Model)]
//! #[model(constructors(new, with_target))]
//! pub struct Deploy {
//!     pub target: String,
//!     #[model(default = "1")]
//!     pub replicas: u32,
//!     #[model(readonly)]
//!     pub id: u64,
//!     token: Option<String>,
//! }
//!
//! impl Deploy {
//!     #[constructor]
//!     pub fn new() -> Self {
//!         Self::with_target(String::new(), 1)
//!     }
//!
//!     #[constructor]
//!     pub fn with_target(target: String, #[default("1")] replicas: u32) -> Self {
//!         Self { target, replicas, id: 0, token: None }
//!     }
//! }
//!
//! let descriptor = ModelDescriptor::from_type::<Deploy>();
//!
//! let names: Vec<_> = descriptor
//!     .value_descriptors()
//!     .map(|value| value.value_name())
//!     .collect();
//! assert_eq!(names, ["target", "replicas"]);
//!
//! let arities: Vec<_> = descriptor
//!     .constructor_descriptors()
//!     .iter()
//!     .map(|ctor| ctor.arity())
//!     .collect();
//! assert_eq!(arities, [0, 2]);
//!
//! assert!(Arc::ptr_eq(&descriptor, &ModelDescriptor::from_type::<Deploy>()));
//! ```
//!
//! # Crates
//!
//! - `modelbind-core` - type identity, shapes, descriptors, errors
//! - `modelbind-registry` - [`ModelDescriptor`] and [`ModelRegistry`]
//! - `modelbind-macros` - `#[derive(Model)]` and `#[constructor]`

pub use modelbind_core::{
    BindingError, BindingResult, ConstructorDescriptor, ConstructorShape, MemberShape, Model,
    ModelShape, ModelType, ParamShape, ParameterDescriptor, PropertyDescriptor, Scope, TypeKey,
    TypeRef, ValueDescriptor, Visibility,
};
pub use modelbind_macros::{Model, constructor};
pub use modelbind_registry::{ModelDescriptor, ModelRegistry, RegistryConfig, RegistryStats};
