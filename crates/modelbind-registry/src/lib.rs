//! modelbind registry crate.
//!
//! Provides [`ModelDescriptor`], the bindable view of a model type, and
//! [`ModelRegistry`], the process-lifetime cache that builds each descriptor
//! once per type.

mod descriptor;
mod registry;

pub use descriptor::ModelDescriptor;
pub use registry::{ModelRegistry, RegistryConfig, RegistryStats};

// Re-export from core so binders can depend on this crate alone
pub use modelbind_core::{
    BindingError, BindingResult, ConstructorDescriptor, Model, ModelType, ParameterDescriptor,
    PropertyDescriptor, TypeKey, TypeRef, ValueDescriptor,
};
