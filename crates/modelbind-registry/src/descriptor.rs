//! Model descriptors.
//!
//! [`ModelDescriptor`] is the filtered view of a type's shape a binder works
//! from: the members it may assign and the constructors it may call.
//!
//! # Discovery rules
//!
//! - A member becomes a [`PropertyDescriptor`] when it is public, belongs to
//!   instances, and is writable.
//! - A constructor becomes a [`ConstructorDescriptor`] when it is public and
//!   belongs to instances. Arity is never filtered.
//! - Declaration order is kept for both lists, so rebuilding a descriptor for
//!   the same type yields an equal value.

use std::sync::Arc;

use modelbind_core::{
    BindingError, BindingResult, ConstructorDescriptor, ConstructorShape, MemberShape, Model,
    ModelShape, ModelType, PropertyDescriptor, TypeRef, ValueDescriptor,
};

use crate::ModelRegistry;

/// Everything a binder needs to know about one model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    model_type: TypeRef,
    property_descriptors: Vec<PropertyDescriptor>,
    constructor_descriptors: Vec<ConstructorDescriptor>,
}

impl ModelDescriptor {
    /// Build a descriptor by inspecting `model_type`'s shape.
    ///
    /// Fails with [`BindingError::InvalidArgument`] when `model_type` is
    /// [`ModelType::EMPTY`].
    pub fn new(model_type: ModelType) -> BindingResult<Self> {
        if model_type.is_empty() {
            return Err(BindingError::InvalidArgument {
                argument: "model_type",
                reason: "type identity is empty",
            });
        }

        Ok(Self::discover(model_type.type_ref(), &model_type.shape()))
    }

    /// Cached descriptor for `T` from the process-wide registry.
    pub fn from_type<T: Model>() -> Arc<Self> {
        ModelRegistry::global().from_type::<T>()
    }

    /// Cached descriptor for `model_type` from the process-wide registry.
    pub fn from_model_type(model_type: ModelType) -> BindingResult<Arc<Self>> {
        ModelRegistry::global().get_or_create(model_type)
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub(crate) fn discover(model_type: TypeRef, shape: &ModelShape) -> Self {
        let property_descriptors = shape
            .members
            .iter()
            .filter(|member| is_bindable_member(member))
            .map(PropertyDescriptor::from)
            .collect();

        let constructor_descriptors = shape
            .constructors
            .iter()
            .filter(|ctor| is_bindable_constructor(ctor))
            .map(ConstructorDescriptor::from)
            .collect();

        Self {
            model_type,
            property_descriptors,
            constructor_descriptors,
        }
    }

    /// The described type.
    pub fn model_type(&self) -> TypeRef {
        self.model_type
    }

    /// Writable public instance members, in declaration order.
    pub fn property_descriptors(&self) -> &[PropertyDescriptor] {
        &self.property_descriptors
    }

    /// Public instance constructors, in declaration order.
    pub fn constructor_descriptors(&self) -> &[ConstructorDescriptor] {
        &self.constructor_descriptors
    }

    /// Properties viewed through the [`ValueDescriptor`] capability.
    pub fn value_descriptors(&self) -> impl ExactSizeIterator<Item = &dyn ValueDescriptor> {
        self.property_descriptors
            .iter()
            .map(|p| p as &dyn ValueDescriptor)
    }
}

fn is_bindable_member(member: &MemberShape) -> bool {
    member.visibility.is_public() && member.scope.is_instance() && member.writable
}

fn is_bindable_constructor(ctor: &ConstructorShape) -> bool {
    ctor.visibility.is_public() && ctor.scope.is_instance()
}
