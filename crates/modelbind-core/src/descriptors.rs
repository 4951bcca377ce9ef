//! Immutable descriptors for bindable members and constructors.
//!
//! - [`ValueDescriptor`] - name + type capability shared by properties and parameters
//! - [`PropertyDescriptor`] - one writable, public instance member
//! - [`ParameterDescriptor`] - one constructor parameter
//! - [`ConstructorDescriptor`] - one public instance constructor
//!
//! Descriptors are built from the matching shape types and never change
//! afterwards.

use std::fmt;

use crate::{ConstructorShape, MemberShape, ParamShape, TypeRef};

/// Something a binder can assign a parsed value to.
///
/// Implemented by both [`PropertyDescriptor`] and [`ParameterDescriptor`] so
/// a binder can match names and pick conversions without caring where a
/// value ends up.
pub trait ValueDescriptor: fmt::Debug + Send + Sync {
    /// Name matched against parsed argument names.
    fn value_name(&self) -> &str;

    /// Type the parsed value must be converted to.
    fn value_type(&self) -> TypeRef;

    /// Default value text declared alongside the value, if any.
    fn default_value(&self) -> Option<&str> {
        None
    }

    fn has_default_value(&self) -> bool {
        self.default_value().is_some()
    }
}

/// A writable, public instance member of a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: &'static str,
    declaring_type: TypeRef,
    value_type: TypeRef,
    default_value: Option<&'static str>,
}

impl PropertyDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type the member is declared on.
    pub fn declaring_type(&self) -> TypeRef {
        self.declaring_type
    }
}

impl From<&MemberShape> for PropertyDescriptor {
    fn from(shape: &MemberShape) -> Self {
        Self {
            name: shape.name,
            declaring_type: shape.declaring_type,
            value_type: shape.value_type,
            default_value: shape.default_value,
        }
    }
}

impl ValueDescriptor for PropertyDescriptor {
    fn value_name(&self) -> &str {
        self.name
    }

    fn value_type(&self) -> TypeRef {
        self.value_type
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value
    }
}

/// One parameter of a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: &'static str,
    value_type: TypeRef,
    default_value: Option<&'static str>,
}

impl ParameterDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl From<&ParamShape> for ParameterDescriptor {
    fn from(shape: &ParamShape) -> Self {
        Self {
            name: shape.name,
            value_type: shape.value_type,
            default_value: shape.default_value,
        }
    }
}

impl ValueDescriptor for ParameterDescriptor {
    fn value_name(&self) -> &str {
        self.name
    }

    fn value_type(&self) -> TypeRef {
        self.value_type
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value
    }
}

/// A public instance constructor and its ordered parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    name: &'static str,
    parameters: Vec<ParameterDescriptor>,
}

impl ConstructorDescriptor {
    /// Name of the constructing function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Parameters viewed through the [`ValueDescriptor`] capability.
    pub fn value_descriptors(&self) -> impl ExactSizeIterator<Item = &dyn ValueDescriptor> {
        self.parameters.iter().map(|p| p as &dyn ValueDescriptor)
    }
}

impl From<&ConstructorShape> for ConstructorDescriptor {
    fn from(shape: &ConstructorShape) -> Self {
        Self {
            name: shape.name,
            parameters: shape.params.iter().map(ParameterDescriptor::from).collect(),
        }
    }
}
