//! Raw reflected shape of a model type.
//!
//! A [`ModelShape`] lists everything a type declares that could matter to a
//! binder: every member and every constructor, public or not, instance or
//! static. Discovery later filters the shape down to the bindable subset.
//!
//! Shapes come from `#[derive(Model)]` or are written by hand for types the
//! derive cannot reach:
//!
//! ```
//! use modelbind_core::{ConstructorShape, MemberShape, ModelShape, ParamShape};
//!
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! let shape = ModelShape::new()
//!     .with_member(MemberShape::new::<Endpoint, String>("host"))
//!     .with_member(MemberShape::new::<Endpoint, u16>("port").readonly())
//!     .with_constructor(
//!         ConstructorShape::new("new")
//!             .with_param(ParamShape::new::<String>("host"))
//!             .with_param(ParamShape::new::<u16>("port").with_default("80")),
//!     );
//!
//! assert_eq!(shape.members.len(), 2);
//! assert_eq!(shape.constructors[0].params.len(), 2);
//! ```

use crate::{Scope, TypeRef, Visibility};

/// Members and constructors declared by a type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelShape {
    pub members: Vec<MemberShape>,
    pub constructors: Vec<ConstructorShape>,
}

impl ModelShape {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder Methods ===

    /// Add a member.
    pub fn with_member(mut self, member: MemberShape) -> Self {
        self.members.push(member);
        self
    }

    /// Add a constructor.
    pub fn with_constructor(mut self, constructor: ConstructorShape) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.constructors.is_empty()
    }
}

/// One member (field or property) declared on a type.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShape {
    /// Member name used for matching parsed argument names.
    pub name: &'static str,
    /// Type the member is declared on.
    pub declaring_type: TypeRef,
    /// Type of the member's value.
    pub value_type: TypeRef,
    pub visibility: Visibility,
    pub scope: Scope,
    /// Whether the member can be assigned.
    pub writable: bool,
    /// Default value text, passed through uninterpreted.
    pub default_value: Option<&'static str>,
}

impl MemberShape {
    /// A public, writable instance member of type `V` declared on `D`.
    pub fn new<D: ?Sized + 'static, V: ?Sized + 'static>(name: &'static str) -> Self {
        Self::from_refs(name, TypeRef::of::<D>(), TypeRef::of::<V>())
    }

    /// Same as [`MemberShape::new`] for types already captured as [`TypeRef`]s.
    pub fn from_refs(name: &'static str, declaring_type: TypeRef, value_type: TypeRef) -> Self {
        Self {
            name,
            declaring_type,
            value_type,
            visibility: Visibility::Public,
            scope: Scope::Instance,
            writable: true,
            default_value: None,
        }
    }

    // === Builder Methods ===

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Mark the member as not assignable.
    pub fn readonly(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// One constructor declared on a type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorShape {
    /// Name of the constructing function (`new`, `with_capacity`, ...).
    pub name: &'static str,
    pub visibility: Visibility,
    pub scope: Scope,
    /// Parameters in declaration order.
    pub params: Vec<ParamShape>,
}

impl ConstructorShape {
    /// A public instance constructor with no parameters.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            scope: Scope::Instance,
            params: Vec::new(),
        }
    }

    // === Builder Methods ===

    pub fn with_param(mut self, param: ParamShape) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamShape {
    pub name: &'static str,
    pub value_type: TypeRef,
    pub default_value: Option<&'static str>,
}

impl ParamShape {
    pub fn new<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            value_type: TypeRef::of::<T>(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }
}
