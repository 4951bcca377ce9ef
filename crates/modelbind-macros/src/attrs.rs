//! Attribute parsing utilities for modelbind macros.

use syn::{Attribute, Ident, LitStr};

/// Parsed `#[model(...)]` attributes on a type.
#[derive(Debug, Default)]
pub struct TypeAttrs {
    /// Constructor functions, in declaration order
    pub constructors: Vec<Ident>,
}

/// Parsed `#[model(...)]` attributes on a field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Field cannot be assigned by a binder
    pub readonly: bool,
    /// Leave the field out of the shape entirely
    pub skip: bool,
    /// Override member name
    pub name: Option<String>,
    /// Default value text
    pub default: Option<String>,
}

impl TypeAttrs {
    /// Parse attributes from a list of `#[model(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("constructors") {
                    meta.parse_nested_meta(|ctor| {
                        let ident = ctor
                            .path
                            .get_ident()
                            .ok_or_else(|| ctor.error("expected a constructor function name"))?;
                        if result.constructors.contains(ident) {
                            return Err(ctor.error(format!("duplicate constructor: {}", ident)));
                        }
                        result.constructors.push(ident.clone());
                        Ok(())
                    })
                } else {
                    Err(meta.error(format!(
                        "unknown model attribute: {}",
                        path_name(&meta.path)
                    )))
                }
            })?;
        }

        Ok(result)
    }
}

impl FieldAttrs {
    /// Parse attributes from a list of `#[model(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("readonly") {
                    result.readonly = true;
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else if meta.path.is_ident("default") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.default = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown model field attribute: {}",
                        path_name(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

/// Extract the default value from a `#[default("...")]` parameter attribute.
pub fn param_default(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("default") {
            let lit: LitStr = attr.parse_args()?;
            return Ok(Some(lit.value()));
        }
    }
    Ok(None)
}

fn path_name(path: &syn::Path) -> String {
    path.get_ident().map(|i| i.to_string()).unwrap_or_default()
}
