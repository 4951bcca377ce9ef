//! Implementation of the `#[derive(Model)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Visibility, parse_macro_input, parse_quote};

use crate::attrs::{FieldAttrs, TypeAttrs};

pub fn derive_model_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_model_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_model_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = TypeAttrs::from_attrs(&input.attrs)?;

    let generics = static_generics(&input.generics)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let members = collect_members(input)?;

    // Each listed constructor is expected to carry #[constructor], which emits
    // the `__model_ctor_<name>` companion called here.
    let constructors: Vec<_> = attrs
        .constructors
        .iter()
        .map(|ctor| {
            let meta_fn = format_ident!("__model_ctor_{}", ctor);
            quote! { Self::#meta_fn() }
        })
        .collect();

    Ok(quote! {
        impl #impl_generics ::modelbind_core::Model for #name #ty_generics #where_clause {
            fn model_shape() -> ::modelbind_core::ModelShape {
                ::modelbind_core::ModelShape {
                    members: vec![#(#members),*],
                    constructors: vec![#(#constructors),*],
                }
            }
        }
    })
}

/// Add `'static` to every type parameter, and reject lifetime parameters.
fn static_generics(generics: &Generics) -> syn::Result<Generics> {
    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Model cannot be derived for types with lifetime parameters",
        ));
    }

    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    Ok(generics)
}

/// Collect member shapes from struct fields.
fn collect_members(input: &DeriveInput) -> syn::Result<Vec<TokenStream2>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return Ok(Vec::new()),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Model can only be derived for structs with named fields or unit structs",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Model can only be derived for structs",
            ));
        }
    };

    let mut members = Vec::new();

    for field in fields {
        let field_attrs = FieldAttrs::from_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let member_name = field_attrs
            .name
            .clone()
            .unwrap_or_else(|| unraw(&field_name.to_string()));
        let field_ty = &field.ty;

        let visibility = match &field.vis {
            Visibility::Public(_) => quote! { ::modelbind_core::Visibility::Public },
            _ => quote! { ::modelbind_core::Visibility::Restricted },
        };
        let writable = !field_attrs.readonly;
        let default_value = match &field_attrs.default {
            Some(value) => quote! { Some(#value) },
            None => quote! { None },
        };

        members.push(quote! {
            ::modelbind_core::MemberShape {
                name: #member_name,
                declaring_type: ::modelbind_core::TypeRef::of::<Self>(),
                value_type: ::modelbind_core::TypeRef::of::<#field_ty>(),
                visibility: #visibility,
                scope: ::modelbind_core::Scope::Instance,
                writable: #writable,
                default_value: #default_value,
            }
        });
    }

    Ok(members)
}

/// Strip the `r#` prefix from raw identifiers.
pub fn unraw(name: &str) -> String {
    name.strip_prefix("r#").unwrap_or(name).to_string()
}
