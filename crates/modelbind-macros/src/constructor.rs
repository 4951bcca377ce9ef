//! Implementation of the `#[constructor]` attribute macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, Pat, Visibility, parse_macro_input};

use crate::attrs::param_default;
use crate::derive_model::unraw;

pub fn constructor_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = TokenStream2::from(attr);
        return syn::Error::new_spanned(attr, "#[constructor] takes no arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemFn);

    match constructor_inner(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn constructor_inner(mut input: ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = input.sig.ident.clone();

    if let Some(receiver) = input.sig.receiver() {
        return Err(syn::Error::new_spanned(
            receiver,
            "constructors must be associated functions without a `self` receiver",
        ));
    }
    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "constructors cannot be generic",
        ));
    }

    let meta_fn_name = format_ident!("__model_ctor_{}", fn_name);
    let ctor_name = unraw(&fn_name.to_string());

    let visibility = match &input.vis {
        Visibility::Public(_) => quote! { ::modelbind_core::Visibility::Public },
        _ => quote! { ::modelbind_core::Visibility::Restricted },
    };

    let mut params = Vec::new();
    for arg in input.sig.inputs.iter_mut() {
        let FnArg::Typed(pat_type) = arg else {
            continue;
        };

        let name = match pat_type.pat.as_ref() {
            Pat::Ident(ident) => unraw(&ident.ident.to_string()),
            _ => "_".to_string(),
        };
        let default_value = match param_default(&pat_type.attrs)? {
            Some(value) => quote! { Some(#value) },
            None => quote! { None },
        };
        let ty = &pat_type.ty;

        params.push(quote! {
            ::modelbind_core::ParamShape {
                name: #name,
                value_type: ::modelbind_core::TypeRef::of::<#ty>(),
                default_value: #default_value,
            }
        });

        // #[default] is ours; the compiler must not see it
        pat_type.attrs.retain(|attr| !attr.path().is_ident("default"));
    }

    Ok(quote! {
        #input

        #[doc(hidden)]
        pub fn #meta_fn_name() -> ::modelbind_core::ConstructorShape {
            ::modelbind_core::ConstructorShape {
                name: #ctor_name,
                visibility: #visibility,
                scope: ::modelbind_core::Scope::Instance,
                params: vec![#(#params),*],
            }
        }
    })
}
