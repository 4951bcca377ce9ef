//! modelbind Proc Macros
//!
//! This crate provides procedural macros that describe a type's bindable
//! shape at compile time, so the registry never has to inspect types at
//! runtime.
//!
//! # Macros
//!
//! - `#[derive(Model)]` - Implement the `Model` trait for a struct
//! - `#[constructor]` - Record an associated function as a constructor
//!
//! # Example
//!
//! ```ignore
//! use modelbind::{Model, constructor};
//!
//! #[derive(Model)]
//! #[model(constructors(new))]
//! pub struct Deploy {
//!     pub target: String,
//!     #[model(readonly)]
//!     pub id: u64,
//! }
//!
//! impl Deploy {
//!     #[constructor]
//!     pub fn new(target: String) -> Self {
//!         Self { target, id: 0 }
//!     }
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod constructor;
mod derive_model;

/// Derive the `Model` trait for a struct.
///
/// Every named field becomes a member. A `pub` field is public; any other
/// visibility is recorded as restricted and is never bound.
///
/// # Type Attributes
///
/// - `#[model(constructors(a, b, ...))]` - Constructor functions, in
///   declaration order. Each must carry `#[constructor]`.
///
/// # Field Attributes
///
/// - `#[model(readonly)]` - Member cannot be assigned
/// - `#[model(skip)]` - Leave the field out of the shape
/// - `#[model(name = "...")]` - Override the member name
/// - `#[model(default = "...")]` - Default value text
///
/// # Example
///
/// ```ignore
/// #[derive(Model)]
/// pub struct Fetch {
///     pub url: String,
///
///     #[model(name = "retries", default = "3")]
///     pub max_retries: u32,
///
///     #[model(readonly)]
///     pub started_at: u64,
///
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    derive_model::derive_model_impl(input)
}

/// Mark an associated function as a constructor.
///
/// Emits the function unchanged plus a hidden companion that describes its
/// parameters. List the function in `#[model(constructors(...))]` on the
/// type to include it in the type's shape.
///
/// # Parameter Defaults
///
/// Use `#[default("value")]` on parameters to record default value text:
///
/// ```ignore
/// impl Fetch {
///     #[constructor]
///     pub fn new(url: String, #[default("3")] max_retries: u32) -> Self { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn constructor(attr: TokenStream, item: TokenStream) -> TokenStream {
    constructor::constructor_impl(attr, item)
}
