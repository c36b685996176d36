#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Inventra crates.
//! They remove the boilerplate around error enums, feature slice handles and
//! serializable view records.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! inv-derive.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for serializable view records.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `Serialize` and `Deserialize` when missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use inv_derive::view_model;
///
/// #[view_model(deny_unknown_fields = false)]
/// pub struct StoreRef {
///     pub store_id: String,
///     pub display_name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn view_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::view_model::expand_view_model(attr.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Type Aliasing**: Creates a `Result<T, E = Error>` alias next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or one marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. A `context` field must have the type `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[inv_derive::inv_error]
/// pub enum SeedError {
///     #[error("Seed I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read_seed(path: &Path) -> Result<String> {
///     std::fs::read_to_string(path).context("Reading seed file")
/// }
/// ```
#[proc_macro_attribute]
pub fn inv_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// 1. Moves the fields into a `<Name>Inner` struct.
/// 2. Generates a cheap-to-clone `Arc` wrapper named `<Name>` with `Deref` to the inner state.
/// 3. Implements `inv_domain::registry::FeatureSlice` so the slice can be registered.
///
/// # Example
/// ```rust,ignore
/// #[inv_derive::inv_slice]
/// pub struct Forecasts {
///     horizon_days: u32,
/// }
///
/// let slice = Forecasts::new(ForecastsInner { horizon_days: 14 });
/// ```
#[proc_macro_attribute]
pub fn inv_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
