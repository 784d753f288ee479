//! Derive macros for `filtered-logger`.
//!
//! This crate generates the row-rendering code behind `#[derive(LogRow)]`. It:
//! - reads `#[log_row(...)]` container and field attributes
//! - emits a `LogRow` implementation listing columns and PII fields
//! - emits a `Debug` implementation that masks PII fields
//!
//! It does **not** redact log lines. That happens in the main `filtered-logger`
//! crate when a line is formatted.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_struct;
mod options;
use derive_struct::{derive_struct, StructDeriveOutput};
use options::{parse_container_options, ContainerOptions};

/// Placeholder printed by the generated `Debug` for PII fields.
const DEBUG_REDACTION: &str = "***";

/// Derives `filtered_logger::LogRow` (and a masking `Debug`) for structs.
///
/// # Container Attributes
///
/// - `#[log_row(skip_debug)]` - Opt out of `Debug` impl generation.
///
/// # Field Attributes
///
/// - **No annotation**: the field is written as `name=value;` using `Display`.
/// - `#[log_row(pii)]`: the field is written like any other, and its key is
///   listed in `LogRow::PII_FIELDS` so a redacting logger masks it. The
///   generated `Debug` prints `"***"` for it.
/// - `#[log_row(rename = "key")]`: write the field under `key`.
/// - `#[log_row(skip)]`: leave the field out of the line entirely.
///
/// Options can be combined: `#[log_row(pii, rename = "mail")]`.
///
/// Only structs with named fields are supported; enums, unions and tuple
/// structs are rejected at compile time.
#[proc_macro_derive(LogRow, attributes(log_row))]
pub fn derive_log_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the filtered-logger crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "filtered-logger", ... }`).
/// Inside the crate itself `::filtered_logger` resolves through its
/// `extern crate self as filtered_logger;` alias, which also covers its tests
/// and binaries.
fn crate_root() -> TokenStream {
    match crate_name("filtered-logger") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::filtered_logger },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { skip_debug } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let StructDeriveOutput {
        columns,
        pii_fields,
        write_body,
        debug_body,
    } = match data {
        Data::Struct(data) => derive_struct(&ident, data)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`LogRow` can only be derived for structs with named fields",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`LogRow` cannot be derived for unions",
            ));
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::LogRow for #ident #ty_generics #where_clause {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
            const PII_FIELDS: &'static [&'static str] = &[#(#pii_fields),*];

            fn write_fields(&self, line: &mut #crate_root::LineBuilder) {
                #write_body
            }
        }

        #debug_impl
    })
}
