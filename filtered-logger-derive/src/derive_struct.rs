//! Struct-specific `LogRow` derivation.
//!
//! This module walks named fields in declaration order and generates the
//! column lists, the line-writing body and the masking `Debug` body.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, LitStr, Result};

use crate::{options::parse_field_options, DEBUG_REDACTION};

pub(crate) struct StructDeriveOutput {
    pub(crate) columns: Vec<LitStr>,
    pub(crate) pii_fields: Vec<LitStr>,
    pub(crate) write_body: TokenStream,
    pub(crate) debug_body: TokenStream,
}

pub(crate) fn derive_struct(name: &Ident, data: DataStruct) -> Result<StructDeriveOutput> {
    let fields = match data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`LogRow` requires named fields; tuple structs have no column names",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                name.span(),
                "`LogRow` requires at least one named field",
            ));
        }
    };

    let mut columns: Vec<LitStr> = Vec::new();
    let mut pii_fields = Vec::new();
    let mut writes = Vec::new();
    let mut debug_fields = Vec::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };

        let field_name = LitStr::new(&ident.unraw().to_string(), ident.span());
        let debug_field = if options.pii {
            quote_spanned! { span =>
                debug.field(#field_name, &#DEBUG_REDACTION);
            }
        } else {
            quote_spanned! { span =>
                debug.field(#field_name, &self.#ident);
            }
        };
        debug_fields.push(debug_field);

        if options.skip {
            continue;
        }

        let key = options
            .rename
            .unwrap_or_else(|| field_name.clone());
        if columns.iter().any(|existing| existing.value() == key.value()) {
            return Err(syn::Error::new(
                key.span(),
                format!("duplicate column `{}`", key.value()),
            ));
        }

        writes.push(quote_spanned! { span =>
            line.field(#key, &self.#ident);
        });
        if options.pii {
            pii_fields.push(key.clone());
        }
        columns.push(key);
    }

    let write_body = if writes.is_empty() {
        quote! { let _ = line; }
    } else {
        quote! { #(#writes)* }
    };

    let struct_name = LitStr::new(&name.unraw().to_string(), name.span());
    let debug_body = quote! {
        let mut debug = f.debug_struct(#struct_name);
        #(#debug_fields)*
        debug.finish()
    };

    Ok(StructDeriveOutput {
        columns,
        pii_fields,
        write_body,
        debug_body,
    })
}
