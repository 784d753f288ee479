//! Parsing of `#[log_row(...)]` attributes.
//!
//! The same attribute carries container options (on the struct) and field
//! options (on each field). Both go through [`for_each_option`], so the
//! accepted syntax is always a parenthesized option list.

use syn::{meta::ParseNestedMeta, Attribute, LitStr, Result};

/// Options on the struct itself.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `skip_debug` | No `Debug` impl is generated |
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    pub(crate) skip_debug: bool,
}

/// Options on a single field.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | None | Written as `field=value;` |
/// | `pii` | Written, listed in `PII_FIELDS`, masked in `Debug` |
/// | `rename = "key"` | Written under `key` |
/// | `skip` | Not written |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) pii: bool,
    pub(crate) skip: bool,
    pub(crate) rename: Option<LitStr>,
}

/// Calls `visit` for every option inside every `#[log_row(...)]` in `attrs`.
///
/// Bare `#[log_row]` and `#[log_row = ...]` are rejected by `syn` before
/// `visit` runs.
fn for_each_option<F>(attrs: &[Attribute], mut visit: F) -> Result<()>
where
    F: FnMut(ParseNestedMeta<'_>) -> Result<()>,
{
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("log_row"))
        .try_for_each(|attr| attr.parse_nested_meta(&mut visit))
}

fn unknown(meta: &ParseNestedMeta<'_>, scope: &str, expected: &str) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| "?".to_string(), ToString::to_string);
    meta.error(format!("unknown {scope} option `{name}`; expected {expected}"))
}

fn set_flag(flag: &mut bool, meta: &ParseNestedMeta<'_>, name: &str) -> Result<()> {
    if std::mem::replace(flag, true) {
        return Err(meta.error(format!("duplicate `{name}` option")));
    }
    Ok(())
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for_each_option(attrs, |meta| {
        if meta.path.is_ident("skip_debug") {
            set_flag(&mut options.skip_debug, &meta, "skip_debug")
        } else {
            Err(unknown(&meta, "container", "`skip_debug`"))
        }
    })?;
    Ok(options)
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for_each_option(attrs, |meta| {
        if meta.path.is_ident("pii") {
            set_flag(&mut options.pii, &meta, "pii")
        } else if meta.path.is_ident("skip") {
            set_flag(&mut options.skip, &meta, "skip")
        } else if meta.path.is_ident("rename") {
            if options.rename.is_some() {
                return Err(meta.error("duplicate `rename` option"));
            }
            let key: LitStr = meta.value()?.parse()?;
            if key.value().is_empty() {
                return Err(syn::Error::new(key.span(), "`rename` key cannot be empty"));
            }
            options.rename = Some(key);
            Ok(())
        } else {
            Err(unknown(&meta, "field", "`pii`, `skip` or `rename`"))
        }
    })?;

    if options.skip && (options.pii || options.rename.is_some()) {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "`skip` cannot be combined with `pii` or `rename`",
        ));
    }
    Ok(options)
}
