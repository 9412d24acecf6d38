use proc_macro_error2::emit_error;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

/// `#[graph(...)]` on a struct or enum.
#[derive(Default)]
pub struct ContainerAttrs {
    /// `odata_type = "#microsoft.graph.x"`
    pub odata_type: Option<LitStr>,
    /// `type_name = "x"` (enums only)
    pub type_name: Option<LitStr>,
}

/// `#[graph(...)]` on a struct field.
#[derive(Default)]
pub struct FieldAttrs {
    pub parent: bool,
    pub additional_data: bool,
    pub skip: bool,
    pub rename: Option<LitStr>,
}

/// `#[graph(...)]` on an enum variant.
#[derive(Default)]
pub struct VariantAttrs {
    pub base: bool,
    pub rename: Option<LitStr>,
}

fn graph_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("graph"))
}

pub fn parse_container_attrs(attrs: &[Attribute]) -> ContainerAttrs {
    let mut out = ContainerAttrs::default();
    for attr in graph_attrs(attrs) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("odata_type") {
                out.odata_type = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("type_name") {
                out.type_name = Some(meta.value()?.parse()?);
            } else {
                emit_error!(meta.path.span(), "unknown #[graph] container attribute");
            }
            Ok(())
        });
        if let Err(e) = result {
            emit_error!(attr.span(), "Failed to parse #[graph] attribute: {}", e);
        }
    }
    if let Some(tag) = &out.odata_type
        && !tag.value().starts_with('#')
    {
        emit_error!(tag.span(), "odata_type must look like \"#namespace.typeName\"");
    }
    out
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> FieldAttrs {
    let mut out = FieldAttrs::default();
    for attr in graph_attrs(attrs) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("parent") {
                out.parent = true;
            } else if meta.path.is_ident("additional_data") {
                out.additional_data = true;
            } else if meta.path.is_ident("skip") {
                out.skip = true;
            } else if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse()?);
            } else {
                emit_error!(meta.path.span(), "unknown #[graph] field attribute");
            }
            Ok(())
        });
        if let Err(e) = result {
            emit_error!(attr.span(), "Failed to parse #[graph] attribute: {}", e);
        }
    }
    let roles = [out.parent, out.additional_data, out.skip]
        .iter()
        .filter(|set| **set)
        .count();
    if roles > 1 {
        emit_error!(
            attrs.first().map_or_else(proc_macro2::Span::call_site, Spanned::span),
            "`parent`, `additional_data` and `skip` are mutually exclusive"
        );
    }
    out
}

pub fn parse_variant_attrs(attrs: &[Attribute]) -> VariantAttrs {
    let mut out = VariantAttrs::default();
    for attr in graph_attrs(attrs) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                out.base = true;
            } else if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse()?);
            } else {
                emit_error!(meta.path.span(), "unknown #[graph] variant attribute");
            }
            Ok(())
        });
        if let Err(e) = result {
            emit_error!(attr.span(), "Failed to parse #[graph] attribute: {}", e);
        }
    }
    out
}
