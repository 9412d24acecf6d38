use std::collections::HashSet;

use heck::ToLowerCamelCase;
use proc_macro2::TokenStream;
use proc_macro_error2::{abort, emit_error};
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::{parse_container_attrs, parse_variant_attrs};

pub fn expand_derive_graph_enum(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        abort!(input.generics, "GraphEnum does not support generic types");
    }
    let Data::Enum(data) = &input.data else {
        abort!(input, "GraphEnum can only be derived for enums");
    };
    if data.variants.is_empty() {
        abort!(name, "GraphEnum needs at least one variant");
    }

    let container = parse_container_attrs(&input.attrs);
    let type_name = container
        .type_name
        .map_or_else(|| name.to_string().to_lower_camel_case(), |lit| lit.value());

    let mut variants = Vec::new();
    let mut wire_names = Vec::new();
    let mut seen = HashSet::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            emit_error!(variant.ident, "GraphEnum variants cannot carry data");
            continue;
        }
        let attrs = parse_variant_attrs(&variant.attrs);
        if attrs.base {
            emit_error!(variant.ident, "#[graph(base)] only applies to GraphPolymorphic enums");
        }
        let wire = attrs
            .rename
            .map_or_else(|| variant.ident.to_string().to_lower_camel_case(), |lit| lit.value());
        if !seen.insert(wire.clone()) {
            emit_error!(variant.ident, "duplicate wire name `{}`", wire);
        }
        variants.push(&variant.ident);
        wire_names.push(wire);
    }

    quote! {
        #[automatically_derived]
        impl ::graph_serialization::GraphEnum for #name {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            fn from_wire(text: &str) -> ::core::option::Option<Self> {
                match text {
                    #(#wire_names => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn as_wire(&self) -> &'static str {
                match self {
                    #(Self::#variants => #wire_names,)*
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::graph_serialization::GraphEnum::as_wire(self))
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = ::graph_serialization::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::graph_serialization::GraphEnum>::from_wire(s).ok_or_else(|| {
                    ::graph_serialization::ParseError::InvalidValue {
                        kind: <Self as ::graph_serialization::GraphEnum>::TYPE_NAME,
                        value: ::std::borrow::ToOwned::to_owned(s),
                    }
                })
            }
        }

        #[automatically_derived]
        impl ::graph_serialization::FieldValue for #name {
            fn read_field(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<::core::option::Option<Self>, ::graph_serialization::ParseError> {
                node.enum_value::<Self>()
            }

            fn write_field(
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: &str,
                value: ::core::option::Option<&Self>,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::value::write_enum_field(writer, key, value)
            }
        }

        #[automatically_derived]
        impl ::graph_serialization::CollectionElement for #name {
            fn read_collection(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<
                ::core::option::Option<::std::vec::Vec<Self>>,
                ::graph_serialization::ParseError,
            > {
                node.collection_of_enum_values::<Self>()
            }

            fn write_collection(
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: &str,
                values: ::core::option::Option<&[Self]>,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::value::write_enum_collection(writer, key, values)
            }
        }
    }
}
