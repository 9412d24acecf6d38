use proc_macro2::TokenStream;
use proc_macro_error2::{abort, emit_error};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::attrs::parse_variant_attrs;

struct Variant<'a> {
    ident: &'a Ident,
    ty: &'a Type,
}

#[allow(clippy::too_many_lines)]
pub fn expand_derive_graph_polymorphic(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        abort!(input.generics, "GraphPolymorphic does not support generic types");
    }
    let Data::Enum(data) = &input.data else {
        abort!(input, "GraphPolymorphic can only be derived for enums");
    };

    let mut base: Option<Variant<'_>> = None;
    let mut subtypes: Vec<Variant<'_>> = Vec::new();
    for variant in &data.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                emit_error!(variant.ident, "GraphPolymorphic variants must wrap exactly one model");
                continue;
            }
        };
        let attrs = parse_variant_attrs(&variant.attrs);
        if attrs.rename.is_some() {
            emit_error!(variant.ident, "variants are selected by the model's odata_type; `rename` does not apply");
        }
        let entry = Variant {
            ident: &variant.ident,
            ty,
        };
        if attrs.base {
            if base.is_some() {
                emit_error!(variant.ident, "only one variant can be #[graph(base)]");
                continue;
            }
            base = Some(entry);
        } else {
            subtypes.push(entry);
        }
    }
    let Some(base) = base else {
        abort!(name, "GraphPolymorphic needs one #[graph(base)] variant");
    };

    let base_ident = base.ident;
    let base_ty = base.ty;
    let all: Vec<&Variant<'_>> = std::iter::once(&base).chain(subtypes.iter()).collect();
    let idents: Vec<&Ident> = all.iter().map(|v| v.ident).collect();
    let tys: Vec<&Type> = all.iter().map(|v| v.ty).collect();
    let type_names: Vec<String> = tys
        .iter()
        .map(|ty| quote!(#ty).to_string().replace(' ', ""))
        .collect();

    let tag_asserts = subtypes.iter().map(|Variant { ty, .. }| {
        let message = format!(
            "`{}` needs #[graph(odata_type = \"...\")] to be selectable",
            quote!(#ty).to_string().replace(' ', "")
        );
        quote_spanned! {ty.span()=>
            const _: () = ::core::assert!(
                <#ty as ::graph_serialization::Model>::ODATA_TYPE.is_some(),
                #message
            );
        }
    });

    let registrations = all.iter().map(|Variant { ident, ty }| {
        quote! {
            if let ::core::option::Option::Some(tag) =
                <#ty as ::graph_serialization::Model>::ODATA_TYPE
            {
                map = map.with(tag, || #name::#ident(<#ty as ::graph_serialization::Model>::new_instance()));
            }
        }
    });

    let from_impls = all.iter().map(|Variant { ident, ty }| {
        quote! {
            #[automatically_derived]
            impl ::core::convert::From<#ty> for #name {
                fn from(value: #ty) -> Self {
                    Self::#ident(value)
                }
            }
        }
    });

    let base_doc = format!("The `{}` part shared by every variant.", type_names[0]);

    quote! {
        #(#tag_asserts)*

        #[automatically_derived]
        impl #name {
            /// Tag to constructor map; untagged variants are reachable only as the fallback.
            #[must_use]
            pub fn discriminator_map() -> &'static ::graph_serialization::DiscriminatorMap<#name> {
                static MAP: ::graph_serialization::__private::LazyLock<
                    ::graph_serialization::DiscriminatorMap<#name>,
                > = ::graph_serialization::__private::LazyLock::new(|| {
                    #[allow(unused_mut)]
                    let mut map = ::graph_serialization::DiscriminatorMap::<#name>::new();
                    #(#registrations)*
                    map
                });
                &MAP
            }

            /// Pick the variant named by the node's `@odata.type`, falling back to the base type.
            ///
            /// # Errors
            /// Returns an error if the node is not an object.
            pub fn create_from_discriminator_value(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<Self, ::graph_serialization::ParseError> {
                Self::discriminator_map().resolve(node, || {
                    #name::#base_ident(<#base_ty as ::graph_serialization::Model>::new_instance())
                })
            }

            #[doc = #base_doc]
            #[must_use]
            pub fn base(&self) -> &#base_ty {
                match self {
                    #(Self::#idents(inner) => {
                        let base: &#base_ty = inner;
                        base
                    })*
                }
            }

            #[must_use]
            pub fn base_mut(&mut self) -> &mut #base_ty {
                match self {
                    #(Self::#idents(inner) => {
                        let base: &mut #base_ty = inner;
                        base
                    })*
                }
            }

            /// Name of the concrete model held.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    #(Self::#idents(_) => #type_names,)*
                }
            }

            #[must_use]
            pub fn odata_type(&self) -> ::core::option::Option<&str> {
                match self {
                    #(Self::#idents(inner) => <#tys as ::graph_serialization::Model>::odata_type(inner),)*
                }
            }
        }

        #(#from_impls)*

        #[automatically_derived]
        impl ::graph_serialization::Parsable for #name {
            fn populate(
                &mut self,
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<(), ::graph_serialization::ParseError> {
                match self {
                    #(Self::#idents(inner) => ::graph_serialization::Parsable::populate(inner, node),)*
                }
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                match self {
                    #(Self::#idents(inner) => ::graph_serialization::Parsable::serialize(inner, writer),)*
                }
            }
        }

        #[automatically_derived]
        impl ::graph_serialization::AdditionalDataHolder for #name {
            fn additional_data(&self) -> &::graph_serialization::AdditionalData {
                match self {
                    #(Self::#idents(inner) => ::graph_serialization::AdditionalDataHolder::additional_data(inner),)*
                }
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_serialization::AdditionalData {
                match self {
                    #(Self::#idents(inner) => ::graph_serialization::AdditionalDataHolder::additional_data_mut(inner),)*
                }
            }
        }

        #[automatically_derived]
        impl ::graph_serialization::FieldValue for #name {
            fn read_field(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<::core::option::Option<Self>, ::graph_serialization::ParseError> {
                node.object_value(Self::create_from_discriminator_value)
            }

            fn write_field(
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: &str,
                value: ::core::option::Option<&Self>,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::value::write_model_field(writer, key, value)
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
                node.collection_of_object_values(Self::create_from_discriminator_value)
            }

            fn write_collection(
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: &str,
                values: ::core::option::Option<&[Self]>,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::value::write_model_collection(writer, key, values)
            }
        }
    }
}
