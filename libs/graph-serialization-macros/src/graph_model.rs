use std::collections::HashSet;

use heck::ToLowerCamelCase;
use proc_macro2::TokenStream;
use proc_macro_error2::{abort, emit_error};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use crate::attrs::{parse_container_attrs, parse_field_attrs};
use crate::types::{Getter, getter_for, option_inner};

const ODATA_TYPE_FIELD: &str = "odata_type";
const ODATA_TYPE_KEY: &str = "@odata.type";

/// One `Option<T>` property of the model.
struct Property<'a> {
    ident: &'a Ident,
    /// `T` of `Option<T>`
    ty: &'a Type,
    wire: String,
}

struct Parent<'a> {
    ident: &'a Ident,
    ty: &'a Type,
}

fn default_wire_name(ident: &Ident) -> String {
    let name = ident.unraw().to_string();
    if name == ODATA_TYPE_FIELD {
        ODATA_TYPE_KEY.to_owned()
    } else {
        name.to_lower_camel_case()
    }
}

#[allow(clippy::too_many_lines)]
pub fn expand_derive_graph_model(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        abort!(input.generics, "GraphModel does not support generic types");
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => abort!(input, "GraphModel only supports structs with named fields"),
        },
        _ => abort!(input, "GraphModel can only be derived for structs"),
    };

    let container = parse_container_attrs(&input.attrs);

    let mut parent: Option<Parent<'_>> = None;
    let mut additional: Option<&Ident> = None;
    let mut skipped: Vec<&Ident> = Vec::new();
    let mut properties: Vec<Property<'_>> = Vec::new();
    let mut wire_names = HashSet::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            abort!(field, "GraphModel requires named fields");
        };
        let attrs = parse_field_attrs(&field.attrs);

        if attrs.parent {
            if parent.is_some() {
                emit_error!(ident, "only one field can be #[graph(parent)]");
            }
            parent = Some(Parent { ident, ty: &field.ty });
            continue;
        }
        if attrs.additional_data {
            if additional.is_some() {
                emit_error!(ident, "only one field can be #[graph(additional_data)]");
            }
            additional = Some(ident);
            continue;
        }
        if attrs.skip {
            skipped.push(ident);
            continue;
        }

        let Some(inner) = option_inner(&field.ty) else {
            emit_error!(field.ty, "graph properties must be `Option<T>`");
            continue;
        };
        let wire = attrs
            .rename
            .map_or_else(|| default_wire_name(ident), |lit| lit.value());
        if !wire_names.insert(wire.clone()) {
            emit_error!(ident, "duplicate wire name `{}`", wire);
        }
        properties.push(Property {
            ident,
            ty: inner,
            wire,
        });
    }

    match (&parent, additional) {
        (Some(_), Some(field)) => emit_error!(
            field,
            "additional data is held by the root type; a model with a #[graph(parent)] cannot declare its own"
        ),
        (None, None) => abort!(
            name,
            "GraphModel needs either a #[graph(parent)] field or a #[graph(additional_data)] field"
        ),
        _ => {}
    }

    let odata_field = properties
        .iter()
        .find(|p| p.wire == ODATA_TYPE_KEY)
        .map(|p| p.ident);

    let tag = container.odata_type.as_ref();
    let constructor = expand_constructor(
        name,
        tag,
        parent.as_ref(),
        additional,
        &skipped,
        &properties,
    );
    let accessors = expand_accessors(&properties);
    let model_impl = expand_model_impl(name, tag, parent.as_ref(), odata_field, &properties);
    let holder_impl = expand_holder_impl(name, parent.as_ref(), additional);
    let deref_impl = parent.as_ref().map(|p| expand_deref(name, p));

    quote! {
        #[automatically_derived]
        impl #name {
            #constructor

            /// Factory used when this type appears as a nested or collection value.
            #[allow(clippy::unnecessary_wraps)]
            pub fn create_from_discriminator_value(
                _node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<Self, ::graph_serialization::ParseError> {
                ::core::result::Result::Ok(Self::new())
            }

            #accessors
        }

        #[automatically_derived]
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::new()
            }
        }

        #model_impl
        #holder_impl
        #deref_impl

        #[automatically_derived]
        impl ::graph_serialization::Parsable for #name {
            fn populate(
                &mut self,
                node: &dyn ::graph_serialization::ParseNode,
            ) -> ::core::result::Result<(), ::graph_serialization::ParseError> {
                ::graph_serialization::populate_model(self, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::serialize_model(self, writer)
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

fn expand_constructor(
    name: &Ident,
    tag: Option<&LitStr>,
    parent: Option<&Parent<'_>>,
    additional: Option<&Ident>,
    skipped: &[&Ident],
    properties: &[Property<'_>],
) -> TokenStream {
    let parent_init = parent.map(|Parent { ident, ty }| {
        quote! { #ident: <#ty as ::graph_serialization::Model>::new_instance(), }
    });
    let additional_init = additional.map(|ident| {
        quote! { #ident: ::graph_serialization::AdditionalData::new(), }
    });
    let property_idents = properties.iter().map(|p| p.ident);

    let fields = quote! {
        #parent_init
        #additional_init
        #(#skipped: ::core::default::Default::default(),)*
        #(#property_idents: ::core::option::Option::None,)*
    };

    let doc = format!("Creates an empty `{name}`; only the embedded parent is initialised.");

    // Subtypes announce themselves; root types leave `@odata.type` unset.
    match (parent, tag) {
        (Some(_), Some(tag)) => quote! {
            #[doc = #doc]
            #[must_use]
            pub fn new() -> Self {
                let mut model = Self { #fields };
                <Self as ::graph_serialization::Model>::set_odata_type(
                    &mut model,
                    ::core::option::Option::Some(::std::string::String::from(#tag)),
                );
                model
            }
        },
        _ => quote! {
            #[doc = #doc]
            #[must_use]
            pub fn new() -> Self {
                Self { #fields }
            }
        },
    }
}

fn expand_accessors(properties: &[Property<'_>]) -> TokenStream {
    let accessors = properties.iter().map(|Property { ident, ty, wire }| {
        let setter = format_ident!("set_{}", ident.unraw());
        let get_doc = format!("Gets the `{wire}` property.");
        let set_doc = format!("Sets the `{wire}` property.");
        let (ret, body) = match getter_for(ty) {
            Getter::Copy => (quote! { #ty }, quote! { self.#ident }),
            Getter::Str => (quote! { &str }, quote! { self.#ident.as_deref() }),
            Getter::Slice(element) => (quote! { &[#element] }, quote! { self.#ident.as_deref() }),
            Getter::Ref => (quote! { &#ty }, quote! { self.#ident.as_ref() }),
        };
        quote! {
            #[doc = #get_doc]
            #[must_use]
            pub fn #ident(&self) -> ::core::option::Option<#ret> {
                #body
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, value: ::core::option::Option<#ty>) {
                self.#ident = value;
            }
        }
    });
    quote! { #(#accessors)* }
}

fn expand_model_impl(
    name: &Ident,
    tag: Option<&LitStr>,
    parent: Option<&Parent<'_>>,
    odata_field: Option<&Ident>,
    properties: &[Property<'_>],
) -> TokenStream {
    let odata_type_const = match tag {
        Some(tag) => quote! { ::core::option::Option::Some(#tag) },
        None => quote! { ::core::option::Option::None },
    };

    let registry_start = match parent {
        Some(Parent { ident, ty }) => quote! {
            fn project(model: &mut #name) -> &mut #ty {
                &mut model.#ident
            }
            #[allow(unused_mut)]
            let mut registry = ::graph_serialization::FieldDeserializers::inherit(
                <#ty as ::graph_serialization::Model>::field_deserializers(),
                project,
            );
        },
        None => quote! {
            #[allow(unused_mut)]
            let mut registry = ::graph_serialization::FieldDeserializers::<#name>::new();
        },
    };

    let inserts = properties.iter().map(|Property { ident, ty, wire }| {
        quote! {
            registry.insert(
                #wire,
                |model: &mut #name, node: &dyn ::graph_serialization::ParseNode| {
                    if let ::core::option::Option::Some(value) =
                        <#ty as ::graph_serialization::FieldValue>::read_field(node)?
                    {
                        model.#ident = ::core::option::Option::Some(value);
                    }
                    ::core::result::Result::Ok(())
                },
            );
        }
    });

    let parent_writes = parent.map(|Parent { ident, ty }| {
        quote! {
            <#ty as ::graph_serialization::Model>::serialize_fields(&self.#ident, writer)?;
        }
    });
    let writes = properties.iter().map(|Property { ident, ty, wire }| {
        quote! {
            <#ty as ::graph_serialization::FieldValue>::write_field(writer, #wire, self.#ident.as_ref())?;
        }
    });

    let (get_odata_type, set_odata_type) = match (odata_field, parent) {
        (Some(field), _) => (
            quote! { self.#field.as_deref() },
            quote! { self.#field = value; },
        ),
        (None, Some(Parent { ident, ty })) => (
            quote! { <#ty as ::graph_serialization::Model>::odata_type(&self.#ident) },
            quote! { <#ty as ::graph_serialization::Model>::set_odata_type(&mut self.#ident, value); },
        ),
        (None, None) => (
            quote! { ::core::option::Option::None },
            quote! { let _ = value; },
        ),
    };

    quote! {
        #[automatically_derived]
        impl ::graph_serialization::Model for #name {
            const ODATA_TYPE: ::core::option::Option<&'static str> = #odata_type_const;

            fn new_instance() -> Self {
                Self::new()
            }

            fn field_deserializers() -> &'static ::graph_serialization::FieldDeserializers<Self> {
                static REGISTRY: ::graph_serialization::__private::LazyLock<
                    ::graph_serialization::FieldDeserializers<#name>,
                > = ::graph_serialization::__private::LazyLock::new(|| {
                    #registry_start
                    #(#inserts)*
                    registry
                });
                &REGISTRY
            }

            fn serialize_fields(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> ::core::result::Result<(), ::graph_serialization::SerializationError> {
                #parent_writes
                #(#writes)*
                ::core::result::Result::Ok(())
            }

            fn odata_type(&self) -> ::core::option::Option<&str> {
                #get_odata_type
            }

            fn set_odata_type(&mut self, value: ::core::option::Option<::std::string::String>) {
                #set_odata_type
            }
        }
    }
}

fn expand_holder_impl(
    name: &Ident,
    parent: Option<&Parent<'_>>,
    additional: Option<&Ident>,
) -> TokenStream {
    let (get, get_mut) = match (additional, parent) {
        (Some(field), _) => (quote! { &self.#field }, quote! { &mut self.#field }),
        (None, Some(Parent { ident, ty })) => (
            quote! { <#ty as ::graph_serialization::AdditionalDataHolder>::additional_data(&self.#ident) },
            quote! { <#ty as ::graph_serialization::AdditionalDataHolder>::additional_data_mut(&mut self.#ident) },
        ),
        // Rejected while collecting fields.
        (None, None) => return TokenStream::new(),
    };
    quote! {
        #[automatically_derived]
        impl ::graph_serialization::AdditionalDataHolder for #name {
            fn additional_data(&self) -> &::graph_serialization::AdditionalData {
                #get
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_serialization::AdditionalData {
                #get_mut
            }
        }
    }
}

fn expand_deref(name: &Ident, parent: &Parent<'_>) -> TokenStream {
    let Parent { ident, ty } = parent;
    quote! {
        #[automatically_derived]
        impl ::core::ops::Deref for #name {
            type Target = #ty;

            fn deref(&self) -> &#ty {
                &self.#ident
            }
        }

        #[automatically_derived]
        impl ::core::ops::DerefMut for #name {
            fn deref_mut(&mut self) -> &mut #ty {
                &mut self.#ident
            }
        }
    }
}
