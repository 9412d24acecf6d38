//! # graph-serialization-macros
//!
//! Derives that expand the per-type Graph model template:
//! - `GraphModel`: factory, accessors, field-deserializer registry and serializer for a DTO struct
//! - `GraphEnum`: wire-name mapping for a schema enumeration
//! - `GraphPolymorphic`: discriminator-based dispatch over a family of model types
//!
//! Generated code refers to `::graph_serialization`, so crates using these
//! derives must depend on `graph-serialization` directly.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod graph_enum;
mod graph_model;
mod graph_polymorphic;
mod types;

/// Derive the model template for a struct whose properties are all `Option<T>`.
///
/// # Example
///
/// ```ignore
/// use graph_serialization::AdditionalData;
/// use graph_serialization_macros::GraphModel;
///
/// #[derive(Debug, Clone, PartialEq, GraphModel)]
/// pub struct AppDataLocation {
///     #[graph(additional_data)]
///     additional_data: AdditionalData,
///     app_id: Option<String>,
///     is_default: Option<bool>,
///     odata_type: Option<String>,
/// }
///
/// #[derive(Debug, Clone, PartialEq, GraphModel)]
/// #[graph(odata_type = "#microsoft.graph.deviceShellScript")]
/// pub struct DeviceShellScript {
///     #[graph(parent)]
///     entity: Entity,
///     display_name: Option<String>,
/// }
/// ```
///
/// Field attributes: `parent`, `additional_data`, `rename = "wireName"`, `skip`.
/// A field named `odata_type` maps to `@odata.type`; every other field maps to
/// the lowerCamelCase form of its name.
#[proc_macro_derive(GraphModel, attributes(graph))]
#[proc_macro_error]
pub fn derive_graph_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    graph_model::expand_derive_graph_model(&input).into()
}

/// Derive wire-name mapping for a fieldless enum.
///
/// Variants map to the lowerCamelCase form of their name unless renamed with
/// `#[graph(rename = "...")]`.
#[proc_macro_derive(GraphEnum, attributes(graph))]
#[proc_macro_error]
pub fn derive_graph_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    graph_enum::expand_derive_graph_enum(&input).into()
}

/// Derive discriminator dispatch for an enum of single-field variants.
///
/// Exactly one variant is marked `#[graph(base)]`; it is constructed when the
/// payload carries no known `@odata.type` tag. Every other variant's model must
/// declare `#[graph(odata_type = "...")]`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, GraphPolymorphic)]
/// pub enum AuthenticationListenerKind {
///     #[graph(base)]
///     AuthenticationListener(AuthenticationListener),
///     InvokeUserFlowListener(InvokeUserFlowListener),
/// }
/// ```
///
/// A subtype without a tag could never be selected, so it fails to compile:
///
/// ```compile_fail
/// use graph_serialization::AdditionalData;
/// use graph_serialization_macros::{GraphModel, GraphPolymorphic};
///
/// #[derive(GraphModel)]
/// #[graph(odata_type = "#test.listener")]
/// pub struct Listener {
///     #[graph(additional_data)]
///     additional_data: AdditionalData,
///     odata_type: Option<String>,
/// }
///
/// #[derive(GraphModel)]
/// pub struct UntaggedListener {
///     #[graph(parent)]
///     listener: Listener,
///     priority: Option<i32>,
/// }
///
/// #[derive(GraphPolymorphic)]
/// pub enum ListenerKind {
///     #[graph(base)]
///     Listener(Listener),
///     Untagged(UntaggedListener),
/// }
/// ```
#[proc_macro_derive(GraphPolymorphic, attributes(graph))]
#[proc_macro_error]
pub fn derive_graph_polymorphic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    graph_polymorphic::expand_derive_graph_polymorphic(&input).into()
}
