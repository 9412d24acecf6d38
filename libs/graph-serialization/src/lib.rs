#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Wire-format independent core for Graph beta models.
//!
//! A payload is decoded by handing a [`ParseNode`] to a factory (which may pick
//! a subtype through a [`DiscriminatorMap`]) and letting the instance populate
//! itself through its [`FieldDeserializers`]. Encoding is the mirror: the model
//! offers its fields, parent first, to a [`SerializationWriter`].
pub mod binary;
pub mod discriminator;
pub mod duration;
pub mod error;
pub mod parsable;
pub mod parse_node;
pub mod registry;
pub mod value;
pub mod writer;

#[cfg(test)]
mod test_support;

pub use binary::ByteArray;
pub use discriminator::DiscriminatorMap;
pub use duration::IsoDuration;
pub use error::{ParseError, SerializationError};
pub use parsable::{
    AdditionalData, AdditionalDataHolder, Model, ODATA_TYPE_KEY, Parsable, ParsableFactory,
    populate_model, serialize_model,
};
pub use parse_node::ParseNode;
pub use registry::{FieldDeserializer, FieldDeserializers};
pub use value::{CollectionElement, FieldValue, GraphEnum, Primitive};
pub use writer::{PrimitiveValue, SerializationWriter};

/// Re-exported for generated code.
#[doc(hidden)]
pub mod __private {
    pub use std::sync::LazyLock;
}
