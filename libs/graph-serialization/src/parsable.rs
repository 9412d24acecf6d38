//! Model-side contracts: what a DTO must provide to be decoded from a
//! [`ParseNode`] and projected into a [`SerializationWriter`].

use serde_json::{Map, Value};

use crate::error::{ParseError, SerializationError};
use crate::parse_node::ParseNode;
use crate::registry::FieldDeserializers;
use crate::writer::SerializationWriter;

/// Wire members that no field deserializer claimed, in wire order.
pub type AdditionalData = Map<String, Value>;

/// Reserved member carrying the discriminator tag.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Builds an empty instance for a node, possibly choosing a subtype by discriminator.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, ParseError>;

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Object-safe half of the model contract.
pub trait Parsable {
    /// Populate this instance from an object node.
    ///
    /// # Errors
    /// Returns the first field error; the instance may be partially populated.
    fn populate(&mut self, node: &dyn ParseNode) -> Result<(), ParseError>;

    /// Write this instance as the members of the writer's current object.
    ///
    /// # Errors
    /// Returns the first writer error; later fields are not offered.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

/// A concrete model type. Implemented by `#[derive(GraphModel)]`.
pub trait Model: Parsable + AdditionalDataHolder + Sized + 'static {
    /// The `@odata.type` tag of this type, if the schema gives it one.
    const ODATA_TYPE: Option<&'static str>;

    fn new_instance() -> Self;

    /// Wire name -> deserializer, including every entry inherited from the parent.
    fn field_deserializers() -> &'static FieldDeserializers<Self>;

    /// Write the parent's fields, then this level's fields, in declaration order.
    ///
    /// # Errors
    /// Returns the first writer error.
    fn serialize_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError>;

    fn odata_type(&self) -> Option<&str>;

    fn set_odata_type(&mut self, value: Option<String>);
}

/// Apply `T`'s field deserializers to every member of `node`, in wire order.
///
/// Members without a deserializer are kept verbatim (including `null`) in the
/// model's additional data.
///
/// # Errors
/// Returns the first deserializer error, wrapped with the member name.
pub fn populate_model<T: Model>(target: &mut T, node: &dyn ParseNode) -> Result<(), ParseError> {
    let Some(fields) = node.object_fields()? else {
        return Ok(());
    };
    let registry = T::field_deserializers();
    for (name, child) in fields {
        if let Some(deserializer) = registry.get(name) {
            deserializer(target, &*child).map_err(|e| e.in_field(name))?;
        } else {
            let value = child.untyped_value().map_err(|e| e.in_field(name))?;
            tracing::trace!(field = name, "keeping unmapped member in additional data");
            target.additional_data_mut().insert(name.to_owned(), value);
        }
    }
    Ok(())
}

/// Serialize a model with its additional data appended after the declared fields.
///
/// # Errors
/// Returns the first writer error.
pub fn serialize_model<T: Model>(
    model: &T,
    writer: &mut dyn SerializationWriter,
) -> Result<(), SerializationError> {
    model.serialize_fields(writer)?;
    writer.write_additional_data(model.additional_data())
}
