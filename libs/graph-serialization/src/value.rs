//! How each kind of property value is read from a parse node and offered to a writer.
//!
//! Generated field deserializers and serializers only ever call
//! [`FieldValue::read_field`] and [`FieldValue::write_field`]; the impls below
//! route primitives to the matching typed getter/setter, and the derives
//! implement the same traits for models and enums.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::binary::ByteArray;
use crate::duration::IsoDuration;
use crate::error::{ParseError, SerializationError};
use crate::parsable::Parsable;
use crate::parse_node::ParseNode;
use crate::writer::{PrimitiveValue, SerializationWriter};

/// A value that can occupy a model property.
pub trait FieldValue: Sized {
    /// # Errors
    /// Returns an error if the node holds the wrong kind of value.
    fn read_field(node: &dyn ParseNode) -> Result<Option<Self>, ParseError>;

    /// # Errors
    /// Returns the writer's error.
    fn write_field(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> Result<(), SerializationError>;
}

/// A value that can be an element of a list property.
pub trait CollectionElement: Sized {
    /// # Errors
    /// Returns the first element error, tagged with its index.
    fn read_collection(node: &dyn ParseNode) -> Result<Option<Vec<Self>>, ParseError>;

    /// # Errors
    /// Returns the writer's error.
    fn write_collection(
        writer: &mut dyn SerializationWriter,
        key: &str,
        values: Option<&[Self]>,
    ) -> Result<(), SerializationError>;
}

impl<T: CollectionElement> FieldValue for Vec<T> {
    fn read_field(node: &dyn ParseNode) -> Result<Option<Self>, ParseError> {
        T::read_collection(node)
    }

    fn write_field(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> Result<(), SerializationError> {
        T::write_collection(writer, key, value.map(Vec::as_slice))
    }
}

/// A scalar with a dedicated parse-node getter.
pub trait Primitive: Sized {
    /// Name used in error messages and by the collection decoder.
    const KIND: &'static str;

    /// # Errors
    /// Returns an error if the node holds the wrong kind of value.
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, ParseError>;

    fn as_primitive(&self) -> PrimitiveValue<'_>;
}

/// A schema enumeration, carried as a string on the wire.
pub trait GraphEnum: Sized + Copy + 'static {
    const TYPE_NAME: &'static str;
    const VARIANTS: &'static [Self];

    fn from_wire(text: &str) -> Option<Self>;

    fn as_wire(&self) -> &'static str;
}

macro_rules! primitive {
    ($ty:ty, $kind:literal, $getter:ident, $setter:ident, |$v:ident| $arg:expr, |$s:ident| $view:expr) => {
        impl Primitive for $ty {
            const KIND: &'static str = $kind;

            fn read(node: &dyn ParseNode) -> Result<Option<Self>, ParseError> {
                node.$getter()
            }

            fn as_primitive(&self) -> PrimitiveValue<'_> {
                let $s = self;
                $view
            }
        }

        impl FieldValue for $ty {
            fn read_field(node: &dyn ParseNode) -> Result<Option<Self>, ParseError> {
                node.$getter()
            }

            fn write_field(
                writer: &mut dyn SerializationWriter,
                key: &str,
                value: Option<&Self>,
            ) -> Result<(), SerializationError> {
                let $v = value;
                writer.$setter(key, $arg)
            }
        }

        impl CollectionElement for $ty {
            fn read_collection(node: &dyn ParseNode) -> Result<Option<Vec<Self>>, ParseError> {
                node.collection_of_primitive_values::<$ty>()
            }

            fn write_collection(
                writer: &mut dyn SerializationWriter,
                key: &str,
                values: Option<&[Self]>,
            ) -> Result<(), SerializationError> {
                write_primitive_collection(writer, key, values)
            }
        }
    };
}

primitive!(String, "string", string_value, write_string_value,
    |v| v.map(String::as_str), |s| PrimitiveValue::String(s.as_str()));
primitive!(bool, "boolean", bool_value, write_bool_value,
    |v| v.copied(), |s| PrimitiveValue::Bool(*s));
primitive!(i32, "int32", int32_value, write_int32_value,
    |v| v.copied(), |s| PrimitiveValue::Int32(*s));
primitive!(i64, "int64", int64_value, write_int64_value,
    |v| v.copied(), |s| PrimitiveValue::Int64(*s));
primitive!(f64, "float64", float64_value, write_float64_value,
    |v| v.copied(), |s| PrimitiveValue::Float64(*s));
primitive!(DateTime<FixedOffset>, "timestamp", time_value, write_time_value,
    |v| v, |s| PrimitiveValue::Time(s));
primitive!(NaiveDate, "date", date_only_value, write_date_only_value,
    |v| v.copied(), |s| PrimitiveValue::DateOnly(*s));
primitive!(NaiveTime, "time", time_only_value, write_time_only_value,
    |v| v.copied(), |s| PrimitiveValue::TimeOnly(*s));
primitive!(IsoDuration, "duration", iso_duration_value, write_iso_duration_value,
    |v| v, |s| PrimitiveValue::Duration(s));
primitive!(Uuid, "uuid", uuid_value, write_uuid_value,
    |v| v.copied(), |s| PrimitiveValue::Uuid(*s));
primitive!(ByteArray, "base64", byte_array_value, write_byte_array_value,
    |v| v.map(|bytes| bytes.0.as_slice()), |s| PrimitiveValue::Bytes(&s.0));

fn write_primitive_collection<T: Primitive>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[T]>,
) -> Result<(), SerializationError> {
    let views: Option<Vec<PrimitiveValue<'_>>> =
        values.map(|values| values.iter().map(Primitive::as_primitive).collect());
    writer.write_collection_of_primitive_values(key, views.as_deref())
}

/// Offer a nested model to the writer.
///
/// # Errors
/// Returns the writer's error.
pub fn write_model_field<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    value: Option<&T>,
) -> Result<(), SerializationError> {
    writer.write_object_value(key, value.map(|v| v as &dyn Parsable))
}

/// Offer a list of nested models to the writer, in order.
///
/// # Errors
/// Returns the writer's error.
pub fn write_model_collection<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[T]>,
) -> Result<(), SerializationError> {
    let items: Option<Vec<&dyn Parsable>> =
        values.map(|values| values.iter().map(|v| v as &dyn Parsable).collect());
    writer.write_collection_of_object_values(key, items.as_deref())
}

/// Offer an enum member to the writer as its wire string.
///
/// # Errors
/// Returns the writer's error.
pub fn write_enum_field<E: GraphEnum>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    value: Option<&E>,
) -> Result<(), SerializationError> {
    writer.write_string_value(key, value.map(GraphEnum::as_wire))
}

/// Offer a list of enum members to the writer as wire strings.
///
/// # Errors
/// Returns the writer's error.
pub fn write_enum_collection<E: GraphEnum>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[E]>,
) -> Result<(), SerializationError> {
    let views: Option<Vec<PrimitiveValue<'_>>> = values.map(|values| {
        values
            .iter()
            .map(|v| PrimitiveValue::String(v.as_wire()))
            .collect()
    });
    writer.write_collection_of_primitive_values(key, views.as_deref())
}
