//! The serialization-writer abstraction: the mirror of [`ParseNode`](crate::ParseNode).
//!
//! A model's serializer offers every field to the writer in declaration order;
//! the writer decides what reaches the wire. `None` means "no value" and the
//! stock writers omit it. An empty key writes a bare value (a collection
//! element or the document root).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::error::SerializationError;
use crate::parsable::{AdditionalData, Parsable};

/// Borrowed view of a single primitive, used for collection writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue<'a> {
    String(&'a str),
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Time(&'a DateTime<FixedOffset>),
    DateOnly(NaiveDate),
    TimeOnly(NaiveTime),
    Duration(&'a IsoDuration),
    Uuid(Uuid),
    Bytes(&'a [u8]),
}

pub trait SerializationWriter {
    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_string_value(&mut self, key: &str, value: Option<&str>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_bool_value(&mut self, key: &str, value: Option<bool>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_int32_value(&mut self, key: &str, value: Option<i32>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_int64_value(&mut self, key: &str, value: Option<i64>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the value is not finite or the writer cannot accept it.
    fn write_float64_value(&mut self, key: &str, value: Option<f64>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_date_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_time_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<&IsoDuration>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>)
    -> Result<(), SerializationError>;

    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError>;

    /// Write an explicit `null`.
    ///
    /// # Errors
    /// Returns an error if the writer cannot accept the value.
    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError>;

    /// Write a nested object by letting it serialize itself into a new scope.
    ///
    /// # Errors
    /// Propagates the first error raised while the object serializes itself.
    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Propagates the first element error.
    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError>;

    /// # Errors
    /// Propagates the first element error.
    fn write_collection_of_primitive_values(
        &mut self,
        key: &str,
        values: Option<&[PrimitiveValue<'_>]>,
    ) -> Result<(), SerializationError>;

    /// Write every additional-data entry as a member of the current object.
    ///
    /// # Errors
    /// Returns an error if the writer cannot accept an entry.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError>;
}
