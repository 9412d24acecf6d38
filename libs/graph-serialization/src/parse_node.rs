//! The parse-node abstraction: a read-only cursor over one node of a decoded
//! payload tree.
//!
//! Implementations (JSON in `graph-serialization-json`) only provide the
//! primitive getters and structural accessors. Object and collection decoding
//! is written once here, on `dyn ParseNode`, so every wire format shares the
//! same factory / populate / collection semantics.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

use crate::binary::ByteArray;
use crate::duration::IsoDuration;
use crate::error::ParseError;
use crate::parsable::{Parsable, ParsableFactory};
use crate::value::{GraphEnum, Primitive};

/// A single node in a decoded payload.
///
/// Every typed getter returns `Ok(None)` for an explicit `null` and
/// `Err(ParseError::UnexpectedKind)` when the node holds a different kind of value.
pub trait ParseNode {
    /// The member `name` of an object node, or `None` if it is absent.
    ///
    /// # Errors
    /// Returns an error if this node is not an object (or `null`).
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, ParseError>;

    fn is_null(&self) -> bool;

    /// # Errors
    /// Returns an error if the node is not a string.
    fn string_value(&self) -> Result<Option<String>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a boolean.
    fn bool_value(&self) -> Result<Option<bool>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not an integral number within `i32`.
    fn int32_value(&self) -> Result<Option<i32>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not an integral number within `i64`.
    fn int64_value(&self) -> Result<Option<i64>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a number.
    fn float64_value(&self) -> Result<Option<f64>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a timestamp string.
    fn time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a `YYYY-MM-DD` string.
    fn date_only_value(&self) -> Result<Option<NaiveDate>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a `HH:MM:SS` string.
    fn time_only_value(&self) -> Result<Option<NaiveTime>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not an ISO-8601 duration string.
    fn iso_duration_value(&self) -> Result<Option<IsoDuration>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a UUID string.
    fn uuid_value(&self) -> Result<Option<Uuid>, ParseError>;

    /// # Errors
    /// Returns an error if the node is not a base64 string.
    fn byte_array_value(&self) -> Result<Option<ByteArray>, ParseError>;

    /// Members of an object node in wire order.
    ///
    /// # Errors
    /// Returns an error if the node is neither an object nor `null`.
    fn object_fields(&self) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, ParseError>;

    /// Elements of an array node in wire order.
    ///
    /// # Errors
    /// Returns an error if the node is neither an array nor `null`.
    fn collection_elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, ParseError>;

    /// The node as an untyped value, used to keep fields no model declares.
    ///
    /// # Errors
    /// Returns an error if the node cannot be represented untyped.
    fn untyped_value(&self) -> Result<Value, ParseError>;
}

impl<'n> dyn ParseNode + 'n {
    /// Decode an object node: `factory` picks the concrete type (possibly by
    /// discriminator), then the instance populates itself from the node.
    ///
    /// # Errors
    /// Propagates factory errors and the first field error of the population pass.
    pub fn object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, ParseError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut value = factory(self)?;
        value.populate(self)?;
        Ok(Some(value))
    }

    /// Decode an array of objects, each element through `factory`.
    /// `null` elements are skipped; the others keep their wire order.
    ///
    /// # Errors
    /// Returns the first element error, tagged with its index.
    pub fn collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, ParseError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if let Some(value) = element
                .object_value(factory)
                .map_err(|e| e.at_index(index))?
            {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Decode an array of primitives of kind `T`.
    ///
    /// # Errors
    /// Returns the first element error, tagged with its index.
    pub fn collection_of_primitive_values<T: Primitive>(
        &self,
    ) -> Result<Option<Vec<T>>, ParseError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if let Some(value) = T::read(&**element).map_err(|e| e.at_index(index))? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Decode a string node into an enum member.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` for a string that names no member.
    pub fn enum_value<E: GraphEnum>(&self) -> Result<Option<E>, ParseError> {
        let Some(text) = self.string_value()? else {
            return Ok(None);
        };
        match E::from_wire(&text) {
            Some(value) => Ok(Some(value)),
            None => Err(ParseError::InvalidValue {
                kind: E::TYPE_NAME,
                value: text,
            }),
        }
    }

    /// Decode an array of enum members.
    ///
    /// # Errors
    /// Returns the first element error, tagged with its index.
    pub fn collection_of_enum_values<E: GraphEnum>(&self) -> Result<Option<Vec<E>>, ParseError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if let Some(value) = element.enum_value::<E>().map_err(|e| e.at_index(index))? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}
