//! Error types for decoding from parse nodes and encoding through writers.
//!
//! A decode fails on the wrong kind of wire value (`UnexpectedKind`) or on a
//! value that cannot be interpreted (`InvalidValue`, `OutOfRange`). Failures in
//! nested fields and elements are wrapped so the path survives.

/// Failure while extracting a typed value from a parse node.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid {kind} value `{value}`")]
    InvalidValue { kind: &'static str, value: String },

    #[error("{kind} value `{value}` is out of range")]
    OutOfRange { kind: &'static str, value: String },

    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ParseError>,
    },

    #[error("element [{index}]: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },

    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    /// Wrap this error with the wire name of the field being decoded.
    #[must_use]
    pub fn in_field(self, field: &str) -> Self {
        ParseError::Field {
            field: field.to_owned(),
            source: Box::new(self),
        }
    }

    /// Wrap this error with the position of the collection element being decoded.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        ParseError::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Dotted path of field names and indices leading to the innermost error,
    /// e.g. `value[2].sourceFilter.includeApplications`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                ParseError::Field { field, source } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(field);
                    current = source;
                }
                ParseError::Element { index, source } => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                    current = source;
                }
                _ => return path,
            }
        }
    }

    /// The innermost error, with all field/element wrapping removed.
    #[must_use]
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::Field { source, .. } | ParseError::Element { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// Failure while projecting a model into a serialization writer.
#[derive(thiserror::Error, Debug)]
pub enum SerializationError {
    #[error("cannot write `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("object members require a non-empty key")]
    MissingKey,

    #[error("a root value has already been written")]
    RootAlreadyWritten,

    #[error("unbalanced object/collection nesting in writer")]
    UnbalancedNesting,

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}
