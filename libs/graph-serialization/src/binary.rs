//! Binary blobs, carried as standard padded base64 on the wire.

use std::ops::Deref;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ParseError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteArray(pub Vec<u8>);

impl ByteArray {
    /// Decode base64 text as found on the wire.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` if the text is not valid base64.
    pub fn from_base64(text: &str) -> Result<Self, ParseError> {
        STANDARD
            .decode(text)
            .map(ByteArray)
            .map_err(|_| ParseError::InvalidValue {
                kind: "base64",
                value: text.to_owned(),
            })
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteArray {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        ByteArray(bytes)
    }
}

impl From<&[u8]> for ByteArray {
    fn from(bytes: &[u8]) -> Self {
        ByteArray(bytes.to_vec())
    }
}
