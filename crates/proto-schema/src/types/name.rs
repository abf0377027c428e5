use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A declaration name. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a new `Name`, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if s.is_empty() {
            return Err(SchemaError::InvalidArgument(
                "name must not be empty".into(),
            ));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Name> for String {
    fn from(n: Name) -> String {
        n.0
    }
}

impl TryFrom<String> for Name {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A reference to a message or scalar type as written, e.g. `int32` or
/// `acme.Address`. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub(crate) struct TypeReference(String);

impl TypeReference {
    /// Creates a reference, naming `what` in the error for an empty string.
    pub(crate) fn new(what: &str, s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if s.is_empty() {
            return Err(SchemaError::InvalidArgument(format!(
                "{what} must not be empty"
            )));
        }
        Ok(Self(s))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TypeReference> for String {
    fn from(r: TypeReference) -> String {
        r.0
    }
}

impl TryFrom<String> for TypeReference {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new("type reference", s)
    }
}
