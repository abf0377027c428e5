use std::fmt;

/// Errors that occur when constructing or validating declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// A required constructor argument was missing or empty.
    InvalidArgument(String),
    /// Extension range start is greater than its end.
    InvalidExtensionRange { start: i32, end: i32 },
    /// Two enum values in one validation scope share a tag.
    DuplicateEnumValueTag(i32),
    /// Two fields of one message share a tag.
    DuplicateFieldTag { message: String, tag: i32 },
}

impl SchemaError {
    /// Returns the conflicting tag for the duplicate-tag variants.
    pub fn duplicate_tag(&self) -> Option<i32> {
        match self {
            Self::DuplicateEnumValueTag(tag) | Self::DuplicateFieldTag { tag, .. } => Some(*tag),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
            Self::InvalidExtensionRange { start, end } => {
                write!(f, "invalid extension range: start ({start}) > end ({end})")
            }
            Self::DuplicateEnumValueTag(tag) => write!(f, "duplicate enum value tag: {tag}"),
            Self::DuplicateFieldTag { message, tag } => {
                write!(f, "duplicate field tag {tag} in message '{message}'")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
