use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::field::Field;
use super::name::Name;

/// The largest field tag the wire format allows, written `max` in ranges.
pub const MAX_TAG: i32 = (1 << 29) - 1;

/// An `extensions start to end;` declaration inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExtensionRange {
    #[serde(skip_serializing_if = "String::is_empty")]
    documentation: String,
    start: i32,
    end: i32,
}

impl ExtensionRange {
    /// Creates an inclusive tag range, validating start <= end.
    pub fn new(documentation: impl Into<String>, start: i32, end: i32) -> Result<Self, SchemaError> {
        if start > end {
            return Err(SchemaError::InvalidExtensionRange { start, end });
        }
        Ok(Self {
            documentation: documentation.into(),
            start,
            end,
        })
    }

    /// Creates a range covering a single tag.
    pub fn single(documentation: impl Into<String>, tag: i32) -> Self {
        Self {
            documentation: documentation.into(),
            start: tag,
            end: tag,
        }
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns true if `tag` falls inside this range.
    pub fn contains(&self, tag: i32) -> bool {
        (self.start..=self.end).contains(&tag)
    }
}

impl<'de> Deserialize<'de> for ExtensionRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            documentation: String,
            start: i32,
            end: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.documentation, raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExtensionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_extension_range(self))
    }
}

/// An `extend Target { ... }` block adding fields to another message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendDeclaration {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    qualified_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl ExtendDeclaration {
    /// `name` is the extended type as written; `qualified_name` is the
    /// resolved target used to match it against a message.
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            qualified_name: qualified_name.into(),
            documentation: documentation.into(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl std::fmt::Display for ExtendDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_extend(self))
    }
}
