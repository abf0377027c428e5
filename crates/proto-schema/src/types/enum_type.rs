use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::name::Name;
use super::option_element::{OptionElement, OptionValue};

/// A member of an enum: `NAME = tag [options];`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    name: Name,
    tag: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
}

impl EnumValue {
    /// Creates a new enum value. Pass `""` for no documentation.
    pub fn new(
        name: impl Into<String>,
        tag: i32,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            tag,
            documentation: documentation.into(),
            options,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    /// Returns the documentation text; empty when there is none.
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn options(&self) -> &[OptionElement] {
        &self.options
    }
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_enum_value(self))
    }
}

/// An `enum` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    qualified_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<EnumValue>,
}

impl EnumType {
    /// Creates a new enum type. `values` keep the order given here.
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
        values: Vec<EnumValue>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            qualified_name: qualified_name.into(),
            documentation: documentation.into(),
            options,
            values,
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

    pub fn options(&self) -> &[OptionElement] {
        &self.options
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    /// Looks up a value by name.
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name() == name)
    }

    /// Returns true if `option allow_alias = true;` is set, permitting
    /// several values to share a tag.
    pub fn allows_alias(&self) -> bool {
        matches!(
            OptionElement::find(&self.options, "allow_alias").map(OptionElement::value),
            Some(OptionValue::Boolean(true))
        )
    }
}

impl std::fmt::Display for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_enum_type(self))
    }
}
