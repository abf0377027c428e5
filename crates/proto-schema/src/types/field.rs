use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::label::Label;
use super::name::{Name, TypeReference};
use super::option_element::{OptionElement, OptionValue};

/// A message field: `[label] type name = tag [options];`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    label: Label,
    type_name: TypeReference,
    name: Name,
    tag: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
}

impl Field {
    /// Creates a new field. `type_name` is the type reference as written,
    /// e.g. `int32` or `acme.Address`.
    pub fn new(
        label: Label,
        type_name: impl Into<String>,
        name: impl Into<String>,
        tag: i32,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            label,
            type_name: TypeReference::new("field type", type_name)?,
            name: Name::new(name)?,
            tag,
            documentation: documentation.into(),
            options,
        })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn options(&self) -> &[OptionElement] {
        &self.options
    }

    /// Returns true if `[deprecated = true]` is set.
    pub fn is_deprecated(&self) -> bool {
        OptionElement::find(&self.options, "deprecated")
            .is_some_and(|o| matches!(o.value(), OptionValue::Boolean(true)))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_field(self))
    }
}

/// A `oneof` group. Its fields share the tag scope of the enclosing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOf {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl OneOf {
    pub fn new(
        name: impl Into<String>,
        documentation: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            documentation: documentation.into(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl std::fmt::Display for OneOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_one_of(self))
    }
}
