use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::extension_range::ExtensionRange;
use super::field::{Field, OneOf};
use super::name::Name;
use super::option_element::OptionElement;
use super::proto_type::Type;

/// A `message` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageType {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    qualified_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    one_ofs: Vec<OneOf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extensions: Vec<ExtensionRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nested_types: Vec<Type>,
}

impl MessageType {
    /// Creates a new message type with no oneofs or extension ranges.
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
        fields: Vec<Field>,
        nested_types: Vec<Type>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            qualified_name: qualified_name.into(),
            documentation: documentation.into(),
            options,
            fields,
            one_ofs: Vec::new(),
            extensions: Vec::new(),
            nested_types,
        })
    }

    /// Returns this message with `one_ofs` as its oneof groups.
    pub fn with_one_ofs(self, one_ofs: Vec<OneOf>) -> Self {
        Self { one_ofs, ..self }
    }

    /// Returns this message with `extensions` as its extension ranges.
    pub fn with_extensions(self, extensions: Vec<ExtensionRange>) -> Self {
        Self { extensions, ..self }
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

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn one_ofs(&self) -> &[OneOf] {
        &self.one_ofs
    }

    pub fn extensions(&self) -> &[ExtensionRange] {
        &self.extensions
    }

    pub fn nested_types(&self) -> &[Type] {
        &self.nested_types
    }

    /// Looks up a field by name, including oneof members.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.all_fields().find(|f| f.name() == name)
    }

    /// Iterates the message's own fields followed by every oneof member.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .chain(self.one_ofs.iter().flat_map(|o| o.fields()))
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_message_type(self))
    }
}
