use serde::{Deserialize, Serialize};

use crate::printer;

use super::enum_type::EnumType;
use super::message_type::MessageType;
use super::option_element::OptionElement;

/// A named type declaration: either an enum or a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Type {
    Enum(EnumType),
    Message(MessageType),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => e.name(),
            Self::Message(m) => m.name(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        match self {
            Self::Enum(e) => e.qualified_name(),
            Self::Message(m) => m.qualified_name(),
        }
    }

    pub fn documentation(&self) -> &str {
        match self {
            Self::Enum(e) => e.documentation(),
            Self::Message(m) => m.documentation(),
        }
    }

    pub fn options(&self) -> &[OptionElement] {
        match self {
            Self::Enum(e) => e.options(),
            Self::Message(m) => m.options(),
        }
    }

    /// Returns the types declared inside this one. Enums have none.
    pub fn nested_types(&self) -> &[Type] {
        match self {
            Self::Enum(_) => &[],
            Self::Message(m) => m.nested_types(),
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Message(_) => None,
        }
    }

    pub fn as_message(&self) -> Option<&MessageType> {
        match self {
            Self::Message(m) => Some(m),
            Self::Enum(_) => None,
        }
    }

    /// Visits this type and every type nested inside it, depth first,
    /// parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Type)) {
        visit(self);
        for nested in self.nested_types() {
            nested.walk(visit);
        }
    }
}

impl From<EnumType> for Type {
    fn from(e: EnumType) -> Self {
        Self::Enum(e)
    }
}

impl From<MessageType> for Type {
    fn from(m: MessageType) -> Self {
        Self::Message(m)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_type(self))
    }
}
