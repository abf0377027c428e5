use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::name::Name;

/// The value side of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
#[non_exhaustive]
pub enum OptionValue {
    /// A string literal, rendered double-quoted.
    String(String),
    /// A bare identifier such as an enum constant (`SPEED`), rendered raw.
    Identifier(String),
    Integer(i64),
    /// A float literal, kept as written so that rendering is exact.
    Float(String),
    Boolean(bool),
    /// A sub-field of a message-typed option: `(my_opt).field = value`.
    Option(Box<OptionElement>),
    /// A nested option set in text-format form: `{ key: value }`.
    Map(Vec<(String, OptionValue)>),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Rejects raw tokens that would render as nothing: empty identifiers,
    /// empty floats and empty map keys, at any depth.
    fn check_tokens(&self) -> Result<(), SchemaError> {
        match self {
            Self::Identifier(s) if s.is_empty() => Err(empty_token("option identifier")),
            Self::Float(s) if s.is_empty() => Err(empty_token("option float")),
            Self::Map(entries) => entries.iter().try_for_each(|(key, value)| {
                if key.is_empty() {
                    return Err(empty_token("option map key"));
                }
                value.check_tokens()
            }),
            Self::List(values) => values.iter().try_for_each(Self::check_tokens),
            _ => Ok(()),
        }
    }
}

fn empty_token(what: &str) -> SchemaError {
    SchemaError::InvalidArgument(format!("{what} must not be empty"))
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<OptionElement> for OptionValue {
    fn from(o: OptionElement) -> Self {
        Self::Option(Box::new(o))
    }
}

/// A `name = value` annotation attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionElement {
    name: Name,
    value: OptionValue,
    #[serde(default)]
    parenthesized: bool,
}

impl OptionElement {
    /// Creates a built-in option such as `deprecated` or `java_package`.
    ///
    /// Identifier and float values, and map keys, must be non-empty.
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Result<Self, SchemaError> {
        let name = Name::new(name)?;
        let value = value.into();
        value.check_tokens()?;
        Ok(Self {
            name,
            value,
            parenthesized: false,
        })
    }

    /// Creates a custom (extension) option, rendered as `(name) = value`.
    pub fn custom(
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            parenthesized: true,
            ..Self::new(name, value)?
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Returns true if the name is written in parentheses.
    pub fn is_parenthesized(&self) -> bool {
        self.parenthesized
    }

    /// Finds the first option called `name` in `options`.
    pub fn find<'a>(options: &'a [OptionElement], name: &str) -> Option<&'a OptionElement> {
        options.iter().find(|o| o.name() == name)
    }
}

impl<'de> Deserialize<'de> for OptionElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            value: OptionValue,
            #[serde(default)]
            parenthesized: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        let option = Self::new(raw.name, raw.value).map_err(serde::de::Error::custom)?;
        Ok(Self {
            parenthesized: raw.parenthesized,
            ..option
        })
    }
}

impl std::fmt::Display for OptionElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_option(self))
    }
}
