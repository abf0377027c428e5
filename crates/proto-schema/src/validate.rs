//! Tag-uniqueness checks over caller-chosen sets of declarations.
//!
//! Each check reports the first conflict in input order and stops.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::types::{EnumType, ExtendDeclaration, MessageType, ProtoFile, Type};

/// Verifies that no two values across `types` share a tag.
///
/// The caller decides the scope: pass one enum to check it alone, or every
/// enum that should share a tag namespace. Enums are visited in input order,
/// values in declaration order; the second holder of a tag is the error.
///
/// # Errors
///
/// Returns [`SchemaError::DuplicateEnumValueTag`] with the first reused tag.
pub fn validate_enum_value_tags_are_unique<'a>(
    types: impl IntoIterator<Item = &'a EnumType>,
) -> Result<(), SchemaError> {
    let mut seen: HashMap<i32, &str> = HashMap::new();
    for enum_type in types {
        for value in enum_type.values() {
            if let Some(first) = seen.insert(value.tag(), value.name()) {
                tracing::debug!(
                    tag = value.tag(),
                    first,
                    duplicate = value.name(),
                    enum_type = enum_type.name(),
                    "duplicate enum value tag"
                );
                return Err(SchemaError::DuplicateEnumValueTag(value.tag()));
            }
        }
    }
    tracing::trace!(values = seen.len(), "enum value tags are unique");
    Ok(())
}

/// Verifies that no two fields of `message` share a tag.
///
/// The scope is the message's own fields, then its oneof members, then the
/// fields of every declaration in `extend_declarations` whose qualified name
/// matches the message's. Nested messages are not included; validate them
/// with their own call.
///
/// # Errors
///
/// Returns [`SchemaError::DuplicateFieldTag`] with the first reused tag.
pub fn validate_field_tags_are_unique(
    message: &MessageType,
    extend_declarations: &[ExtendDeclaration],
) -> Result<(), SchemaError> {
    let extension_fields = extend_declarations
        .iter()
        .filter(|e| extends(e, message))
        .flat_map(|e| e.fields());

    let mut seen: HashMap<i32, &str> = HashMap::new();
    for field in message.all_fields().chain(extension_fields) {
        if let Some(first) = seen.insert(field.tag(), field.name()) {
            tracing::debug!(
                tag = field.tag(),
                first,
                duplicate = field.name(),
                message_type = message.name(),
                "duplicate field tag"
            );
            return Err(SchemaError::DuplicateFieldTag {
                message: display_name(message).to_string(),
                tag: field.tag(),
            });
        }
    }
    tracing::trace!(
        message_type = message.name(),
        fields = seen.len(),
        "field tags are unique"
    );
    Ok(())
}

/// Validates every type in `file`, nested ones included.
///
/// Each enum is its own tag scope unless it sets `allow_alias = true`. Each
/// message is checked together with the file's extend declarations.
///
/// # Errors
///
/// Returns the first duplicate-tag error found, parents before children.
pub fn validate_file(file: &ProtoFile) -> Result<(), SchemaError> {
    for ty in file.all_types() {
        match ty {
            Type::Enum(e) if e.allows_alias() => {
                tracing::trace!(enum_type = e.name(), "skipping aliased enum");
            }
            Type::Enum(e) => validate_enum_value_tags_are_unique([e])?,
            Type::Message(m) => validate_field_tags_are_unique(m, file.extend_declarations())?,
        }
    }
    Ok(())
}

fn extends(extend: &ExtendDeclaration, message: &MessageType) -> bool {
    !extend.qualified_name().is_empty() && extend.qualified_name() == message.qualified_name()
}

fn display_name(message: &MessageType) -> &str {
    if message.qualified_name().is_empty() {
        message.name()
    } else {
        message.qualified_name()
    }
}
