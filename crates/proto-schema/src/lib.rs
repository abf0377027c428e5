//! # proto-schema
//!
//! An immutable object model for `.proto` schema declarations.
//!
//! This crate provides:
//! - Declaration types (`EnumType`, `MessageType`, `Field`, options, services,
//!   whole files) that validate their arguments on construction
//! - A printer that renders any declaration tree to canonical `.proto` text
//! - Tag-uniqueness validators over caller-chosen sets of declarations
//!
//! Producing the model from source text is left to a parser outside this
//! crate.
//!
//! # Example
//!
//! ```
//! use proto_schema::types::{EnumType, EnumValue, OptionElement};
//! use proto_schema::validate::validate_enum_value_tags_are_unique;
//!
//! let values = vec![
//!     EnumValue::new("ONE", 1, "", vec![]).unwrap(),
//!     EnumValue::new("TWO", 2, "", vec![]).unwrap(),
//! ];
//! let options = vec![OptionElement::new("kit", "kat").unwrap()];
//! let enum_type = EnumType::new("Enum", "", "", options, values).unwrap();
//!
//! assert_eq!(
//!     enum_type.to_string(),
//!     "enum Enum {\n  option kit = \"kat\";\n\n  ONE = 1;\n  TWO = 2;\n}\n"
//! );
//! assert!(validate_enum_value_tags_are_unique([&enum_type]).is_ok());
//! ```

pub mod error;
pub mod printer;
pub mod types;
pub mod validate;

pub use error::SchemaError;
pub use printer::{print_all, print_file, print_type};
pub use validate::{
    validate_enum_value_tags_are_unique, validate_field_tags_are_unique, validate_file,
};
