//! The declaration model. Every type here is immutable once constructed.

mod enum_type;
mod extension_range;
mod field;
mod label;
mod message_type;
mod name;
mod option_element;
mod proto_file;
mod proto_type;
mod service;
mod syntax;

pub use enum_type::{EnumType, EnumValue};
pub use extension_range::{ExtendDeclaration, ExtensionRange, MAX_TAG};
pub use field::{Field, OneOf};
pub use label::Label;
pub use message_type::MessageType;
pub use name::Name;
pub use option_element::{OptionElement, OptionValue};
pub use proto_file::ProtoFile;
pub use proto_type::Type;
pub use service::{Rpc, Service};
pub use syntax::Syntax;
