use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::printer;

use super::name::{Name, TypeReference};
use super::option_element::OptionElement;

/// One `rpc` method of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rpc {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    request_type: TypeReference,
    response_type: TypeReference,
    #[serde(default)]
    client_streaming: bool,
    #[serde(default)]
    server_streaming: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
}

impl Rpc {
    /// Creates a unary rpc.
    pub fn new(
        name: impl Into<String>,
        documentation: impl Into<String>,
        request_type: impl Into<String>,
        response_type: impl Into<String>,
        options: Vec<OptionElement>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            documentation: documentation.into(),
            request_type: TypeReference::new("rpc request type", request_type)?,
            response_type: TypeReference::new("rpc response type", response_type)?,
            client_streaming: false,
            server_streaming: false,
            options,
        })
    }

    /// Returns this rpc with the given streaming flags.
    pub fn with_streaming(self, client_streaming: bool, server_streaming: bool) -> Self {
        Self {
            client_streaming,
            server_streaming,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn request_type(&self) -> &str {
        self.request_type.as_str()
    }

    pub fn response_type(&self) -> &str {
        self.response_type.as_str()
    }

    pub fn is_client_streaming(&self) -> bool {
        self.client_streaming
    }

    pub fn is_server_streaming(&self) -> bool {
        self.server_streaming
    }

    pub fn options(&self) -> &[OptionElement] {
        &self.options
    }
}

impl std::fmt::Display for Rpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_rpc(self))
    }
}

/// A `service` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    name: Name,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    qualified_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    documentation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rpcs: Vec<Rpc>,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
        rpcs: Vec<Rpc>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Name::new(name)?,
            qualified_name: qualified_name.into(),
            documentation: documentation.into(),
            options,
            rpcs,
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

    pub fn rpcs(&self) -> &[Rpc] {
        &self.rpcs
    }

    /// Looks up an rpc by name.
    pub fn rpc(&self, name: &str) -> Option<&Rpc> {
        self.rpcs.iter().find(|r| r.name() == name)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_service(self))
    }
}
