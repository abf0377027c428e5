use serde::{Deserialize, Serialize};

use crate::printer;

use super::extension_range::ExtendDeclaration;
use super::name::Name;
use super::option_element::OptionElement;
use super::proto_type::Type;
use super::service::Service;
use super::syntax::Syntax;

/// Every declaration of one `.proto` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtoFile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    package_name: Option<Name>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    syntax: Option<Syntax>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    public_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    types: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    services: Vec<Service>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extend_declarations: Vec<ExtendDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionElement>,
}

impl ProtoFile {
    /// Creates an empty file. Pass `""` when the path is unknown.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Sets the package. An empty name clears it.
    pub fn with_package(self, package_name: impl Into<String>) -> Self {
        Self {
            package_name: Name::new(package_name).ok(),
            ..self
        }
    }

    pub fn with_syntax(self, syntax: Syntax) -> Self {
        Self {
            syntax: Some(syntax),
            ..self
        }
    }

    /// Sets the plain and `import public` dependencies.
    pub fn with_dependencies(
        self,
        dependencies: Vec<String>,
        public_dependencies: Vec<String>,
    ) -> Self {
        Self {
            dependencies,
            public_dependencies,
            ..self
        }
    }

    pub fn with_types(self, types: Vec<Type>) -> Self {
        Self { types, ..self }
    }

    pub fn with_services(self, services: Vec<Service>) -> Self {
        Self { services, ..self }
    }

    pub fn with_extend_declarations(self, extend_declarations: Vec<ExtendDeclaration>) -> Self {
        Self {
            extend_declarations,
            ..self
        }
    }

    pub fn with_options(self, options: Vec<OptionElement>) -> Self {
        Self { options, ..self }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_ref().map(Name::as_str)
    }

    pub fn syntax(&self) -> Option<Syntax> {
        self.syntax
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn public_dependencies(&self) -> &[String] {
        &self.public_dependencies
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn extend_declarations(&self) -> &[ExtendDeclaration] {
        &self.extend_declarations
    }

    pub fn options(&self) -> &[OptionElement] {
        &self.options
    }

    /// Returns every type in the file, nested ones included, parents first.
    pub fn all_types(&self) -> Vec<&Type> {
        let mut all = Vec::new();
        for ty in &self.types {
            ty.walk(&mut |t| all.push(t));
        }
        all
    }
}

impl std::fmt::Display for ProtoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_file(self))
    }
}
