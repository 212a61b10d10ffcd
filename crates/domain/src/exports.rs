//! Static registry of the public names each domain package exposes.
//!
//! Lets configuration or tooling refer to domain types by name ("ExampleEntity")
//! while every resolvable name is fixed at compile time.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Name resolution failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is not exported by the package.
    #[error("module '{module}' has no attribute '{name}'")]
    Lookup { module: &'static str, name: String },

    /// The lookup key was not a string.
    #[error("Expected a string for {kind} name, got {got}")]
    InvalidKey {
        kind: &'static str,
        got: &'static str,
    },
}

/// Every exported domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Export {
    ExampleEntity,
    ValueObjectExample,
    ExampleStatus,
    ExampleAggregate,
    ExampleEvent,
}

impl Export {
    /// Public name of the export.
    pub fn name(self) -> &'static str {
        match self {
            Export::ExampleEntity => "ExampleEntity",
            Export::ValueObjectExample => "ValueObjectExample",
            Export::ExampleStatus => "ExampleStatus",
            Export::ExampleAggregate => "ExampleAggregate",
            Export::ExampleEvent => "ExampleEvent",
        }
    }

    /// Fully qualified Rust type path.
    pub fn type_name(self) -> &'static str {
        match self {
            Export::ExampleEntity => core::any::type_name::<crate::ExampleEntity>(),
            Export::ValueObjectExample => core::any::type_name::<crate::ValueObjectExample>(),
            Export::ExampleStatus => core::any::type_name::<crate::ExampleStatus>(),
            Export::ExampleAggregate => core::any::type_name::<crate::ExampleAggregate>(),
            Export::ExampleEvent => core::any::type_name::<crate::ExampleEvent>(),
        }
    }
}

/// Names exported by one domain package.
#[derive(Debug, Clone, Copy)]
pub struct ExportRegistry {
    module: &'static str,
    kind: &'static str,
    exports: &'static [Export],
}

impl ExportRegistry {
    /// `kind` names what the package holds ("entity", "enum", ...) in key errors.
    pub const fn new(module: &'static str, kind: &'static str, exports: &'static [Export]) -> Self {
        Self {
            module,
            kind,
            exports,
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.exports.iter().map(|export| export.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exports.iter().any(|export| export.name() == name)
    }

    /// Resolve an exported name.
    pub fn resolve(&self, name: &str) -> Result<Export, RegistryError> {
        self.exports
            .iter()
            .copied()
            .find(|export| export.name() == name)
            .ok_or_else(|| RegistryError::Lookup {
                module: self.module,
                name: name.to_string(),
            })
    }

    /// Resolve a name read from untyped input. Non-string keys are rejected
    /// before any lookup.
    pub fn resolve_key(&self, key: &JsonValue) -> Result<Export, RegistryError> {
        match key {
            JsonValue::String(name) => self.resolve(name),
            other => Err(RegistryError::InvalidKey {
                kind: self.kind,
                got: json_kind(other),
            }),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(_) => "int",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

pub const ENTITIES: ExportRegistry = ExportRegistry::new(
    "scaffold_domain::entities",
    "entity",
    &[Export::ExampleEntity],
);

pub const VALUE_OBJECTS: ExportRegistry = ExportRegistry::new(
    "scaffold_domain::value_objects",
    "value object",
    &[Export::ValueObjectExample],
);

pub const ENUMS: ExportRegistry =
    ExportRegistry::new("scaffold_domain::enums", "enum", &[Export::ExampleStatus]);

pub const AGGREGATES: ExportRegistry = ExportRegistry::new(
    "scaffold_domain::aggregates",
    "aggregate",
    &[Export::ExampleAggregate, Export::ExampleEvent],
);

/// Every package registry.
pub const PACKAGES: [ExportRegistry; 4] = [ENTITIES, VALUE_OBJECTS, ENUMS, AGGREGATES];
