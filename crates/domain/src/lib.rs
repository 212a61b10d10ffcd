//! Example domain package built on `scaffold-core`.
//!
//! Deterministic domain logic only (no IO, no HTTP, no storage). Each submodule is
//! one package of the domain layer; [`exports`] lists what each package exposes.

pub mod aggregates;
pub mod entities;
pub mod enums;
pub mod exports;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use aggregates::{
    ExampleAggregate, ExampleCreated, ExampleEvent, ExampleRenamed, ExampleStatusChanged,
};
pub use entities::ExampleEntity;
pub use enums::ExampleStatus;
pub use exports::{Export, ExportRegistry, RegistryError};
pub use services::DescribeEntity;
pub use specifications::{IsActive, NameContains, ValueAtLeast};
pub use value_objects::{ValueObjectExample, ValueObjectExampleFields};
