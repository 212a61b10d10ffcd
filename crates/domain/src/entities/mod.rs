//! Entities: domain objects defined by their identity.

mod example_entity;

pub use example_entity::ExampleEntity;
