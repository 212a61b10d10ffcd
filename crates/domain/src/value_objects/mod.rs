//! Value objects: immutable domain objects defined by their attributes.

mod value_object_example;

pub use value_object_example::{ValueObjectExample, ValueObjectExampleFields};
