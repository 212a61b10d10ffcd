//! Aggregate roots and the events they raise.

mod example_aggregate;

pub use example_aggregate::{
    ExampleAggregate, ExampleCreated, ExampleEvent, ExampleRenamed, ExampleStatusChanged,
};
