//! Domain services over the example domain objects.

use scaffold_core::{DomainResult, DomainService};

use crate::entities::ExampleEntity;
use crate::value_objects::ValueObjectExample;

/// Summarize an entity as a [`ValueObjectExample`] snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeEntity;

impl DomainService<ExampleEntity> for DescribeEntity {
    type Output = DomainResult<ValueObjectExample>;

    fn execute(&self, subject: &ExampleEntity) -> Self::Output {
        ValueObjectExample::new(subject.name(), format!("value {}", subject.value()))
    }
}
