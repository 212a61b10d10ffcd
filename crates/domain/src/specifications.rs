//! Reusable business rules over the example domain objects.

use scaffold_core::Specification;

use crate::aggregates::ExampleAggregate;
use crate::entities::ExampleEntity;

/// Satisfied by aggregates in the `Active` status.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsActive;

impl Specification<ExampleAggregate> for IsActive {
    fn is_satisfied_by(&self, candidate: &ExampleAggregate) -> bool {
        candidate.is_active()
    }
}

/// Satisfied when the name contains the needle, ignoring case.
#[derive(Debug, Clone)]
pub struct NameContains {
    needle: String,
}

impl NameContains {
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self {
            needle: needle.as_ref().to_lowercase(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

impl Specification<ExampleAggregate> for NameContains {
    fn is_satisfied_by(&self, candidate: &ExampleAggregate) -> bool {
        self.matches(candidate.name())
    }
}

impl Specification<ExampleEntity> for NameContains {
    fn is_satisfied_by(&self, candidate: &ExampleEntity) -> bool {
        self.matches(candidate.name())
    }
}

/// Satisfied by entities whose value is at least the threshold.
#[derive(Debug, Clone, Copy)]
pub struct ValueAtLeast(pub i64);

impl Specification<ExampleEntity> for ValueAtLeast {
    fn is_satisfied_by(&self, candidate: &ExampleEntity) -> bool {
        candidate.value() >= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ExampleStatus;

    fn aggregate(name: &str, status: ExampleStatus) -> ExampleAggregate {
        let mut aggregate = ExampleAggregate::create(name).unwrap();
        aggregate.change_status(status).unwrap();
        aggregate
    }

    #[test]
    fn selects_active_aggregates_by_name() {
        let catalogue = [
            aggregate("Blue Widget", ExampleStatus::Active),
            aggregate("Red Widget", ExampleStatus::Inactive),
            aggregate("Blue Gadget", ExampleStatus::Active),
            aggregate("blue widget mk2", ExampleStatus::Pending),
        ];

        let spec = IsActive.and(NameContains::new("WIDGET"));
        let selected: Vec<&str> = spec.filter(&catalogue).into_iter().map(|a| a.name()).collect();

        assert_eq!(selected, vec!["Blue Widget"]);
    }

    #[test]
    fn combines_entity_rules() {
        let small = ExampleEntity::new("small thing", 3).unwrap();
        let big = ExampleEntity::new("big thing", 300).unwrap();
        let other = ExampleEntity::new("other", 1000).unwrap();

        let spec = ValueAtLeast(100).and(NameContains::new("thing")).or(ValueAtLeast(1000));

        assert!(!spec.is_satisfied_by(&small));
        assert!(spec.is_satisfied_by(&big));
        assert!(spec.is_satisfied_by(&other));
    }

    #[test]
    fn negated_rule() {
        let spec = IsActive.not();
        assert!(spec.is_satisfied_by(&aggregate("Widget", ExampleStatus::Pending)));
        assert!(!spec.is_satisfied_by(&aggregate("Widget", ExampleStatus::Active)));
    }
}
