use serde::{Deserialize, Serialize};

use scaffold_core::{DomainError, DomainResult, Entity, EntityId, impl_entity_identity};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExampleEntityFields {
    id: EntityId,
    name: String,
    value: i64,
}

/// Example entity: a named value with a stable identity.
///
/// Equality and hashing use the id alone; `name` and `value` may change freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExampleEntityFields")]
pub struct ExampleEntity {
    id: EntityId,
    name: String,
    value: i64,
}

impl ExampleEntity {
    /// Create an entity with a freshly generated id.
    pub fn new(name: impl Into<String>, value: i64) -> DomainResult<Self> {
        Self::with_id(EntityId::new(), name, value)
    }

    /// Create an entity with a caller-supplied id.
    pub fn with_id(id: EntityId, name: impl Into<String>, value: i64) -> DomainResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self { id, name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn update_name(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        ensure_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn update_value(&mut self, new_value: i64) {
        self.value = new_value;
    }
}

impl TryFrom<ExampleEntityFields> for ExampleEntity {
    type Error = DomainError;

    fn try_from(fields: ExampleEntityFields) -> DomainResult<Self> {
        Self::with_id(fields.id, fields.name, fields.value)
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Name cannot be empty."));
    }
    Ok(())
}

impl Entity for ExampleEntity {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl_entity_identity!(ExampleEntity);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn fixed_id() -> EntityId {
        "12345678-1234-5678-1234-567812345678".parse().unwrap()
    }

    #[test]
    fn initialization_keeps_fields() {
        let entity = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();

        assert_eq!(*entity.id(), fixed_id());
        assert_eq!(entity.name(), "Test Entity");
        assert_eq!(entity.value(), 42);
    }

    #[test]
    fn same_id_and_fields_are_the_same_entity() {
        let e = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();
        let e2 = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();

        assert_eq!(e, e2);
        assert!(e.same_identity_as(&e2));
        assert_eq!(hash_of(&e), hash_of(&e2));
    }

    #[test]
    fn different_ids_are_different_entities() {
        let e = ExampleEntity::new("Test Entity", 42).unwrap();
        let other = ExampleEntity::new("Different Entity", 99).unwrap();
        assert_ne!(e, other);
    }

    #[test]
    fn hash_is_hash_of_id() {
        let e = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();
        assert_eq!(hash_of(&e), hash_of(&fixed_id()));
    }

    #[test]
    fn updates_keep_identity() {
        let original = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();
        let mut changed = original.clone();
        changed.update_name("Renamed").unwrap();
        changed.update_value(7);

        assert_eq!(changed.name(), "Renamed");
        assert_eq!(changed.value(), 7);
        assert_eq!(original, changed);
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = ExampleEntity::new("  ", 1).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");

        let mut entity = ExampleEntity::new("ok", 1).unwrap();
        assert!(entity.update_name("\t").is_err());
        assert_eq!(entity.name(), "ok");
    }

    #[test]
    fn deserializing_validates_the_name() {
        let json = r#"{"id":"12345678-1234-5678-1234-567812345678","name":"  ","value":1}"#;
        let err = serde_json::from_str::<ExampleEntity>(json).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn serde_round_trip_keeps_identity() {
        let entity = ExampleEntity::with_id(fixed_id(), "Test Entity", 42).unwrap();
        let json = serde_json::to_string(&entity).unwrap();
        let back: ExampleEntity = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entity);
        assert_eq!(back.name(), "Test Entity");
        assert_eq!(back.value(), 42);

        let extra = r#"{"id":"12345678-1234-5678-1234-567812345678","name":"a","value":1,"x":0}"#;
        assert!(serde_json::from_str::<ExampleEntity>(extra).is_err());
    }

    #[test]
    fn generated_ids_differ() {
        let a = ExampleEntity::new("a", 1).unwrap();
        let b = ExampleEntity::new("a", 1).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
