use serde::{Deserialize, Serialize};

use scaffold_core::{DomainError, DomainResult, ValueObject, impl_value_object_equality};

/// Raw, unvalidated form of [`ValueObjectExample`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueObjectExampleFields {
    name: String,
    description: String,
}

/// Example value object: a name paired with a description.
///
/// Both fields must be non-blank once trimmed. Construct with
/// [`ValueObjectExample::new`]; there is no way to change an existing value.
/// Deserialization goes through the same checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ValueObjectExampleFields")]
pub struct ValueObjectExample {
    name: String,
    description: String,
}

impl ValueObjectExample {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self {
            name: name.into(),
            description: description.into(),
        }
        .validated()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// A new value with the description replaced.
    pub fn with_description(&self, description: impl Into<String>) -> DomainResult<Self> {
        Self::new(self.name.clone(), description)
    }
}

impl TryFrom<ValueObjectExampleFields> for ValueObjectExample {
    type Error = DomainError;

    fn try_from(fields: ValueObjectExampleFields) -> DomainResult<Self> {
        Self::from_fields(fields)
    }
}

impl ValueObject for ValueObjectExample {
    const TYPE_NAME: &'static str = "ValueObjectExample";
    const FIELDS: &'static [&'static str] = &["name", "description"];
    type Attributes<'a> = (&'a str, &'a str);
    type Fields = ValueObjectExampleFields;

    fn attributes(&self) -> Self::Attributes<'_> {
        (&self.name, &self.description)
    }

    fn from_fields(fields: ValueObjectExampleFields) -> DomainResult<Self> {
        Self::new(fields.name, fields.description)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Name cannot be empty."));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("Description cannot be empty."));
        }
        Ok(())
    }
}

impl_value_object_equality!(ValueObjectExample);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn creation_keeps_fields() {
        let value = ValueObjectExample::new("Test Value Object", "This is a test value object.")
            .unwrap();
        assert_eq!(value.name(), "Test Value Object");
        assert_eq!(value.description(), "This is a test value object.");
    }

    #[test]
    fn equal_fields_are_equal_values() {
        let v1 = ValueObjectExample::new("A", "B").unwrap();
        let v2 = ValueObjectExample::new("A", "B").unwrap();

        assert_eq!(v1, v2);
        assert_eq!(hash_of(&v1), hash_of(&v2));
    }

    #[test]
    fn different_fields_are_different_values() {
        let v1 = ValueObjectExample::new("Test Value Object 1", "Description 1").unwrap();
        let v2 = ValueObjectExample::new("Test Value Object 2", "Description 2").unwrap();
        assert_ne!(v1, v2);
    }

    #[test]
    fn hash_is_hash_of_attribute_tuple() {
        let value = ValueObjectExample::new("name", "description").unwrap();
        assert_eq!(hash_of(&value), hash_of(&("name", "description")));
    }

    #[test]
    fn other_types_never_compare_equal() {
        let value = ValueObjectExample::new("A", "B").unwrap();
        assert!(!value.same_value_as(&"Not a ValueObjectExample"));
        assert!(!value.same_value_as(&("A", "B")));
    }

    #[test]
    fn blank_name_is_rejected_verbatim() {
        let err = ValueObjectExample::new("   ", "B").unwrap_err();
        assert_eq!(err, DomainError::validation("Name cannot be empty."));
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn blank_description_is_rejected_verbatim() {
        let err = ValueObjectExample::new("Test Value Object", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Description cannot be empty.");
    }

    #[test]
    fn name_is_checked_before_description() {
        let err = ValueObjectExample::new("", "").unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn update_builds_a_new_value() {
        let original = ValueObjectExample::new("A", "B").unwrap();
        let updated = original.with_description("C").unwrap();

        assert_eq!(original.description(), "B");
        assert_eq!(updated.description(), "C");
        assert!(original.with_description(" ").is_err());
    }

    #[test]
    fn mapping_uses_declared_field_names() {
        let value = ValueObjectExample::new("A", "B").unwrap();
        let mapping = value.to_mapping().unwrap();
        assert_eq!(serde_json::Value::Object(mapping), json!({ "name": "A", "description": "B" }));
    }

    #[test]
    fn from_mapping_rejects_unknown_keys_by_name() {
        let mapping = json!({ "name": "A", "description": "B", "colour": "red" });
        let serde_json::Value::Object(mapping) = mapping else {
            unreachable!()
        };

        let err = ValueObjectExample::from_mapping(mapping).unwrap_err();
        assert_eq!(err.to_string(), "unknown field(s) colour for ValueObjectExample");
    }

    #[test]
    fn from_mapping_validates() {
        let serde_json::Value::Object(mapping) = json!({ "name": " ", "description": "B" }) else {
            unreachable!()
        };

        let err = ValueObjectExample::from_mapping(mapping).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn deserializing_rejects_blank_names() {
        let err = serde_json::from_str::<ValueObjectExample>(r#"{"name":"   ","description":"B"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn deserializing_rejects_unknown_keys() {
        let json = r#"{"name":"A","description":"B","colour":"red"}"#;
        assert!(serde_json::from_str::<ValueObjectExample>(json).is_err());

        let value: ValueObjectExample =
            serde_json::from_str(r#"{"name":"A","description":"B"}"#).unwrap();
        assert_eq!(value, ValueObjectExample::new("A", "B").unwrap());
    }

    proptest! {
        /// Property: from_mapping(to_mapping(v)) == v for any valid v.
        #[test]
        fn mapping_round_trips(
            name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
            description in "[A-Za-z][A-Za-z0-9 .,]{0,60}",
        ) {
            let value = ValueObjectExample::new(name, description).unwrap();
            let back = ValueObjectExample::from_mapping(value.to_mapping().unwrap()).unwrap();

            prop_assert_eq!(&back, &value);
            prop_assert_eq!(hash_of(&back), hash_of(&value));
        }

        /// Property: whitespace-only names are always rejected with the documented message.
        #[test]
        fn whitespace_names_are_rejected(name in "[ \t\n]{0,8}") {
            let err = ValueObjectExample::new(name, "B").unwrap_err();
            prop_assert_eq!(err.to_string(), "Name cannot be empty.");
        }
    }
}
