//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;
use core::fmt::Debug;
use core::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// Name → value view of a value object's declared fields.
pub type Mapping = serde_json::Map<String, JsonValue>;

/// Value objects are **immutable** and **compared by value**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Declared attributes
///
/// Each value object declares its fields once, in order, through [`FIELDS`] and
/// [`attributes`]. Equality and hashing are generated from that declaration by
/// [`impl_value_object_equality!`](crate::impl_value_object_equality), so the
/// compared field set cannot drift from the declared one.
///
/// ## Construction
///
/// Construction is fallible: build the raw value, then pass it through
/// [`validated`]. Keep the fields private so no unvalidated value escapes.
/// "Updating" a value object means constructing a new one.
///
/// Untrusted input arrives as [`Fields`], a plain field-by-field form, and only
/// becomes `Self` through [`from_fields`]. Types that also implement
/// `Deserialize` should route it through the same form
/// (`#[serde(try_from = "...")]`) so serde cannot skip validation either.
///
/// ```ignore
/// #[derive(Deserialize)]
/// #[serde(deny_unknown_fields)]
/// struct MoneyFields { amount: i64, currency: String }
///
/// #[derive(Debug, Clone, Serialize)]
/// pub struct Money { amount: i64, currency: String }
///
/// impl ValueObject for Money {
///     const TYPE_NAME: &'static str = "Money";
///     const FIELDS: &'static [&'static str] = &["amount", "currency"];
///     type Attributes<'a> = (i64, &'a str);
///     type Fields = MoneyFields;
///
///     fn attributes(&self) -> Self::Attributes<'_> {
///         (self.amount, &self.currency)
///     }
///
///     fn from_fields(f: MoneyFields) -> DomainResult<Self> {
///         Self { amount: f.amount, currency: f.currency }.validated()
///     }
/// }
///
/// impl_value_object_equality!(Money);
/// ```
///
/// [`FIELDS`]: ValueObject::FIELDS
/// [`attributes`]: ValueObject::attributes
/// [`validated`]: ValueObject::validated
/// [`Fields`]: ValueObject::Fields
/// [`from_fields`]: ValueObject::from_fields
pub trait ValueObject: Clone + PartialEq + Debug + Sized + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Declared field names, in attribute order.
    const FIELDS: &'static [&'static str];

    /// Ordered attribute tuple, borrowed from `self`.
    type Attributes<'a>: Eq + Hash + Debug
    where
        Self: 'a;

    /// Unvalidated field-by-field form read by [`from_mapping`](ValueObject::from_mapping).
    type Fields: DeserializeOwned;

    /// Returns the ordered attribute tuple used for equality and hashing.
    fn attributes(&self) -> Self::Attributes<'_>;

    /// Build a validated value from its raw fields.
    fn from_fields(fields: Self::Fields) -> DomainResult<Self>;

    /// Check the domain rules of this value.
    ///
    /// The default only rejects a value object that declares no attributes.
    /// Concrete types override this with their own rules.
    fn validate(&self) -> DomainResult<()> {
        if Self::FIELDS.is_empty() {
            return Err(DomainError::validation(
                "Value object attributes cannot be empty.",
            ));
        }
        Ok(())
    }

    /// Run [`validate`](ValueObject::validate) and hand the value back only if it passes.
    fn validated(self) -> DomainResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Value comparison against an arbitrary value.
    ///
    /// Returns `false` when `other` has a different concrete type, otherwise
    /// compares the attribute tuples.
    fn same_value_as(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.attributes() == other.attributes())
    }

    /// Serialize all declared fields into a name → value mapping.
    ///
    /// The serialized keys must be exactly [`FIELDS`](ValueObject::FIELDS).
    fn to_mapping(&self) -> DomainResult<Mapping>
    where
        Self: Serialize,
    {
        let map = match serde_json::to_value(self) {
            Ok(JsonValue::Object(map)) => map,
            Ok(other) => {
                return Err(DomainError::mapping(
                    Self::TYPE_NAME,
                    format!("expected an object, serialized to {other}"),
                ));
            }
            Err(e) => return Err(DomainError::mapping(Self::TYPE_NAME, e.to_string())),
        };

        let declared = map.len() == Self::FIELDS.len()
            && Self::FIELDS.iter().all(|field| map.contains_key(*field));
        if !declared {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            return Err(DomainError::mapping(
                Self::TYPE_NAME,
                format!(
                    "serialized fields [{}] differ from declared fields [{}]",
                    keys.join(", "),
                    Self::FIELDS.join(", ")
                ),
            ));
        }
        Ok(map)
    }

    /// Build a new, validated instance from a name → value mapping.
    ///
    /// Keys that are not declared fields are rejected before anything else.
    fn from_mapping(mapping: Mapping) -> DomainResult<Self> {
        let unknown: Vec<String> = mapping
            .keys()
            .filter(|key| !Self::FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(DomainError::unknown_fields(Self::TYPE_NAME, unknown));
        }

        let fields: Self::Fields = serde_json::from_value(JsonValue::Object(mapping))
            .map_err(|e| DomainError::mapping(Self::TYPE_NAME, e.to_string()))?;
        Self::from_fields(fields)
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] from its attribute tuple.
#[macro_export]
macro_rules! impl_value_object_equality {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueObject::attributes(self) == $crate::ValueObject::attributes(other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::ValueObject::attributes(self), state)
            }
        }
    };
}
