//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are the same entity when they are of the same concrete type and
//! carry the same identifier. No other field takes part in equality or hashing;
//! [`impl_entity_identity!`](crate::impl_entity_identity) generates exactly those
//! impls so a concrete type cannot widen them by accident.

use core::any::Any;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison against an arbitrary value.
    ///
    /// Returns `false` when `other` is not the same concrete entity type,
    /// otherwise compares identifiers only.
    fn same_identity_as(&self, other: &dyn Any) -> bool
    where
        Self: Sized + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.id() == other.id())
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for an [`Entity`] from its identifier alone.
///
/// ```ignore
/// struct Customer { id: EntityId, name: String }
///
/// impl Entity for Customer {
///     type Id = EntityId;
///     fn id(&self) -> &EntityId { &self.id }
/// }
///
/// impl_entity_identity!(Customer);
/// ```
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::Entity::id(self), state)
            }
        }
    };
}
