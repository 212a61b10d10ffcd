//! `scaffold-core` — domain-driven-design building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity, value semantics, aggregate event buffering, composable
//! specifications and the repository / unit-of-work contracts.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod repository;
pub mod service;
pub mod specification;
pub mod value_object;

pub use aggregate::{AggregateRoot, PendingEvents};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, EventRecord};
pub use id::{EntityId, EventId};
pub use repository::{
    Repositories, Repository, Transaction, TransactionError, UnitOfWork, atomically,
};
pub use service::DomainService;
pub use specification::{
    AndSpecification, NotSpecification, OrSpecification, Predicate, Specification, predicate,
};
pub use value_object::{Mapping, ValueObject};
