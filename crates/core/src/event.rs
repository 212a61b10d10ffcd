//! Domain events: immutable facts recorded by aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::EventId;
use crate::value_object::Mapping;

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **named** with a stable, non-empty name per event kind (e.g. "example.renamed")
/// - **timestamped** with the business time at which they happened
///
/// No equality contract is required here; a system that needs deduplication
/// defines it over its own event identity or payload.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name for this event kind.
    fn event_name(&self) -> &str;

    /// When the event occurred.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Kind-specific data carried by the event.
    fn payload(&self) -> Mapping;
}

/// A generic, self-describing domain event.
///
/// Useful when an event kind does not deserve its own type, and as the wire shape
/// a dispatcher would publish (`event_name` + `payload`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    event_id: EventId,
    name: String,
    timestamp: DateTime<Utc>,
    payload: Mapping,
}

impl EventRecord {
    /// Record an event that happens now.
    pub fn new(name: impl Into<String>, payload: Mapping) -> DomainResult<Self> {
        Self::at(name, Utc::now(), payload)
    }

    /// Record an event at an explicit point in time.
    pub fn at(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        payload: Mapping,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Event name cannot be empty."));
        }

        Ok(Self {
            event_id: EventId::new(),
            name,
            timestamp,
            payload,
        })
    }

    /// Capture any domain event as a record.
    pub fn from_event<E: DomainEvent>(event: &E) -> Self {
        Self {
            event_id: EventId::new(),
            name: event.event_name().to_string(),
            timestamp: event.timestamp(),
            payload: event.payload(),
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }
}

impl DomainEvent for EventRecord {
    fn event_name(&self) -> &str {
        &self.name
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn payload(&self) -> Mapping {
        self.payload.clone()
    }
}
