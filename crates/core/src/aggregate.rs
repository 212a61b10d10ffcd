//! Aggregate root trait: an entity that buffers the domain events it raises.

use crate::entity::Entity;
use crate::event::DomainEvent;

/// Ordered buffer of events recorded by an aggregate and not yet handed off.
///
/// Grows only through [`record`](PendingEvents::record) and empties only through
/// [`clear`](PendingEvents::clear) or [`take`](PendingEvents::take). Reading never
/// drains it.
#[derive(Debug, Clone)]
pub struct PendingEvents<E> {
    buffer: Vec<E>,
}

impl<E> PendingEvents<E> {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Append an event. Never deduplicates, never reorders.
    pub fn record(&mut self, event: E) {
        self.buffer.push(event);
    }

    /// Read-only view in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop every buffered event. Clearing an empty buffer is a no-op.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Move every buffered event out, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<E> {
        core::mem::take(&mut self.buffer)
    }
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate root: the single mutation entry point of a cluster of domain objects.
///
/// Identity, equality and hashing are the [`Entity`] rules (id only); the pending
/// events never take part in them.
///
/// Recording is separate from publishing: an external dispatcher drains
/// [`take_events`](AggregateRoot::take_events) after a successful unit-of-work
/// commit, so the aggregate knows nothing about dispatch.
pub trait AggregateRoot: Entity {
    /// Event type raised by this aggregate.
    type Event: DomainEvent;

    /// Returns the event buffer.
    fn events(&self) -> &PendingEvents<Self::Event>;

    /// Returns the event buffer for recording.
    fn events_mut(&mut self) -> &mut PendingEvents<Self::Event>;

    /// Append an event to the end of the pending sequence.
    fn record_event(&mut self, event: Self::Event) {
        self.events_mut().record(event);
    }

    /// Pending events, oldest first.
    fn pending_events(&self) -> &[Self::Event] {
        self.events().as_slice()
    }

    /// Forget every pending event. Idempotent.
    fn clear_events(&mut self) {
        self.events_mut().clear();
    }

    /// Hand every pending event over to the caller, oldest first.
    fn take_events(&mut self) -> Vec<Self::Event> {
        let events = self.events_mut().take();
        tracing::debug!(count = events.len(), "drained pending domain events");
        events
    }
}
