use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use scaffold_core::{
    AggregateRoot, DomainError, DomainEvent, DomainResult, Entity, EntityId, Mapping,
    PendingEvents, impl_entity_identity,
};

use crate::enums::ExampleStatus;

/// Event: ExampleCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCreated {
    pub aggregate_id: EntityId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ExampleRenamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRenamed {
    pub aggregate_id: EntityId,
    pub previous_name: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ExampleStatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleStatusChanged {
    pub aggregate_id: EntityId,
    pub previous_status: ExampleStatus,
    pub status: ExampleStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExampleEvent {
    ExampleCreated(ExampleCreated),
    ExampleRenamed(ExampleRenamed),
    ExampleStatusChanged(ExampleStatusChanged),
}

impl DomainEvent for ExampleEvent {
    fn event_name(&self) -> &str {
        match self {
            ExampleEvent::ExampleCreated(_) => "example.created",
            ExampleEvent::ExampleRenamed(_) => "example.renamed",
            ExampleEvent::ExampleStatusChanged(_) => "example.status_changed",
        }
    }

    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ExampleEvent::ExampleCreated(e) => e.occurred_at,
            ExampleEvent::ExampleRenamed(e) => e.occurred_at,
            ExampleEvent::ExampleStatusChanged(e) => e.occurred_at,
        }
    }

    fn payload(&self) -> Mapping {
        let fields = match self {
            ExampleEvent::ExampleCreated(e) => vec![
                ("aggregate_id", json!(e.aggregate_id)),
                ("name", json!(e.name)),
            ],
            ExampleEvent::ExampleRenamed(e) => vec![
                ("aggregate_id", json!(e.aggregate_id)),
                ("previous_name", json!(e.previous_name)),
                ("name", json!(e.name)),
            ],
            ExampleEvent::ExampleStatusChanged(e) => vec![
                ("aggregate_id", json!(e.aggregate_id)),
                ("previous_status", json!(e.previous_status)),
                ("status", json!(e.status)),
            ],
        };
        fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// Aggregate root: ExampleAggregate.
///
/// Every state change goes through a method that checks the rules first and then
/// records the matching event. Starts out `Pending`.
#[derive(Debug, Clone)]
pub struct ExampleAggregate {
    id: EntityId,
    name: String,
    status: ExampleStatus,
    events: PendingEvents<ExampleEvent>,
}

impl ExampleAggregate {
    /// Create a new aggregate with a generated id.
    pub fn create(name: impl Into<String>) -> DomainResult<Self> {
        Self::create_with_id(EntityId::new(), name)
    }

    /// Create a new aggregate with a caller-supplied id.
    pub fn create_with_id(id: EntityId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        ensure_name(&name)?;

        let mut aggregate = Self {
            id,
            name: name.clone(),
            status: ExampleStatus::Pending,
            events: PendingEvents::new(),
        };
        aggregate.record_event(ExampleEvent::ExampleCreated(ExampleCreated {
            aggregate_id: id,
            name,
            occurred_at: Utc::now(),
        }));
        Ok(aggregate)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ExampleStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ExampleStatus::Active
    }

    /// Rename. Renaming to the current name records nothing.
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        ensure_name(&name)?;
        if name == self.name {
            return Ok(());
        }

        let previous_name = core::mem::replace(&mut self.name, name.clone());
        self.record_event(ExampleEvent::ExampleRenamed(ExampleRenamed {
            aggregate_id: self.id,
            previous_name,
            name,
            occurred_at: Utc::now(),
        }));
        Ok(())
    }

    /// Move to another status. Setting the current status records nothing.
    pub fn change_status(&mut self, status: ExampleStatus) -> DomainResult<()> {
        if status == self.status {
            return Ok(());
        }
        if status == ExampleStatus::Pending {
            return Err(DomainError::invariant(format!(
                "cannot move back to pending from {}",
                self.status
            )));
        }

        let previous_status = self.status;
        self.status = status;
        self.record_event(ExampleEvent::ExampleStatusChanged(ExampleStatusChanged {
            aggregate_id: self.id,
            previous_status,
            status,
            occurred_at: Utc::now(),
        }));
        Ok(())
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Name cannot be empty."));
    }
    Ok(())
}

impl Entity for ExampleAggregate {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl_entity_identity!(ExampleAggregate);

impl AggregateRoot for ExampleAggregate {
    type Event = ExampleEvent;

    fn events(&self) -> &PendingEvents<ExampleEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut PendingEvents<ExampleEvent> {
        &mut self.events
    }
}
