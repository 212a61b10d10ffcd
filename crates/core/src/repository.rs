//! Repository and Unit of Work contracts.
//!
//! These are pure interfaces: no storage lives here. Infrastructure implements them
//! and application services consume them.
//!
//! ## Transaction boundary
//!
//! A [`UnitOfWork`] is the only resource with a lifecycle: every logical transaction
//! must end with exactly one `commit` or `rollback`. [`Transaction`] scopes that
//! boundary and rolls back on drop when neither happened (early return, `?`, panic),
//! and [`atomically`] runs a closure inside one.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use thiserror::Error;

/// Collection-like access to entities of type `T`, keyed by `Id`.
///
/// Methods take `&self`: implementations own their storage and its
/// synchronization, and buffer changes until their unit of work commits.
///
/// Implementations must document how they treat a duplicate `add` (overwrite or
/// reject) and a `remove` of an absent entity (no-op or not-found error).
pub trait Repository<T, Id> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register a new entity for persistence.
    fn add(&self, entity: T) -> Result<(), Self::Error>;

    /// Look up an entity. `Ok(None)` is a normal outcome, not an error.
    fn get(&self, id: &Id) -> Result<Option<T>, Self::Error>;

    /// Every entity. Ordering is implementation-defined unless documented.
    fn list(&self) -> Result<Vec<T>, Self::Error>;

    /// Deregister an entity.
    fn remove(&self, entity: &T) -> Result<(), Self::Error>;
}

/// Named repositories exposed by a unit of work.
pub type Repositories<'a, T, Id, E> =
    BTreeMap<&'static str, &'a dyn Repository<T, Id, Error = E>>;

/// Transactional boundary over a set of named repositories.
///
/// `commit` must make every buffered change across all grouped repositories
/// visible, or none of them; a failed commit restores the pre-commit state.
/// `rollback` discards everything buffered since the last boundary.
pub trait UnitOfWork<T, Id> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn commit(&mut self) -> Result<(), Self::Error>;

    fn rollback(&mut self) -> Result<(), Self::Error>;

    fn repositories(&self) -> Repositories<'_, T, Id, Self::Error>;

    /// One grouped repository by name.
    fn repository(&self, name: &str) -> Option<&dyn Repository<T, Id, Error = Self::Error>> {
        self.repositories().remove(name)
    }
}

/// Failure of a transaction run through [`atomically`].
#[derive(Debug, Error)]
pub enum TransactionError<E, C> {
    /// The work failed; its changes were rolled back.
    #[error("unit of work failed: {0}")]
    Work(E),

    /// The work succeeded but the commit did not; its changes were rolled back.
    #[error("commit failed: {0}")]
    Commit(C),

    /// The work failed and so did the rollback; the unit's state is undefined.
    #[error("unit of work failed: {work}; rollback failed: {rollback}")]
    Rollback { work: E, rollback: C },
}

/// Scoped transaction over a [`UnitOfWork`].
///
/// Dropping an unfinished transaction rolls it back.
pub struct Transaction<'u, U, T, Id>
where
    U: UnitOfWork<T, Id>,
{
    unit: &'u mut U,
    finished: bool,
    _entity: PhantomData<fn() -> (T, Id)>,
}

impl<'u, U, T, Id> Transaction<'u, U, T, Id>
where
    U: UnitOfWork<T, Id>,
{
    pub fn begin(unit: &'u mut U) -> Self {
        tracing::debug!("unit of work started");
        Self {
            unit,
            finished: false,
            _entity: PhantomData,
        }
    }

    pub fn unit(&self) -> &U {
        &*self.unit
    }

    pub fn repositories(&self) -> Repositories<'_, T, Id, U::Error> {
        self.unit.repositories()
    }

    /// Commit the unit. A failed commit leaves the transaction unfinished, so
    /// it is rolled back when `self` drops on the way out.
    pub fn commit(mut self) -> Result<(), U::Error> {
        self.unit.commit()?;
        self.finished = true;
        tracing::debug!("unit of work committed");
        Ok(())
    }

    pub fn rollback(mut self) -> Result<(), U::Error> {
        self.finished = true;
        self.unit.rollback()?;
        tracing::debug!("unit of work rolled back");
        Ok(())
    }
}

impl<U, T, Id> Drop for Transaction<'_, U, T, Id>
where
    U: UnitOfWork<T, Id>,
{
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        match self.unit.rollback() {
            Ok(()) => tracing::warn!("unit of work ended without commit; rolled back"),
            Err(e) => {
                tracing::error!(error = %e, "unit of work ended without commit; rollback failed")
            }
        }
    }
}

/// Run `work` inside a transaction: commit on `Ok`, roll back on `Err` or panic.
pub fn atomically<U, T, Id, R, E, F>(
    unit: &mut U,
    work: F,
) -> Result<R, TransactionError<E, U::Error>>
where
    U: UnitOfWork<T, Id>,
    F: FnOnce(&U) -> Result<R, E>,
{
    let tx = Transaction::<U, T, Id>::begin(unit);
    match work(tx.unit()) {
        Ok(value) => match tx.commit() {
            Ok(()) => Ok(value),
            Err(commit) => Err(TransactionError::Commit(commit)),
        },
        Err(work) => match tx.rollback() {
            Ok(()) => Err(TransactionError::Work(work)),
            Err(rollback) => Err(TransactionError::Rollback { work, rollback }),
        },
    }
}
