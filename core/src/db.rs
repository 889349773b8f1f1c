// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic abstraction to access the database and to stage changes against it.
//!
//! Entities describe how they are stored by implementing `Record`.  Business logic never talks to
//! records directly though: it goes through a `Context`, which scopes a set of staged changes to a
//! single unit of work that is either committed as a whole or discarded on drop.

use crate::model::Entity;
use async_trait::async_trait;
use uuid::Uuid;

pub mod sqlite;

/// Database errors.  Any unexpected errors that come from the database are classified as
/// `BackendError`, but errors we know about have more specific types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Indicates that a request to create an entry failed because it already exists.
    #[error("Already exists")]
    AlreadyExists,

    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry, or an entry referenced by another one, does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Indicates that the database is not available (maybe because of too many active concurrent
    /// connections).
    #[error("Unavailable")]
    Unavailable,
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// A database executor.
///
/// Users of this type are forced to destructure it to reach the typed executor of the backend,
/// which is needed by sqlx to offer type safety guarantees during query compilation.
///
/// Note that this can wrap an executor that talks directly to a pool or to an open transaction.
pub enum Executor {
    /// A SQLite executor that can be used in `sqlx` operations.
    Sqlite(sqlite::SqliteExecutor),
}

/// A wrapper for a database executor backed by an open transaction.
pub struct TxExecutor(Executor);

impl TxExecutor {
    /// Returns the executor wrapped by this transaction.
    ///
    /// This would be better called `executor` but this method is used so frequently that it makes
    /// call sites too verbose.
    pub fn ex(&mut self) -> &mut Executor {
        &mut self.0
    }

    /// Commits the transaction.
    pub async fn commit(self) -> DbResult<()> {
        match self.0 {
            Executor::Sqlite(e) => e.commit().await,
        }
    }
}

/// Abstraction over the database connection.
#[async_trait]
pub trait Db {
    /// Obtains an executor for direct access to the pool.
    ///
    /// This would be better called `executor` but this method is used so frequently that it makes
    /// call sites too verbose.
    async fn ex(&self) -> DbResult<Executor>;

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned executor.  Otherwise
    /// the transaction is rolled back on drop.
    ///
    /// Backends may serialize transactions, so a caller holding a transaction must not wait on
    /// another one.
    async fn begin(&self) -> DbResult<TxExecutor>;

    /// Closes the connection to the database.  Must be called before dropping.
    async fn close(&self);
}

/// State of an entity after staging a change for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryState {
    /// The entity was staged for creation.
    Added,

    /// The entity was staged for removal.
    Deleted,

    /// The entity was staged for replacement.
    Modified,

    /// Staging had no effect.
    Unchanged,
}

/// Computes the state of a write that touched `affected` rows when it was expected to touch just
/// one and leave the entity in the `done` state.
pub fn entry_state(affected: u64, done: EntryState) -> DbResult<EntryState> {
    match affected {
        0 => Ok(EntryState::Unchanged),
        1 => Ok(done),
        n => Err(DbError::BackendError(format!("Write affected {} rows instead of one", n))),
    }
}

/// Persistence operations for an entity type.
///
/// Every operation takes an executor so that it can participate in the transaction of a
/// `TxContext`.  Writes report the state they left the entity in so that callers can confirm their
/// effect before committing.
#[async_trait]
pub trait Record: Entity + Sized + Send + Sync {
    /// Looks up the entity identified by `id`.
    async fn find(ex: &mut Executor, id: Uuid) -> DbResult<Option<Self>>;

    /// Stores `record` as a new entity.
    async fn add(ex: &mut Executor, record: &Self) -> DbResult<EntryState>;

    /// Replaces the stored fields of the entity identified by `record`'s id.
    async fn update(ex: &mut Executor, record: &Self) -> DbResult<EntryState>;

    /// Removes the entity identified by `record`'s id.
    async fn remove(ex: &mut Executor, record: &Self) -> DbResult<EntryState>;
}

/// A unit of work over entities of type `E`.
///
/// Changes staged via `add`, `update` and `remove` only become durable after `commit`.  Dropping
/// the context without committing discards them.
#[async_trait]
pub trait Context<E>: Send
where
    E: Entity + Send + Sync,
{
    /// Looks up the entity identified by `id`, taking staged changes into account.
    async fn find(&mut self, id: Uuid) -> DbResult<Option<E>>;

    /// Stages the creation of `entity`.
    async fn add(&mut self, entity: &E) -> DbResult<EntryState>;

    /// Stages the replacement of `entity`.
    async fn update(&mut self, entity: &E) -> DbResult<EntryState>;

    /// Stages the removal of `entity`.
    async fn remove(&mut self, entity: &E) -> DbResult<EntryState>;

    /// Makes all staged changes durable.
    async fn commit(self) -> DbResult<()>;
}

/// A `Context` backed by a database transaction.
pub struct TxContext(TxExecutor);

impl From<TxExecutor> for TxContext {
    fn from(tx: TxExecutor) -> Self {
        Self(tx)
    }
}

#[async_trait]
impl<E> Context<E> for TxContext
where
    E: Record + 'static,
{
    async fn find(&mut self, id: Uuid) -> DbResult<Option<E>> {
        E::find(self.0.ex(), id).await
    }

    async fn add(&mut self, entity: &E) -> DbResult<EntryState> {
        E::add(self.0.ex(), entity).await
    }

    async fn update(&mut self, entity: &E) -> DbResult<EntryState> {
        E::update(self.0.ex(), entity).await
    }

    async fn remove(&mut self, entity: &E) -> DbResult<EntryState> {
        E::remove(self.0.ex(), entity).await
    }

    async fn commit(self) -> DbResult<()> {
        self.0.commit().await
    }
}

/// Macros to help instantiate tests against a configured database.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Instantiates the `module::name` test for the database configured by `setup`.
    ///
    /// The `extra` metadata parameter can be used to tag the generated tests.
    #[macro_export]
    macro_rules! generate_one_test [
        ( $name:ident, $setup:expr, $module:path $(, #[$extra:meta] )? ) => {
            #[tokio::test]
            $(#[$extra])?
            async fn $name() {
                $crate::db::testutils::paste! {
                    $module :: [< $name >]($setup).await;
                }
            }
        }
    ];

    pub use generate_one_test;

    /// Instantiates a collection of tests for a specific database.
    ///
    /// The database to run the tests against is determined by the `setup` expression, which
    /// needs to return a database object already initialized with the desired schema.
    ///
    /// The `extra` metadata parameter can be used to tag the generated tests.
    #[macro_export]
    macro_rules! generate_tests [
        ( #[$extra:meta], $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module, #[$extra]);
            )+
        };

        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module);
            )+
        };
    ];

    pub use generate_tests;
}
