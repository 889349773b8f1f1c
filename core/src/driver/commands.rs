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

//! Existence-checked mutations that work on any entity type.
//!
//! Every command consumes the `Context` it operates on.  Commands commit the context only when the
//! staged change reports the expected state, and the context is dropped (discarding any staged
//! change) in every other case.
//!
//! Lookup failures are faults and propagate as errors.  Write and commit failures caused by
//! constraints are reported as outcomes instead.

use crate::db::{Context, DbError, EntryState};
use crate::driver::{DriverResult, Outcome, ResultCode};
use crate::model::Entity;
use log::{info, warn};
use uuid::Uuid;

/// Converts an error raised while staging or committing a write into the outcome to report.
fn write_failure<T>(name: &str, id: Uuid, e: DbError) -> DriverResult<Outcome<T>> {
    match e {
        DbError::AlreadyExists => Ok(Outcome::Conflict),
        DbError::NotFound => Ok(Outcome::BadRequest),
        DbError::BackendError(_) | DbError::DataIntegrityError(_) => {
            warn!("Write to {} {} not confirmed: {}", name, id, e);
            Ok(Outcome::Failed)
        }
        DbError::Unavailable => Err(e.into()),
    }
}

/// Creates `entity` unless another one with the same id already exists.
///
/// Returns the id of the new entity on success.
pub async fn insert<E, C>(mut ctx: C, entity: E) -> DriverResult<Outcome<Uuid>>
where
    E: Entity + Send + Sync,
    C: Context<E>,
{
    let id = entity.id();
    if ctx.find(id).await?.is_some() {
        return Ok(Outcome::Conflict);
    }

    match ctx.add(&entity).await {
        Ok(EntryState::Added) => (),
        Ok(state) => {
            warn!("Insert of {} {} left it {:?}", E::NAME, id, state);
            return Ok(Outcome::Failed);
        }
        Err(e) => return write_failure(E::NAME, id, e),
    }

    match ctx.commit().await {
        Ok(()) => {
            info!("Created {} {}", E::NAME, id);
            Ok(Outcome::Success(id))
        }
        Err(e) => write_failure(E::NAME, id, e),
    }
}

/// Replaces the stored version of `entity`, which must already exist.
///
/// Returns the id of the entity on success.
pub async fn update<E, C>(mut ctx: C, entity: E) -> DriverResult<Outcome<Uuid>>
where
    E: Entity + Send + Sync,
    C: Context<E>,
{
    let id = entity.id();
    if ctx.find(id).await?.is_none() {
        return Ok(Outcome::NotFound);
    }

    match ctx.update(&entity).await {
        Ok(EntryState::Modified) => (),
        Ok(state) => {
            warn!("Update of {} {} left it {:?}", E::NAME, id, state);
            return Ok(Outcome::Failed);
        }
        Err(e) => return write_failure(E::NAME, id, e),
    }

    match ctx.commit().await {
        Ok(()) => {
            info!("Updated {} {}", E::NAME, id);
            Ok(Outcome::Success(id))
        }
        Err(e) => write_failure(E::NAME, id, e),
    }
}

/// Removes the entity identified by `id`, which must exist.
pub async fn delete<E, C>(mut ctx: C, id: Uuid) -> DriverResult<ResultCode>
where
    E: Entity + Send + Sync,
    C: Context<E>,
{
    let existing = match ctx.find(id).await? {
        Some(existing) => existing,
        None => return Ok(ResultCode::NotFound),
    };

    match ctx.remove(&existing).await {
        Ok(EntryState::Deleted) => (),
        Ok(state) => {
            warn!("Delete of {} {} left it {:?}", E::NAME, id, state);
            return Ok(ResultCode::Failed);
        }
        Err(e) => return write_failure::<()>(E::NAME, id, e).map(|outcome| outcome.code()),
    }

    match ctx.commit().await {
        Ok(()) => {
            info!("Deleted {} {}", E::NAME, id);
            Ok(ResultCode::Success)
        }
        Err(e) => write_failure::<()>(E::NAME, id, e).map(|outcome| outcome.code()),
    }
}
