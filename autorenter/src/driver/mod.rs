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

//! Business logic for the service.

use autorenter_core::db::{Db, Record, TxContext};
use autorenter_core::driver::{DriverResult, Outcome, ResultCode, Validator, commands};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

mod locations;
#[cfg(test)]
mod testutils;
mod validation;
pub(crate) use validation::{LocationValidator, VehicleValidator};
mod vehicles;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction, so it's incorrect for the caller to use two separate calls.  For this reason,
/// these operations consume the driver in an attempt to minimize the possibility of executing
/// two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }

    /// Creates `entity` if `validator` accepts it.
    async fn insert<E, V>(self, validator: V, entity: E) -> DriverResult<Outcome<Uuid>>
    where
        E: Record + 'static,
        V: Validator<E>,
    {
        if !validator.validate_insert(&entity) {
            debug!("Rejected insert of {} {}", E::NAME, entity.id());
            return Ok(Outcome::BadRequest);
        }

        let ctx = TxContext::from(self.db.begin().await?);
        commands::insert(ctx, entity).await
    }

    /// Replaces the stored version of `entity` if `validator` accepts it.
    async fn update<E, V>(self, validator: V, entity: E) -> DriverResult<Outcome<Uuid>>
    where
        E: Record + 'static,
        V: Validator<E>,
    {
        if !validator.validate_update(&entity) {
            debug!("Rejected update of {} {}", E::NAME, entity.id());
            return Ok(Outcome::BadRequest);
        }

        let ctx = TxContext::from(self.db.begin().await?);
        commands::update(ctx, entity).await
    }

    /// Deletes the entity identified by `id` if `validator` accepts it.
    async fn delete<E, V>(self, validator: V, id: Uuid) -> DriverResult<ResultCode>
    where
        E: Record + 'static,
        V: Validator<E>,
    {
        if !validator.validate_delete(id) {
            debug!("Rejected delete of {} {}", E::NAME, id);
            return Ok(ResultCode::BadRequest);
        }

        let ctx = TxContext::from(self.db.begin().await?);
        commands::delete::<E, _>(ctx, id).await
    }
}
