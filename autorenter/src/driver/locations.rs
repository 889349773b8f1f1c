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

//! Operations on locations.

use crate::db;
use crate::driver::{Driver, LocationValidator};
use crate::model::{Location, Vehicle};
use autorenter_core::driver::{DriverResult, Outcome, ResultCode};
use uuid::Uuid;

impl Driver {
    /// Gets all locations along with their vehicles.
    pub(crate) async fn get_locations(self) -> DriverResult<Outcome<Vec<Location>>> {
        let locations = db::get_locations(&mut self.db.ex().await?).await?;
        Ok(Outcome::Success(locations))
    }

    /// Gets the location identified by `id` along with its vehicles.
    pub(crate) async fn get_location(self, id: Uuid) -> DriverResult<Outcome<Location>> {
        let mut tx = self.db.begin().await?;
        let location = match db::get_location(tx.ex(), id).await? {
            Some(location) => location,
            None => return Ok(Outcome::NotFound),
        };
        let vehicles = db::get_vehicles_at(tx.ex(), id).await?;
        tx.commit().await?;
        Ok(Outcome::Success(location.with_vehicles(vehicles)))
    }

    /// Gets the vehicles stationed at the location identified by `id`.
    pub(crate) async fn get_location_vehicles(
        self,
        id: Uuid,
    ) -> DriverResult<Outcome<Vec<Vehicle>>> {
        let mut tx = self.db.begin().await?;
        if db::get_location(tx.ex(), id).await?.is_none() {
            return Ok(Outcome::NotFound);
        }
        let vehicles = db::get_vehicles_at(tx.ex(), id).await?;
        tx.commit().await?;
        Ok(Outcome::Success(vehicles))
    }

    /// Creates a new `location`.  Any vehicles attached to it are ignored.
    pub(crate) async fn insert_location(self, location: Location) -> DriverResult<Outcome<Uuid>> {
        self.insert(LocationValidator, location).await
    }

    /// Replaces the descriptive fields of an existing `location`, leaving its vehicles untouched.
    pub(crate) async fn update_location(self, location: Location) -> DriverResult<Outcome<Uuid>> {
        self.update(LocationValidator, location).await
    }

    /// Deletes the location identified by `id` and all of its vehicles.
    pub(crate) async fn delete_location(self, id: Uuid) -> DriverResult<ResultCode> {
        self.delete::<Location, _>(LocationValidator, id).await
    }
}
