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

//! Database abstraction to manipulate locations and their vehicles.

use crate::model::{Location, Vehicle};
use async_trait::async_trait;
use autorenter_core::db::sqlite::{self, map_sqlx_error};
use autorenter_core::db::{DbError, DbResult, EntryState, Executor, Record, entry_state};
use autorenter_core::model::Entity;
use futures::TryStreamExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use std::collections::HashMap;
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Initializes the database schema.
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

impl TryFrom<SqliteRow> for Location {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: Uuid = row.try_get("id").map_err(map_sqlx_error)?;
        let site_id: Option<String> = row.try_get("site_id").map_err(map_sqlx_error)?;
        let name: Option<String> = row.try_get("name").map_err(map_sqlx_error)?;
        let address: Option<String> = row.try_get("address").map_err(map_sqlx_error)?;
        let city: Option<String> = row.try_get("city").map_err(map_sqlx_error)?;
        let state: Option<String> = row.try_get("state").map_err(map_sqlx_error)?;

        Ok(Location::new(id)
            .with_site_id(site_id)
            .with_name(name)
            .with_address(address)
            .with_city(city)
            .with_state(state))
    }
}

impl TryFrom<SqliteRow> for Vehicle {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: Uuid = row.try_get("id").map_err(map_sqlx_error)?;
        let vin: Option<String> = row.try_get("vin").map_err(map_sqlx_error)?;
        let make: Option<String> = row.try_get("make").map_err(map_sqlx_error)?;
        let model: Option<String> = row.try_get("model").map_err(map_sqlx_error)?;
        let year: i32 = row.try_get("year").map_err(map_sqlx_error)?;
        let miles: i32 = row.try_get("miles").map_err(map_sqlx_error)?;
        let color: Option<String> = row.try_get("color").map_err(map_sqlx_error)?;
        let is_rent_to_own: bool = row.try_get("is_rent_to_own").map_err(map_sqlx_error)?;
        let location_id: Uuid = row.try_get("location_id").map_err(map_sqlx_error)?;

        Ok(Vehicle::new(id, location_id)
            .with_vin(vin)
            .with_make(make)
            .with_model(model)
            .with_year(year)
            .with_miles(miles)
            .with_color(color)
            .with_rent_to_own(is_rent_to_own))
    }
}

/// Gets all locations, each with the vehicles stationed at it.
pub(crate) async fn get_locations(ex: &mut Executor) -> DbResult<Vec<Location>> {
    let mut vehicles: HashMap<Uuid, Vec<Vehicle>> = HashMap::new();
    for vehicle in get_vehicles(ex).await? {
        vehicles.entry(*vehicle.location_id()).or_default().push(vehicle);
    }

    let mut locations = vec![];
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM locations ORDER BY site_id, name, id";
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                let location = Location::try_from(row)?;
                let stationed = vehicles.remove(&location.id()).unwrap_or_default();
                locations.push(location.with_vehicles(stationed));
            }
        }
    }
    Ok(locations)
}

/// Gets the location identified by `id` without its vehicles.
pub(crate) async fn get_location(ex: &mut Executor, id: Uuid) -> DbResult<Option<Location>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM locations WHERE id = ?";
            let raw_location = sqlx::query(query_str)
                .bind(id)
                .fetch_optional(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            raw_location.map(Location::try_from).transpose()
        }
    }
}

/// Stores a new `location`.  Its vehicles, if any, are not stored.
pub(crate) async fn create_location(
    ex: &mut Executor,
    location: &Location,
) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO locations (id, site_id, name, address, city, state)
                VALUES (?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(location.id())
                .bind(location.site_id().as_deref())
                .bind(location.name().as_deref())
                .bind(location.address().as_deref())
                .bind(location.city().as_deref())
                .bind(location.state().as_deref())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Added)
}

/// Replaces the stored fields of an existing `location`.  Its vehicles are left untouched.
pub(crate) async fn update_location(
    ex: &mut Executor,
    location: &Location,
) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE locations
                SET site_id = ?, name = ?, address = ?, city = ?, state = ?
                WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(location.site_id().as_deref())
                .bind(location.name().as_deref())
                .bind(location.address().as_deref())
                .bind(location.city().as_deref())
                .bind(location.state().as_deref())
                .bind(location.id())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Modified)
}

/// Deletes the location identified by `id` along with all of its vehicles.
pub(crate) async fn delete_location(ex: &mut Executor, id: Uuid) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM locations WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id)
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Deleted)
}

/// Gets all vehicles.
pub(crate) async fn get_vehicles(ex: &mut Executor) -> DbResult<Vec<Vehicle>> {
    let mut vehicles = vec![];
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM vehicles ORDER BY vin, id";
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                vehicles.push(Vehicle::try_from(row)?);
            }
        }
    }
    Ok(vehicles)
}

/// Gets all vehicles stationed at the location identified by `location_id`.
pub(crate) async fn get_vehicles_at(
    ex: &mut Executor,
    location_id: Uuid,
) -> DbResult<Vec<Vehicle>> {
    let mut vehicles = vec![];
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM vehicles WHERE location_id = ? ORDER BY vin, id";
            let mut rows = sqlx::query(query_str).bind(location_id).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                vehicles.push(Vehicle::try_from(row)?);
            }
        }
    }
    Ok(vehicles)
}

/// Gets the vehicle identified by `id`.
pub(crate) async fn get_vehicle(ex: &mut Executor, id: Uuid) -> DbResult<Option<Vehicle>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM vehicles WHERE id = ?";
            let raw_vehicle = sqlx::query(query_str)
                .bind(id)
                .fetch_optional(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            raw_vehicle.map(Vehicle::try_from).transpose()
        }
    }
}

/// Stores a new `vehicle`.
///
/// Fails with `DbError::NotFound` if the location of the vehicle does not exist and with
/// `DbError::AlreadyExists` if another vehicle has the same VIN.
pub(crate) async fn create_vehicle(ex: &mut Executor, vehicle: &Vehicle) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO vehicles
                    (id, vin, make, model, year, miles, color, is_rent_to_own, location_id)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(vehicle.id())
                .bind(vehicle.vin().as_deref())
                .bind(vehicle.make().as_deref())
                .bind(vehicle.model().as_deref())
                .bind(*vehicle.year())
                .bind(*vehicle.miles())
                .bind(vehicle.color().as_deref())
                .bind(*vehicle.is_rent_to_own())
                .bind(*vehicle.location_id())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Added)
}

/// Replaces the stored fields of an existing `vehicle`, possibly moving it to another location.
pub(crate) async fn update_vehicle(ex: &mut Executor, vehicle: &Vehicle) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE vehicles
                SET
                    vin = ?, make = ?, model = ?, year = ?, miles = ?, color = ?,
                    is_rent_to_own = ?, location_id = ?
                WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(vehicle.vin().as_deref())
                .bind(vehicle.make().as_deref())
                .bind(vehicle.model().as_deref())
                .bind(*vehicle.year())
                .bind(*vehicle.miles())
                .bind(vehicle.color().as_deref())
                .bind(*vehicle.is_rent_to_own())
                .bind(*vehicle.location_id())
                .bind(vehicle.id())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Modified)
}

/// Deletes the vehicle identified by `id`.
pub(crate) async fn delete_vehicle(ex: &mut Executor, id: Uuid) -> DbResult<EntryState> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM vehicles WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id)
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            done.rows_affected()
        }
    };
    entry_state(rows_affected, EntryState::Deleted)
}

#[async_trait]
impl Record for Location {
    async fn find(ex: &mut Executor, id: Uuid) -> DbResult<Option<Self>> {
        get_location(ex, id).await
    }

    async fn add(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        create_location(ex, record).await
    }

    async fn update(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        update_location(ex, record).await
    }

    async fn remove(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        delete_location(ex, record.id()).await
    }
}

#[async_trait]
impl Record for Vehicle {
    async fn find(ex: &mut Executor, id: Uuid) -> DbResult<Option<Self>> {
        get_vehicle(ex, id).await
    }

    async fn add(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        create_vehicle(ex, record).await
    }

    async fn update(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        update_vehicle(ex, record).await
    }

    async fn remove(ex: &mut Executor, record: &Self) -> DbResult<EntryState> {
        delete_vehicle(ex, record.id()).await
    }
}
