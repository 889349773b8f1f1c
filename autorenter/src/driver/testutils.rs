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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::{Location, Vehicle};
use autorenter_core::db::{Db, EntryState, Executor};
use std::sync::Arc;
use uuid::Uuid;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver, for direct access.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver against a fresh database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(autorenter_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Gets a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver to issue one operation.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Stores `location` bypassing the driver.
    pub(crate) async fn create_location(&self, location: &Location) {
        let state = db::create_location(&mut self.ex().await, location).await.unwrap();
        assert_eq!(EntryState::Added, state);
    }

    /// Stores `vehicle` bypassing the driver.
    pub(crate) async fn create_vehicle(&self, vehicle: &Vehicle) {
        let state = db::create_vehicle(&mut self.ex().await, vehicle).await.unwrap();
        assert_eq!(EntryState::Added, state);
    }

    /// Fetches the location with the numeric `id` bypassing the driver.
    pub(crate) async fn get_location(&self, id: u128) -> Option<Location> {
        db::get_location(&mut self.ex().await, Uuid::from_u128(id)).await.unwrap()
    }

    /// Fetches the vehicle with the numeric `id` bypassing the driver.
    pub(crate) async fn get_vehicle(&self, id: u128) -> Option<Vehicle> {
        db::get_vehicle(&mut self.ex().await, Uuid::from_u128(id)).await.unwrap()
    }
}
