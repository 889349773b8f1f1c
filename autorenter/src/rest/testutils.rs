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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::{Location, Vehicle};
use crate::rest::app;
use autorenter_core::db::Db;
use axum::Router;
use std::sync::Arc;
use uuid::Uuid;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(autorenter_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn create_location(&self, location: &Location) {
        db::create_location(&mut self.db.ex().await.unwrap(), location).await.unwrap();
    }

    pub(crate) async fn create_vehicle(&self, vehicle: &Vehicle) {
        db::create_vehicle(&mut self.db.ex().await.unwrap(), vehicle).await.unwrap();
    }

    pub(crate) async fn get_locations(&self) -> Vec<Location> {
        db::get_locations(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    pub(crate) async fn get_location(&self, id: u128) -> Option<Location> {
        db::get_location(&mut self.db.ex().await.unwrap(), Uuid::from_u128(id)).await.unwrap()
    }

    pub(crate) async fn get_vehicle(&self, id: u128) -> Option<Vehicle> {
        db::get_vehicle(&mut self.db.ex().await.unwrap(), Uuid::from_u128(id)).await.unwrap()
    }
}
