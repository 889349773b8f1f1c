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

//! REST interface for the rental service.

use crate::driver::Driver;
use axum::Router;
use tower_http::cors::CorsLayer;

mod location_delete;
mod location_get;
mod location_put;
mod location_vehicles_get;
mod locations_get;
mod locations_post;
#[cfg(test)]
mod testutils;
mod vehicle_delete;
mod vehicle_get;
mod vehicle_put;
mod vehicles_get;
mod vehicles_post;

/// Path to the collection of locations.
const LOCATIONS_PATH: &str = "/locations";

/// Path to the collection of vehicles.
const VEHICLES_PATH: &str = "/vehicles";

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route(LOCATIONS_PATH, get(locations_get::handler).post(locations_post::handler))
        .route(
            "/locations/:id",
            get(location_get::handler).put(location_put::handler).delete(location_delete::handler),
        )
        .route("/locations/:id/vehicles", get(location_vehicles_get::handler))
        .route(VEHICLES_PATH, get(vehicles_get::handler).post(vehicles_post::handler))
        .route(
            "/vehicles/:id",
            get(vehicle_get::handler).put(vehicle_put::handler).delete(vehicle_delete::handler),
        )
        .layer(CorsLayer::permissive())
        .with_state(driver)
}
