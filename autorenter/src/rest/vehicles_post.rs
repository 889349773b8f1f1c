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

//! API to create a vehicle.

use crate::driver::Driver;
use crate::model::Vehicle;
use crate::rest::VEHICLES_PATH;
use autorenter_core::model::Entity;
use autorenter_core::rest::{RestError, created_response};
use axum::Json;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use uuid::Uuid;

/// Contents of a vehicle as supplied by clients.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleRequest {
    /// Identifier requested by the client, if any.
    pub(crate) id: Option<Uuid>,

    /// Vehicle identification number.
    vin: Option<String>,

    /// Manufacturer of the vehicle.
    make: Option<String>,

    /// Model of the vehicle.
    model: Option<String>,

    /// Model year.
    #[serde(default)]
    year: i32,

    /// Odometer reading.
    #[serde(default)]
    miles: i32,

    /// Paint color.
    color: Option<String>,

    /// Whether the vehicle can be rented to own.
    #[serde(default)]
    is_rent_to_own: bool,

    /// Identifier of the location that owns the vehicle.
    location_id: Option<Uuid>,
}

impl VehicleRequest {
    /// Converts the request into a vehicle.  Missing identifiers are left as nil: the vehicle id
    /// for the caller to assign and the location id for validation to reject.
    pub(crate) fn into_vehicle(self) -> Vehicle {
        Vehicle::new(self.id.unwrap_or_default(), self.location_id.unwrap_or_default())
            .with_vin(self.vin)
            .with_make(self.make)
            .with_model(self.model)
            .with_year(self.year)
            .with_miles(self.miles)
            .with_color(self.color)
            .with_rent_to_own(self.is_rent_to_own)
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<VehicleRequest>,
) -> Result<Response, RestError> {
    let requested_id = request.id;
    let mut vehicle = request.into_vehicle();
    if requested_id.is_none() {
        vehicle.set_id(Uuid::new_v4());
    }
    let outcome = driver.insert_vehicle(vehicle).await?;
    Ok(created_response(VEHICLES_PATH, outcome))
}
