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

//! API to create a location.

use crate::driver::Driver;
use crate::model::Location;
use crate::rest::LOCATIONS_PATH;
use autorenter_core::model::Entity;
use autorenter_core::rest::{RestError, created_response};
use axum::Json;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use uuid::Uuid;

/// Contents of a location as supplied by clients.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocationRequest {
    /// Identifier requested by the client, if any.
    pub(crate) id: Option<Uuid>,

    /// Business code of the site.
    site_id: Option<String>,

    /// Display name of the site.
    name: Option<String>,

    /// Street address of the site.
    address: Option<String>,

    /// City where the site is.
    city: Option<String>,

    /// State where the site is.
    state: Option<String>,
}

impl LocationRequest {
    /// Converts the request into a location.  The location is left with the nil identifier if the
    /// client did not request one.
    pub(crate) fn into_location(self) -> Location {
        Location::new(self.id.unwrap_or_default())
            .with_site_id(self.site_id)
            .with_name(self.name)
            .with_address(self.address)
            .with_city(self.city)
            .with_state(self.state)
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<LocationRequest>,
) -> Result<Response, RestError> {
    let requested_id = request.id;
    let mut location = request.into_location();
    if requested_id.is_none() {
        location.set_id(Uuid::new_v4());
    }
    let outcome = driver.insert_location(location).await?;
    Ok(created_response(LOCATIONS_PATH, outcome))
}
