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

//! API to replace an existing location.

use crate::driver::Driver;
use crate::rest::locations_post::LocationRequest;
use autorenter_core::model::Entity;
use autorenter_core::rest::{ResourceId, RestError, updated_response};
use axum::Json;
use axum::extract::State;
use axum::response::Response;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    ResourceId(id): ResourceId,
    Json(request): Json<LocationRequest>,
) -> Result<Response, RestError> {
    if let Some(body_id) = request.id.filter(|body_id| *body_id != id) {
        return Err(RestError::InvalidRequest(format!(
            "Location id {} in the body does not match {} in the path",
            body_id, id
        )));
    }

    let mut location = request.into_location();
    location.set_id(id);
    let outcome = driver.update_location(location).await?;
    Ok(updated_response(outcome))
}
