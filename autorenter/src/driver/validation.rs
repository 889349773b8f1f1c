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

//! Rules that writes to the rental entities must satisfy.

use crate::model::{Location, Vehicle};
use autorenter_core::driver::Validator;
use autorenter_core::model::Entity;

/// Returns true if `value` is present and holds something other than whitespace.
fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Validator for writes to locations.
pub(crate) struct LocationValidator;

impl Validator<Location> for LocationValidator {
    fn validate_insert(&self, location: &Location) -> bool {
        !location.id().is_nil() && is_filled(location.site_id()) && is_filled(location.name())
    }
}

/// Validator for writes to vehicles.
pub(crate) struct VehicleValidator;

impl Validator<Vehicle> for VehicleValidator {
    fn validate_insert(&self, vehicle: &Vehicle) -> bool {
        !vehicle.id().is_nil()
            && is_filled(vehicle.vin())
            && is_filled(vehicle.make())
            && is_filled(vehicle.model())
            && *vehicle.year() >= 0
            && *vehicle.miles() >= 0
            && !vehicle.location_id().is_nil()
    }
}
