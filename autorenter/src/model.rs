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

//! Data types for the rental domain.
//!
//! Descriptive fields are optional at this level.  Which of them must be present for a write to be
//! accepted is decided by the validators in the driver.

use autorenter_core::model::Entity;
use derive_getters::Getters;
use serde::Serialize;
use uuid::Uuid;

/// A rental site, which owns the vehicles stationed at it.
#[derive(Clone, Debug, Getters, Serialize)]
#[cfg_attr(test, derive(PartialEq, serde::Deserialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Location {
    /// Unique identifier of the location.
    #[getter(skip)]
    id: Uuid,

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

    /// Vehicles stationed at the site.  Only populated on reads.
    vehicles: Vec<Vehicle>,
}

impl Location {
    /// Creates a new location with only its identifier set.
    pub(crate) fn new(id: Uuid) -> Self {
        Self {
            id,
            site_id: None,
            name: None,
            address: None,
            city: None,
            state: None,
            vehicles: vec![],
        }
    }

    /// Sets the business code of the site.
    pub(crate) fn with_site_id<S: Into<Option<String>>>(mut self, site_id: S) -> Self {
        self.site_id = site_id.into();
        self
    }

    /// Sets the display name of the site.
    pub(crate) fn with_name<S: Into<Option<String>>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the street address of the site.
    pub(crate) fn with_address<S: Into<Option<String>>>(mut self, address: S) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the city where the site is.
    pub(crate) fn with_city<S: Into<Option<String>>>(mut self, city: S) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the state where the site is.
    pub(crate) fn with_state<S: Into<Option<String>>>(mut self, state: S) -> Self {
        self.state = state.into();
        self
    }

    /// Attaches the vehicles stationed at the site.
    pub(crate) fn with_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }
}

impl Entity for Location {
    const NAME: &'static str = "location";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

/// A rentable vehicle, which always belongs to one location.
#[derive(Clone, Debug, Getters, Serialize)]
#[cfg_attr(test, derive(PartialEq, serde::Deserialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Vehicle {
    /// Unique identifier of the vehicle.
    #[getter(skip)]
    id: Uuid,

    /// Vehicle identification number, unique across all vehicles.
    vin: Option<String>,

    /// Manufacturer of the vehicle.
    make: Option<String>,

    /// Model of the vehicle.
    model: Option<String>,

    /// Model year.
    year: i32,

    /// Odometer reading.
    miles: i32,

    /// Paint color.
    color: Option<String>,

    /// Whether the vehicle can be rented to own.
    is_rent_to_own: bool,

    /// Identifier of the location that owns the vehicle.
    location_id: Uuid,
}

impl Vehicle {
    /// Creates a new vehicle stationed at `location_id` with no descriptive fields set.
    pub(crate) fn new(id: Uuid, location_id: Uuid) -> Self {
        Self {
            id,
            vin: None,
            make: None,
            model: None,
            year: 0,
            miles: 0,
            color: None,
            is_rent_to_own: false,
            location_id,
        }
    }

    /// Sets the vehicle identification number.
    pub(crate) fn with_vin<S: Into<Option<String>>>(mut self, vin: S) -> Self {
        self.vin = vin.into();
        self
    }

    /// Sets the manufacturer.
    pub(crate) fn with_make<S: Into<Option<String>>>(mut self, make: S) -> Self {
        self.make = make.into();
        self
    }

    /// Sets the model.
    pub(crate) fn with_model<S: Into<Option<String>>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the model year.
    pub(crate) fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the odometer reading.
    pub(crate) fn with_miles(mut self, miles: i32) -> Self {
        self.miles = miles;
        self
    }

    /// Sets the paint color.
    pub(crate) fn with_color<S: Into<Option<String>>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    /// Sets whether the vehicle can be rented to own.
    pub(crate) fn with_rent_to_own(mut self, is_rent_to_own: bool) -> Self {
        self.is_rent_to_own = is_rent_to_own;
        self
    }
}

impl Entity for Vehicle {
    const NAME: &'static str = "vehicle";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}
