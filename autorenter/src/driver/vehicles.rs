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

//! Operations on vehicles.

use crate::db;
use crate::driver::{Driver, VehicleValidator};
use crate::model::Vehicle;
use autorenter_core::driver::{DriverResult, Outcome, ResultCode};
use uuid::Uuid;

impl Driver {
    /// Gets all vehicles regardless of their location.
    pub(crate) async fn get_vehicles(self) -> DriverResult<Outcome<Vec<Vehicle>>> {
        let vehicles = db::get_vehicles(&mut self.db.ex().await?).await?;
        Ok(Outcome::Success(vehicles))
    }

    /// Gets the vehicle identified by `id`.
    pub(crate) async fn get_vehicle(self, id: Uuid) -> DriverResult<Outcome<Vehicle>> {
        match db::get_vehicle(&mut self.db.ex().await?, id).await? {
            Some(vehicle) => Ok(Outcome::Success(vehicle)),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Creates a new `vehicle`, whose location must exist.
    pub(crate) async fn insert_vehicle(self, vehicle: Vehicle) -> DriverResult<Outcome<Uuid>> {
        self.insert(VehicleValidator, vehicle).await
    }

    /// Replaces an existing `vehicle`, possibly moving it to another location.
    pub(crate) async fn update_vehicle(self, vehicle: Vehicle) -> DriverResult<Outcome<Uuid>> {
        self.update(VehicleValidator, vehicle).await
    }

    /// Deletes the vehicle identified by `id`.
    pub(crate) async fn delete_vehicle(self, id: Uuid) -> DriverResult<ResultCode> {
        self.delete::<Vehicle, _>(VehicleValidator, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use crate::model::testutils::*;

    /// Sets up a test context with two locations.
    async fn setup() -> TestContext {
        let context = TestContext::setup().await;
        context.create_location(&location(1, "IND", "Indianapolis")).await;
        context.create_location(&location(2, "CHI", "Chicago")).await;
        context
    }

    #[tokio::test]
    async fn test_get_vehicles() {
        let context = setup().await;
        assert_eq!(Outcome::Success(vec![]), context.driver().get_vehicles().await.unwrap());

        context.create_vehicle(&vehicle(10, 1, "VIN-B")).await;
        context.create_vehicle(&vehicle(11, 2, "VIN-A")).await;
        assert_eq!(
            Outcome::Success(vec![vehicle(11, 2, "VIN-A"), vehicle(10, 1, "VIN-B")]),
            context.driver().get_vehicles().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_vehicle() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        assert_eq!(
            Outcome::Success(vehicle(10, 1, "VIN-A")),
            context.driver().get_vehicle(Uuid::from_u128(10)).await.unwrap()
        );
        assert_eq!(
            Outcome::NotFound,
            context.driver().get_vehicle(Uuid::from_u128(11)).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_insert_vehicle_ok() {
        let context = setup().await;

        let vehicle = vehicle(10, 1, "VIN-A").with_rent_to_own(true);
        assert_eq!(
            Outcome::Success(Uuid::from_u128(10)),
            context.driver().insert_vehicle(vehicle.clone()).await.unwrap()
        );
        assert_eq!(Some(vehicle), context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_insert_vehicle_conflicts() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        assert_eq!(
            Outcome::Conflict,
            context.driver().insert_vehicle(vehicle(10, 2, "VIN-B")).await.unwrap()
        );
        assert_eq!(
            Outcome::Conflict,
            context.driver().insert_vehicle(vehicle(11, 2, "VIN-A")).await.unwrap()
        );
        assert_eq!(None, context.get_vehicle(11).await);
    }

    #[tokio::test]
    async fn test_insert_vehicle_unknown_location() {
        let context = setup().await;

        assert_eq!(
            Outcome::BadRequest,
            context.driver().insert_vehicle(vehicle(10, 99, "VIN-A")).await.unwrap()
        );
        assert_eq!(None, context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_insert_vehicle_invalid() {
        let context = setup().await;

        assert_eq!(
            Outcome::BadRequest,
            context.driver().insert_vehicle(vehicle(10, 1, " ")).await.unwrap()
        );
        assert_eq!(
            Outcome::BadRequest,
            context.driver().insert_vehicle(vehicle(10, 0, "VIN-A")).await.unwrap()
        );
        assert_eq!(None, context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_update_vehicle_moves_it() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        let moved = vehicle(10, 2, "VIN-A").with_miles(13000);
        assert_eq!(
            Outcome::Success(Uuid::from_u128(10)),
            context.driver().update_vehicle(moved.clone()).await.unwrap()
        );
        assert_eq!(Some(moved), context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_update_vehicle_not_found() {
        let context = setup().await;

        assert_eq!(
            Outcome::NotFound,
            context.driver().update_vehicle(vehicle(10, 1, "VIN-A")).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_vehicle_invalid() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        for invalid in [
            vehicle(10, 1, "VIN-A").with_vin(None::<String>),
            vehicle(10, 1, "VIN-A").with_year(-1),
            vehicle(10, 1, "VIN-A").with_miles(-5),
            vehicle(10, 0, "VIN-A"),
        ] {
            assert_eq!(
                Outcome::BadRequest,
                context.driver().update_vehicle(invalid).await.unwrap()
            );
        }
        assert_eq!(Some(vehicle(10, 1, "VIN-A")), context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_update_vehicle_duplicate_vin() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;
        context.create_vehicle(&vehicle(11, 1, "VIN-B")).await;

        assert_eq!(
            Outcome::Conflict,
            context.driver().update_vehicle(vehicle(11, 1, "VIN-A")).await.unwrap()
        );
        assert_eq!(Some(vehicle(11, 1, "VIN-B")), context.get_vehicle(11).await);
    }

    #[tokio::test]
    async fn test_update_vehicle_unknown_location() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        assert_eq!(
            Outcome::BadRequest,
            context.driver().update_vehicle(vehicle(10, 99, "VIN-A")).await.unwrap()
        );
        assert_eq!(Some(vehicle(10, 1, "VIN-A")), context.get_vehicle(10).await);
    }

    #[tokio::test]
    async fn test_delete_vehicle() {
        let context = setup().await;
        context.create_vehicle(&vehicle(10, 1, "VIN-A")).await;

        let id = Uuid::from_u128(10);
        assert_eq!(ResultCode::Success, context.driver().delete_vehicle(id).await.unwrap());
        assert_eq!(None, context.get_vehicle(10).await);
        assert_eq!(ResultCode::NotFound, context.driver().delete_vehicle(id).await.unwrap());
        assert!(context.get_location(1).await.is_some());
    }
}
