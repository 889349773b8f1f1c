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

//! Database tests.

use crate::db::*;
use crate::model::testutils::*;
use autorenter_core::db::Db;
use std::sync::Arc;

/// Connects to a fresh database with the schema of the service.
async fn setup() -> Arc<dyn Db + Send + Sync> {
    let db: Arc<dyn Db + Send + Sync> =
        Arc::new(autorenter_core::db::sqlite::testutils::setup().await);
    init_schema(&mut db.ex().await.unwrap()).await.unwrap();
    db
}

async fn test_location_crud(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();
    let id = Uuid::from_u128(1);

    assert_eq!(Ok(None), get_location(&mut ex, id).await);

    let location = location(1, "IND", "Indianapolis").with_state("IN".to_owned());
    assert_eq!(Ok(EntryState::Added), create_location(&mut ex, &location).await);
    assert_eq!(Ok(Some(location.clone())), get_location(&mut ex, id).await);

    let location =
        location.with_name("Indianapolis International".to_owned()).with_state(None::<String>);
    assert_eq!(Ok(EntryState::Modified), update_location(&mut ex, &location).await);
    assert_eq!(Ok(Some(location)), get_location(&mut ex, id).await);

    assert_eq!(Ok(EntryState::Deleted), delete_location(&mut ex, id).await);
    assert_eq!(Ok(None), get_location(&mut ex, id).await);
}

async fn test_location_duplicate_id(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    assert_eq!(
        Err(DbError::AlreadyExists),
        create_location(&mut ex, &location(1, "CHI", "Chicago")).await
    );
}

async fn test_location_missing_writes_are_unchanged(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(
        Ok(EntryState::Unchanged),
        update_location(&mut ex, &location(1, "IND", "Indianapolis")).await
    );
    assert_eq!(Ok(EntryState::Unchanged), delete_location(&mut ex, Uuid::from_u128(1)).await);
}

async fn test_get_locations_groups_vehicles(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(Ok(vec![]), get_locations(&mut ex).await);

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    create_location(&mut ex, &location(2, "CHI", "Chicago")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(10, 1, "VIN-A")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(11, 2, "VIN-B")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(12, 1, "VIN-C")).await.unwrap();

    let locations = get_locations(&mut ex).await.unwrap();
    assert_eq!(
        vec![
            location(2, "CHI", "Chicago").with_vehicles(vec![vehicle(11, 2, "VIN-B")]),
            location(1, "IND", "Indianapolis")
                .with_vehicles(vec![vehicle(10, 1, "VIN-A"), vehicle(12, 1, "VIN-C")]),
        ],
        locations
    );
}

async fn test_vehicle_crud(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();
    let id = Uuid::from_u128(10);

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    create_location(&mut ex, &location(2, "CHI", "Chicago")).await.unwrap();

    assert_eq!(Ok(None), get_vehicle(&mut ex, id).await);

    let vehicle = vehicle(10, 1, "VIN-A").with_color("Red".to_owned()).with_rent_to_own(true);
    assert_eq!(Ok(EntryState::Added), create_vehicle(&mut ex, &vehicle).await);
    assert_eq!(Ok(Some(vehicle.clone())), get_vehicle(&mut ex, id).await);

    let moved = crate::model::testutils::vehicle(10, 2, "VIN-A").with_miles(5);
    assert_eq!(Ok(EntryState::Modified), update_vehicle(&mut ex, &moved).await);
    assert_eq!(Ok(Some(moved.clone())), get_vehicle(&mut ex, id).await);
    assert_eq!(Ok(vec![]), get_vehicles_at(&mut ex, Uuid::from_u128(1)).await);
    assert_eq!(Ok(vec![moved]), get_vehicles_at(&mut ex, Uuid::from_u128(2)).await);

    assert_eq!(Ok(EntryState::Deleted), delete_vehicle(&mut ex, id).await);
    assert_eq!(Ok(EntryState::Unchanged), delete_vehicle(&mut ex, id).await);
    assert_eq!(Ok(vec![]), get_vehicles(&mut ex).await);
}

async fn test_vehicle_unknown_location(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert_eq!(Err(DbError::NotFound), create_vehicle(&mut ex, &vehicle(10, 99, "VIN-A")).await);

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(10, 1, "VIN-A")).await.unwrap();
    assert_eq!(Err(DbError::NotFound), update_vehicle(&mut ex, &vehicle(10, 99, "VIN-A")).await);
}

async fn test_vehicle_duplicate_vin(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(10, 1, "VIN-A")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(11, 1, "VIN-B")).await.unwrap();

    assert_eq!(
        Err(DbError::AlreadyExists),
        create_vehicle(&mut ex, &vehicle(12, 1, "VIN-A")).await
    );
    assert_eq!(
        Err(DbError::AlreadyExists),
        update_vehicle(&mut ex, &vehicle(11, 1, "VIN-A")).await
    );
}

async fn test_required_columns_reject_nulls(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    for location in [
        location(1, "IND", "Indianapolis").with_site_id(None::<String>),
        location(1, "IND", "Indianapolis").with_name(None::<String>),
    ] {
        match create_location(&mut ex, &location).await {
            Err(DbError::BackendError(e)) => assert!(e.contains("NOT NULL")),
            e => panic!("Must have failed with a BackendError but got: {:?}", e),
        }
    }
    assert_eq!(Ok(None), get_location(&mut ex, Uuid::from_u128(1)).await);

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    for vehicle in [
        vehicle(10, 1, "VIN-A").with_vin(None::<String>),
        vehicle(10, 1, "VIN-A").with_make(None::<String>),
        vehicle(10, 1, "VIN-A").with_model(None::<String>),
    ] {
        match create_vehicle(&mut ex, &vehicle).await {
            Err(DbError::BackendError(e)) => assert!(e.contains("NOT NULL")),
            e => panic!("Must have failed with a BackendError but got: {:?}", e),
        }
    }
    assert_eq!(Ok(None), get_vehicle(&mut ex, Uuid::from_u128(10)).await);
}

async fn test_delete_location_cascades(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    create_location(&mut ex, &location(1, "IND", "Indianapolis")).await.unwrap();
    create_location(&mut ex, &location(2, "CHI", "Chicago")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(10, 1, "VIN-A")).await.unwrap();
    create_vehicle(&mut ex, &vehicle(11, 2, "VIN-B")).await.unwrap();

    delete_location(&mut ex, Uuid::from_u128(1)).await.unwrap();

    assert_eq!(Ok(None), get_vehicle(&mut ex, Uuid::from_u128(10)).await);
    assert_eq!(Ok(vec![vehicle(11, 2, "VIN-B")]), get_vehicles(&mut ex).await);
}

async fn test_records_behave_like_queries(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let location = location(1, "IND", "Indianapolis");
    assert_eq!(Ok(EntryState::Added), Location::add(&mut ex, &location).await);
    assert_eq!(Ok(Some(location.clone())), Location::find(&mut ex, location.id()).await);

    let vehicle = vehicle(10, 1, "VIN-A");
    assert_eq!(Ok(EntryState::Added), Vehicle::add(&mut ex, &vehicle).await);
    let vehicle = vehicle.with_miles(1);
    assert_eq!(Ok(EntryState::Modified), Vehicle::update(&mut ex, &vehicle).await);
    assert_eq!(Ok(Some(vehicle.clone())), Vehicle::find(&mut ex, vehicle.id()).await);
    assert_eq!(Ok(EntryState::Deleted), Vehicle::remove(&mut ex, &vehicle).await);

    assert_eq!(Ok(EntryState::Deleted), Location::remove(&mut ex, &location).await);
}

mod sqlite {
    use super::setup;
    use autorenter_core::db::testutils::generate_tests;

    generate_tests!(
        setup().await,
        crate::db::tests,
        test_location_crud,
        test_location_duplicate_id,
        test_location_missing_writes_are_unchanged,
        test_get_locations_groups_vehicles,
        test_vehicle_crud,
        test_vehicle_unknown_location,
        test_vehicle_duplicate_vin,
        test_required_columns_reject_nulls,
        test_delete_location_cascades,
        test_records_behave_like_queries
    );
}
