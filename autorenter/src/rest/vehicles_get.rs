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

//! API to list all vehicles.

use crate::driver::Driver;
use autorenter_core::rest::{EmptyBody, RestError, list_response};
use axum::extract::State;
use axum::response::Response;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<Response, RestError> {
    Ok(list_response("vehicles", driver.get_vehicles().await?))
}

#[cfg(test)]
mod tests {
    use crate::model::Vehicle;
    use crate::model::testutils::*;
    use crate::rest::testutils::*;
    use autorenter_core::rest::testutils::*;
    use axum::http;
    use std::collections::BTreeMap;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/vehicles".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_header("x-total-count", "0")
            .expect_text(r#"^\{"vehicles":\[\]\}$"#)
            .await;
    }

    #[tokio::test]
    async fn test_across_locations() {
        let context = TestContext::setup().await;
        context.create_location(&location(1, "IND", "Indianapolis")).await;
        context.create_location(&location(2, "CHI", "Chicago")).await;
        context.create_vehicle(&vehicle(10, 1, "VIN-C")).await;
        context.create_vehicle(&vehicle(11, 2, "VIN-A")).await;
        context.create_vehicle(&vehicle(12, 1, "VIN-B")).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_header("x-total-count", "3")
            .expect_json::<BTreeMap<String, Vec<Vehicle>>>()
            .await;
        let exp_vehicles =
            vec![vehicle(11, 2, "VIN-A"), vehicle(12, 1, "VIN-B"), vehicle(10, 1, "VIN-C")];
        assert_eq!(BTreeMap::from([("vehicles".to_owned(), exp_vehicles)]), response);
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
