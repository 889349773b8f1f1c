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

//! Translation of operation outcomes into HTTP responses.
//!
//! Only successful outcomes carry a body.  Every other result code yields an empty response whose
//! status depends on the code alone.

use crate::driver::{Outcome, ResultCode};
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Name of the header that carries the number of items in a list response.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Kind of operation whose outcome is being reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Retrieval of one or more entities.
    Read,

    /// Creation of an entity.
    Create,

    /// Replacement of an entity.
    Update,

    /// Removal of an entity.
    Delete,
}

/// Maps the result `code` of an `operation` to the HTTP status to report.
pub fn status_for(code: ResultCode, operation: Operation) -> StatusCode {
    match code {
        ResultCode::Success => match operation {
            Operation::Read | Operation::Update => StatusCode::OK,
            Operation::Create => StatusCode::CREATED,
            Operation::Delete => StatusCode::NO_CONTENT,
        },
        ResultCode::NotFound => StatusCode::NOT_FOUND,
        ResultCode::BadRequest => StatusCode::BAD_REQUEST,
        ResultCode::Conflict => StatusCode::CONFLICT,
        ResultCode::Failed | ResultCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the empty response for an unsuccessful `code`.
fn empty_response(code: ResultCode, operation: Operation) -> Response {
    status_for(code, operation).into_response()
}

/// Builds the response for reading a single entity, wrapping it in an object under `field`.
pub fn read_response<T: Serialize>(field: &'static str, outcome: Outcome<T>) -> Response {
    let code = outcome.code();
    match outcome {
        Outcome::Success(value) => {
            let body = BTreeMap::from([(field, value)]);
            (status_for(code, Operation::Read), Json(body)).into_response()
        }
        _ => empty_response(code, Operation::Read),
    }
}

/// Builds the response for reading a collection, wrapping it in an object under `field` and
/// reporting its size in the `TOTAL_COUNT_HEADER`.
pub fn list_response<T: Serialize>(field: &'static str, outcome: Outcome<Vec<T>>) -> Response {
    let code = outcome.code();
    match outcome {
        Outcome::Success(values) => {
            let count = values.len().to_string();
            let body = BTreeMap::from([(field, values)]);
            (status_for(code, Operation::Read), [(TOTAL_COUNT_HEADER, count)], Json(body))
                .into_response()
        }
        _ => empty_response(code, Operation::Read),
    }
}

/// Builds the response for creating an entity within the collection at `collection_path`.
///
/// The body holds the id of the new entity and the `Location` header points to it.
pub fn created_response(collection_path: &str, outcome: Outcome<Uuid>) -> Response {
    let code = outcome.code();
    match outcome {
        Outcome::Success(id) => {
            let location = format!("{}/{}", collection_path, id);
            (status_for(code, Operation::Create), [(header::LOCATION, location)], Json(id))
                .into_response()
        }
        _ => empty_response(code, Operation::Create),
    }
}

/// Builds the response for replacing an entity, whose body holds the id of the entity.
pub fn updated_response(outcome: Outcome<Uuid>) -> Response {
    let code = outcome.code();
    match outcome {
        Outcome::Success(id) => (status_for(code, Operation::Update), Json(id)).into_response(),
        _ => empty_response(code, Operation::Update),
    }
}

/// Builds the response for removing an entity.
pub fn deleted_response(code: ResultCode) -> Response {
    empty_response(code, Operation::Delete)
}
