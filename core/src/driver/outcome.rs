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

//! The result protocol shared by all operations.

/// Classification of the result of an operation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResultCode {
    /// The operation completed and its effects, if any, are durable.
    Success,

    /// The operation referred to an entity that does not exist.
    NotFound,

    /// The operation was rejected because of its input.
    BadRequest,

    /// The operation would have created an entity that already exists.
    Conflict,

    /// The operation ran but its effects could not be confirmed.
    Failed,

    /// The result of the operation was never determined.
    #[default]
    Unknown,
}

/// Result of an operation, carrying a value only on success.
///
/// Tying the value to the `Success` variant makes it impossible to observe a value for a failed
/// operation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    /// The operation completed and produced a value.
    Success(T),

    /// See `ResultCode::NotFound`.
    NotFound,

    /// See `ResultCode::BadRequest`.
    BadRequest,

    /// See `ResultCode::Conflict`.
    Conflict,

    /// See `ResultCode::Failed`.
    Failed,

    /// See `ResultCode::Unknown`.
    #[default]
    Unknown,
}

impl<T> Outcome<T> {
    /// Returns the classification of this outcome.
    pub fn code(&self) -> ResultCode {
        match self {
            Outcome::Success(_) => ResultCode::Success,
            Outcome::NotFound => ResultCode::NotFound,
            Outcome::BadRequest => ResultCode::BadRequest,
            Outcome::Conflict => ResultCode::Conflict,
            Outcome::Failed => ResultCode::Failed,
            Outcome::Unknown => ResultCode::Unknown,
        }
    }

    /// Transforms the value of a successful outcome with `f`, preserving any other code.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::BadRequest => Outcome::BadRequest,
            Outcome::Conflict => Outcome::Conflict,
            Outcome::Failed => Outcome::Failed,
            Outcome::Unknown => Outcome::Unknown,
        }
    }
}

impl From<ResultCode> for Outcome<()> {
    fn from(code: ResultCode) -> Self {
        match code {
            ResultCode::Success => Outcome::Success(()),
            ResultCode::NotFound => Outcome::NotFound,
            ResultCode::BadRequest => Outcome::BadRequest,
            ResultCode::Conflict => Outcome::Conflict,
            ResultCode::Failed => Outcome::Failed,
            ResultCode::Unknown => Outcome::Unknown,
        }
    }
}
