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

//! Building blocks for the AutoRenter service.
//!
//! The service adheres to the following layered architecture, and this crate provides the
//! domain-independent half of every layer:
//!
//! 1.  `model`: This is the base layer, providing high-level data types that represent concepts in
//!     the domain of the application.  This crate only defines the `Entity` contract that every
//!     persisted type must honor.
//!
//! 1.  `db`: This is the persistence layer.  Entities implement the `Record` trait to describe how
//!     they are stored, and commands stage their changes through a `Context` that is committed
//!     atomically.
//!
//! 1.  `driver`: This is the business logic layer.  It provides the `Outcome` protocol returned by
//!     every operation, the generic insert/update/delete commands, and the `Validator` contract.
//!
//! 1.  `rest`: This is the HTTP layer.  It translates outcomes into HTTP responses and provides the
//!     extractors shared by all APIs.
//!
//! 1.  `main`: This is the app launcher.  It sole purpose is to gather configuration data from
//!     environment variables and call the `serve` function of the service to start it.
//!
//! There are result and error types in every layer, such as `DbResult` and `DbError`.  Errors can
//! transparently float to the top of the app using the `?` operator, being translated to HTTP
//! status codes once returned from the REST layer.  Expected conditions, such as a missing entity,
//! are not errors: they travel as `Outcome` values instead.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod db;
pub mod driver;
pub mod env;
pub mod model;
pub mod rest;
