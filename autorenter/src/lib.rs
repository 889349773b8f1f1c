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

//! REST service to manage the locations of a vehicle rental business and their vehicles.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use autorenter_core::db::Db;
use autorenter_core::db::sqlite;
use autorenter_core::env::get_optional_var;
use log::info;
use std::error::Error;
use std::net::Ipv4Addr;
use std::sync::Arc;

mod db;
mod driver;
use driver::Driver;
mod model;
mod rest;
use rest::app;

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Database to use when none is configured.
const DEFAULT_DATABASE: &str = "sqlite::memory:";

/// Configuration of the service.
#[derive(Debug, PartialEq)]
pub struct ServiceOptions {
    /// Port to listen on, always on the loopback interface.
    pub port: u16,

    /// Connection string of the SQLite database.
    pub database: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, database: DEFAULT_DATABASE.to_owned() }
    }
}

impl ServiceOptions {
    /// Creates a new set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_PORT` and `<prefix>_DATABASE`.  Unset variables
    /// take their default values.
    pub fn from_env(prefix: &str) -> Result<ServiceOptions, String> {
        let defaults = Self::default();
        Ok(Self {
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(defaults.port),
            database: get_optional_var::<String>(prefix, "DATABASE")?
                .unwrap_or(defaults.database),
        })
    }
}

/// Instantiates all resources to serve the application as configured by `options`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(options: ServiceOptions) -> Result<(), Box<dyn Error>> {
    let db: Arc<dyn Db + Send + Sync> = Arc::new(sqlite::connect(&options.database).await?);
    db::init_schema(&mut db.ex().await?).await?;

    let driver = Driver::new(db.clone());
    let app = app(driver);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, options.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _result = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("Shutting down");
    db.close().await;
    Ok(())
}
