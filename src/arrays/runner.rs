// Copyright 2025 the altshift-arrays developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use anyhow::{Context, Result};
use bson::{doc, Document};
use log::{debug, info};
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::config::DemoConfig;
use crate::ops;

/// The driver would otherwise wait 30 seconds before giving up on a dead
/// endpoint.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Dials the configured endpoint and verifies it answers.
///
/// The driver connects lazily, so a `ping` round trip forces a dead endpoint
/// to fail here instead of in the middle of the script.
pub(crate) async fn connect(config: &DemoConfig) -> Result<Client> {
    debug!("connecting to {}", config.connection_address);

    let mut options = ClientOptions::parse(&config.connection_address).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .with_context(|| {
            format!(
                "make sure `mongod` is up and running on {}",
                config.connection_address
            )
        })?;

    info!("connected to {}", config.connection_address);
    Ok(client)
}

/// Runs the demo script: count, insert the int-array document, count, and
/// unless `ints_only` is set, insert the string-array document and count once
/// more.
pub(crate) async fn run_demo(config: &DemoConfig, ints_only: bool) -> Result<()> {
    let client = connect(config).await?;
    let result = run_script(&client, config, ints_only).await;
    // release the connection on every exit path
    client.shutdown().await;
    result
}

async fn run_script(client: &Client, config: &DemoConfig, ints_only: bool) -> Result<()> {
    println!("Getting a database object");
    let db = client.database(&config.database_name);
    let collection = db.collection::<Document>(&config.collection_name);

    ops::report_count(&collection).await?;

    ops::insert_int_array(&db, &config.collection_name).await?;
    ops::report_count(&collection).await?;

    if !ints_only {
        ops::insert_string_array(&db, &config.collection_name).await?;
        ops::report_count(&collection).await?;
    }

    Ok(())
}

/// Finds the documents whose `field` array contains `value` and prints them.
pub(crate) async fn run_find(config: &DemoConfig, field: &str, value: &str) -> Result<()> {
    let client = connect(config).await?;
    let result = find_and_print(&client, config, field, value).await;
    client.shutdown().await;
    result
}

async fn find_and_print(client: &Client, config: &DemoConfig, field: &str, value: &str) -> Result<()> {
    let db = client.database(&config.database_name);
    let collection = db.collection::<Document>(&config.collection_name);

    let matching = ops::find_array_containing(&collection, field, value).await?;
    println!("Found {} matching document(s)", matching.len());
    for doc in &matching {
        println!("{}", doc);
    }
    Ok(())
}

/// Drops the whole collection.
pub(crate) async fn run_drop(config: &DemoConfig) -> Result<()> {
    let client = connect(config).await?;
    let db = client.database(&config.database_name);
    let collection = db.collection::<Document>(&config.collection_name);

    let result = ops::drop_collection(&collection).await;
    client.shutdown().await;
    result
}
