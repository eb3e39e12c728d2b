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

//! Demo runner for array-valued documents in a MongoDB collection.
//!
//! The `run` subcommand connects to a `mongod`, reports the document count of
//! the `arrays` collection, inserts a document with an integer-array field,
//! inserts a document with a string-array field, and reports the count after
//! each insert.
//!
//! You can run it with `cargo run -- run`.
//!
//! The runner dials `mongodb://127.0.0.1:27017` and uses the `altshiftmongo`
//! database by default. You can point it elsewhere by passing `--uri`, `--db`
//! and `--collection` arguments.
//! For example: `cargo run -- run --uri mongodb://localhost:27017`.
//!
//! Any driver error is fatal: the runner logs it once and exits with a
//! non-zero status.

mod config;
mod documents;
mod ops;
mod runner;

use clap::{Arg, ArgAction, ArgMatches, Command as App};
use log::error;

use crate::config::{DemoConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_URI};

#[tokio::main]
async fn main() {
    env_logger::init();
    let app = App::new("altshift-arrays")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demo runner for array-valued documents in a MongoDB collection")
        .subcommand(connection_args(
            App::new("run")
                .about("count the collection, insert the sample array documents, count again")
                .arg(
                    Arg::new("ints-only")
                        .long("ints-only")
                        .help("insert only the integer-array document")
                        .action(ArgAction::SetTrue)
                )
        ))
        .subcommand(connection_args(
            App::new("find")
                .about("find documents whose array field contains a value")
                .arg(
                    Arg::new("value")
                        .help("the value to look for")
                        .required(true)
                )
                .arg(
                    Arg::new("field")
                        .long("field")
                        .help("the array field to match against")
                        .default_value("string_array")
                        .num_args(1)
                )
        ))
        .subcommand(connection_args(
            App::new("drop")
                .about("drop the whole collection")
        ));

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("run", sub)) => {
            let config = config_from_matches(sub);
            runner::run_demo(&config, sub.get_flag("ints-only")).await
        }
        Some(("find", sub)) => {
            let config = config_from_matches(sub);
            let field = sub.get_one::<String>("field").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            runner::run_find(&config, field, value).await
        }
        Some(("drop", sub)) => {
            let config = config_from_matches(sub);
            runner::run_drop(&config).await
        }
        _ => {
            eprintln!("you should pass a subcommand, try `arrays run`");
            return;
        }
    };

    if let Err(err) = result {
        error!("fatal: {:?}", err);
        std::process::exit(1);
    }
}

fn connection_args(app: App) -> App {
    app
        .arg(
            Arg::new("uri")
                .long("uri")
                .help("the connection string to dial")
                .default_value(DEFAULT_URI)
                .num_args(1)
        )
        .arg(
            Arg::new("db")
                .long("db")
                .help("the logical database name")
                .default_value(DEFAULT_DATABASE)
                .num_args(1)
        )
        .arg(
            Arg::new("collection")
                .long("collection")
                .help("the collection name")
                .default_value(DEFAULT_COLLECTION)
                .num_args(1)
        )
}

fn config_from_matches(matches: &ArgMatches) -> DemoConfig {
    DemoConfig::new(
        matches.get_one::<String>("uri").unwrap(),
        matches.get_one::<String>("db").unwrap(),
        matches.get_one::<String>("collection").unwrap(),
    )
}
