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

pub(crate) const DEFAULT_URI: &str = "mongodb://127.0.0.1:27017";
pub(crate) const DEFAULT_DATABASE: &str = "altshiftmongo";
pub(crate) const DEFAULT_COLLECTION: &str = "arrays";

/// Everything the demo needs to know about where it is writing.
#[derive(Debug, Clone)]
pub(crate) struct DemoConfig {
    pub(crate) connection_address: String,
    pub(crate) database_name: String,
    pub(crate) collection_name: String,
}

impl DemoConfig {

    pub(crate) fn new(connection_address: &str, database_name: &str, collection_name: &str) -> DemoConfig {
        DemoConfig {
            connection_address: connection_address.to_string(),
            database_name: database_name.to_string(),
            collection_name: collection_name.to_string(),
        }
    }

}

impl Default for DemoConfig {

    fn default() -> DemoConfig {
        DemoConfig::new(DEFAULT_URI, DEFAULT_DATABASE, DEFAULT_COLLECTION)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_mongod() {
        let config = DemoConfig::default();
        assert_eq!(config.connection_address, "mongodb://127.0.0.1:27017");
        assert_eq!(config.database_name, "altshiftmongo");
        assert_eq!(config.collection_name, "arrays");
    }
}
