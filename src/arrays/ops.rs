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

use anyhow::Result;
use bson::{doc, Document};
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::{Collection, Database};

use crate::documents::{IntArrayDocument, StringArrayDocument};

/// Counts every document in the collection and reports it on stdout.
pub(crate) async fn report_count(collection: &Collection<Document>) -> Result<u64> {
    let n = collection.count_documents(doc! {}).await?;
    println!("Connected to {}. Current count: {}", collection.name(), n);
    Ok(n)
}

pub(crate) async fn insert_int_array(db: &Database, collection_name: &str) -> Result<()> {
    let collection = db.collection::<IntArrayDocument>(collection_name);
    let result = collection.insert_one(IntArrayDocument::sample()).await?;
    debug!("inserted int array document: {:?}", result.inserted_id);
    Ok(())
}

pub(crate) async fn insert_string_array(db: &Database, collection_name: &str) -> Result<()> {
    let collection = db.collection::<StringArrayDocument>(collection_name);
    let result = collection.insert_one(StringArrayDocument::sample()).await?;
    debug!("inserted string array document: {:?}", result.inserted_id);
    Ok(())
}

/// Returns the documents whose array field contains `value`.
///
/// Matching a scalar against an array field selects the documents whose
/// array contains that scalar, so a plain equality filter is enough here.
pub(crate) async fn find_array_containing(
    collection: &Collection<Document>,
    field: &str,
    value: &str,
) -> Result<Vec<Document>> {
    let mut filter = Document::new();
    filter.insert(field, value);

    let cursor = collection.find(filter).await?;
    let matching = cursor.try_collect().await?;
    Ok(matching)
}

pub(crate) async fn drop_collection(collection: &Collection<Document>) -> Result<()> {
    collection.drop().await?;
    info!("dropped collection: {}", collection.name());
    Ok(())
}

#[cfg(test)]
mod tests {
    use bson::{doc, Document};

    // The filter shape find_array_containing sends over the wire.
    #[test]
    fn array_contains_filter_is_plain_equality() {
        let mut filter = Document::new();
        filter.insert("string_array", "bernie");
        assert_eq!(filter, doc! { "string_array": "bernie" });
    }
}
