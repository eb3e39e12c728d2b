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

use serde::{Deserialize, Serialize};

/// Document with an integer-array field, inserted once per run.
///
/// The field name is part of the stored representation and must stay
/// `some_array`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct IntArrayDocument {
    pub(crate) some_array: Vec<i32>,
}

impl IntArrayDocument {

    pub(crate) fn sample() -> IntArrayDocument {
        IntArrayDocument {
            some_array: vec![1, 2, 3, 4],
        }
    }

}

/// Document with a string-array field, inserted on the same collection.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StringArrayDocument {
    pub(crate) string_array: Vec<String>,
}

impl StringArrayDocument {

    pub(crate) fn sample() -> StringArrayDocument {
        StringArrayDocument {
            string_array: vec![
                "bernie".to_string(),
                "ernie".to_string(),
                "dottie".to_string(),
            ],
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    #[test]
    fn int_array_serializes_with_exact_field_name() {
        let doc = bson::to_document(&IntArrayDocument::sample()).unwrap();
        assert_eq!(doc.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec!["some_array"]);

        let arr = doc.get_array("some_array").unwrap();
        let expected: Vec<Bson> = vec![1, 2, 3, 4].into_iter().map(Bson::Int32).collect();
        assert_eq!(arr, &expected);
    }

    #[test]
    fn string_array_serializes_with_exact_field_name() {
        let doc = bson::to_document(&StringArrayDocument::sample()).unwrap();
        assert_eq!(doc.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec!["string_array"]);

        let arr = doc.get_array("string_array").unwrap();
        let expected: Vec<Bson> = ["bernie", "ernie", "dottie"]
            .iter()
            .map(|s| Bson::String(s.to_string()))
            .collect();
        assert_eq!(arr, &expected);
    }
}
