// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Envelope types for SeAT paginated responses and ESI lookups.

use serde::Deserialize;
use serde_json::Value;

/// Pagination metadata returned with every paginated SeAT collection.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageMeta {
    pub last_page: u32,
}

/// First response of a paginated collection. Only the metadata is read.
#[derive(Debug, Deserialize)]
pub struct PageCount {
    pub meta: PageMeta,
}

/// One page of a paginated SeAT collection. Records stay raw so that each
/// one is decoded on its own.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub data: Vec<Value>,
}

/// ESI `GET /<kind>/{id}` response. Only `name` is used.
#[derive(Debug, Deserialize)]
pub struct NamedEntity {
    pub name: String,
}

/// Keys SeAT uses for the identifier of each record kind.
const ID_KEYS: [&str; 5] = [
    "transaction_id",
    "contract_id",
    "job_id",
    "itemID",
    "corporationID",
];

/// Identifier of a raw record, for logging records that fail to decode.
pub fn record_id(record: &Value) -> Option<i64> {
    ID_KEYS
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_i64))
}

/// First page of the trailing window for a collection with `last_page` pages.
///
/// Pages are indexed from 0 and the window always ends at `last_page - 1`.
pub fn window_start(last_page: u32, window: u32) -> u32 {
    if last_page > window {
        last_page - window
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn window_covers_last_three_pages() {
        assert_eq!(window_start(10, 3), 7);
        assert_eq!(window_start(4, 3), 1);
    }

    #[test]
    fn short_collections_start_at_zero() {
        assert_eq!(window_start(3, 3), 0);
        assert_eq!(window_start(2, 3), 0);
        assert_eq!(window_start(0, 3), 0);
    }

    #[test]
    fn page_envelope_parses() {
        let json = r#"{"data":[1,2,3],"meta":{"current_page":2,"last_page":5},"links":{}}"#;
        let count: PageCount = serde_json::from_str(json).unwrap();
        assert_eq!(count.meta.last_page, 5);
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 3);
    }

    #[test]
    fn record_id_finds_the_known_keys() {
        assert_eq!(record_id(&json!({"transaction_id": 7})), Some(7));
        assert_eq!(record_id(&json!({"itemID": 1001, "state": 4})), Some(1001));
        assert_eq!(record_id(&json!({"name": "x"})), None);
    }
}
