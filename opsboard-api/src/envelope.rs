//! Response envelope normalization.
//!
//! List endpoints are inconsistent about their response shape. The
//! collection may sit under an endpoint-specific key, under `data`, or
//! arrive as a bare array; the `pagination` object may be missing
//! entirely. Everything is normalized here, at the edge, so the rest of
//! the client only ever sees a [`Page<Record>`].
//!
//! A missing or malformed collection is treated as "no results", not as
//! a hard failure. A missing `pagination` object falls back to a
//! computed single-page [`PageInfo`] derived from the collection length.

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::model::Record;
use crate::query::Page;
use crate::query::PageInfo;

/// Normalizes a list response body into a page of records.
pub(crate) fn normalize_page(body: Value, endpoint: &Endpoint, per_page: u32) -> Page<Record> {
    let items = collection(&body, endpoint.collection_key());
    let info = match body.get("pagination") {
        Some(raw) => serde_json::from_value::<PageInfo>(raw.clone())
            .map(PageInfo::sanitized)
            .unwrap_or_else(|_| PageInfo::single_page(items.len(), per_page)),
        None => PageInfo::single_page(items.len(), per_page),
    };
    Page::new(items, info)
}

/// Extracts the record collection from a response body.
///
/// Lookup order: bare array, endpoint-specific key, `data`. Array
/// elements that are not objects are dropped.
fn collection(body: &Value, key: Option<&str>) -> Vec<Record> {
    let array = match body {
        Value::Array(items) => Some(items),
        Value::Object(map) => key
            .and_then(|k| map.get(k))
            .or_else(|| map.get("data"))
            .and_then(Value::as_array),
        _ => None,
    };

    array
        .map(|items| {
            items
                .iter()
                .filter_map(|item| Record::from_value(item.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Extracts a single record from a retrieve/create/update response.
///
/// Endpoints wrap single records as inconsistently as collections: the
/// record may sit under the endpoint key, under `data`, or be the whole
/// body.
pub(crate) fn single_record(body: Value, endpoint: &Endpoint) -> Option<Record> {
    if let Value::Object(map) = &body {
        let nested = endpoint
            .collection_key()
            .and_then(|k| map.get(k))
            .or_else(|| map.get("data"));
        if let Some(inner) = nested
            && inner.is_object()
        {
            return Record::from_value(inner.clone());
        }
    }
    Record::from_value(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("regions").with_collection_key("regions")
    }

    #[test]
    fn test_collection_under_endpoint_key() {
        let body = json!({
            "regions": [{"id": 1, "name": "North"}, {"id": 2, "name": "South"}],
            "pagination": {"current_page": 1, "per_page": 25, "total_pages": 3, "total_count": 55},
        });

        let page = normalize_page(body, &endpoint(), 25);
        assert_eq!(page.len(), 2);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.total_count, 55);
    }

    #[test]
    fn test_collection_under_data_key() {
        let body = json!({"data": [{"id": 9}]});
        let page = normalize_page(body, &Endpoint::new("bills"), 25);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_bare_array_collection() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let page = normalize_page(body, &endpoint(), 25);
        assert_eq!(page.len(), 3);
        assert_eq!(page.info.current_page, 1);
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.info.total_count, 3);
    }

    #[test]
    fn test_missing_collection_key_yields_empty_page() {
        let body = json!({"message": "ok"});
        let page = normalize_page(body, &endpoint(), 25);
        assert!(page.is_empty());
        assert!(page.info.total_pages >= 1);
    }

    #[test]
    fn test_malformed_body_yields_empty_page() {
        let page = normalize_page(json!("not an envelope"), &endpoint(), 25);
        assert!(page.is_empty());
        assert!(page.info.total_pages >= 1);
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let body = json!({"regions": [{"id": 1}, "stray", 7]});
        let page = normalize_page(body, &endpoint(), 25);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_partial_pagination_falls_back() {
        let body = json!({"regions": [{"id": 1}], "pagination": "broken"});
        let page = normalize_page(body, &endpoint(), 25);
        assert_eq!(page.info, PageInfo::single_page(1, 25));
    }

    #[test]
    fn test_single_record_unwrapping() {
        let wrapped = json!({"data": {"id": 4, "name": "East"}});
        let record = single_record(wrapped, &Endpoint::new("zones")).unwrap();
        assert_eq!(record.id(), Some("4".to_string()));

        let bare = json!({"id": 5});
        let record = single_record(bare, &Endpoint::new("zones")).unwrap();
        assert_eq!(record.id(), Some("5".to_string()));
    }
}
