#![allow(clippy::float_cmp)]

use super::*;

fn sample() -> Product {
    Product {
        id: "p1".to_owned(),
        name: "Landing Page Kit".to_owned(),
        category: "Templates".to_owned(),
        description: "Responsive starter".to_owned(),
        price: 499.0,
        live_link: Some("https://example.com/kit".to_owned()),
        images: vec!["https://img.example.com/a.png".to_owned()],
    }
}

#[test]
fn serializes_backend_field_names() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["_id"], "p1");
    assert_eq!(value["liveLink"], "https://example.com/kit");
    assert_eq!(value["images"][0], "https://img.example.com/a.png");
    assert!(value.get("id").is_none());
    assert!(value.get("live_link").is_none());
}

#[test]
fn deserializes_price_from_numeric_string() {
    let body = r#"{"_id":"p2","name":"Logo","category":"Design","price":" 120.5 "}"#;
    let product: Product = serde_json::from_str(body).unwrap();
    assert_eq!(product.price, 120.5);
    assert!(product.images.is_empty());
    assert_eq!(product.description, "");
    assert_eq!(product.live_link, None);
}

#[test]
fn rejects_negative_or_non_numeric_price() {
    let negative = r#"{"_id":"p","name":"n","category":"c","price":-1}"#;
    assert!(serde_json::from_str::<Product>(negative).is_err());
    let text = r#"{"_id":"p","name":"n","category":"c","price":"free"}"#;
    assert!(serde_json::from_str::<Product>(text).is_err());
}

#[test]
fn blank_live_link_decodes_as_none() {
    let body = r#"{"_id":"p","name":"n","category":"c","price":1,"liveLink":"  "}"#;
    let product: Product = serde_json::from_str(body).unwrap();
    assert_eq!(product.live_link, None);
}

#[test]
fn parse_collection_accepts_array() {
    let body = r#"[{"_id":"a","name":"A","category":"c","price":1},{"_id":"b","name":"B","category":"c","price":2}]"#;
    let items = parse_collection(body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "b");
}

#[test]
fn parse_collection_wraps_single_object() {
    let body = r#"{"_id":"solo","name":"Solo","category":"c","price":3}"#;
    let items = parse_collection(body).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "solo");
}

#[test]
fn parse_collection_rejects_garbage() {
    assert!(parse_collection(r#"{"status":"down"}"#).is_err());
}

#[test]
fn parse_collection_skips_records_that_do_not_decode() {
    let body = r#"[
        {"_id":"a","name":"Good","category":"c","price":5},
        {"_id":"b","name":"Legacy","category":"c","price":""},
        {"_id":"c","category":"c","price":1},
        {"_id":"d","name":"Text Price","category":"c","price":"12"}
    ]"#;
    let items = parse_collection(body).unwrap();
    let ids: Vec<&str> = items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "d"]);
    assert_eq!(items[1].price, 12.0);
}

#[test]
fn parse_collection_of_only_bad_records_is_empty_not_an_error() {
    let body = r#"[{"_id":"b","name":"Legacy","category":"c","price":"n/a"}]"#;
    assert_eq!(parse_collection(body).unwrap(), Vec::<Product>::new());
}

#[test]
fn parse_collection_rejects_non_collection_bodies() {
    assert!(parse_collection("not json").is_err());
    assert!(parse_collection("42").is_err());
    assert!(parse_collection(r#""ok""#).is_err());
}

#[test]
fn draft_roundtrip_preserves_everything_but_id() {
    let product = sample();
    let rebuilt = Product::from_draft("p1", product.to_draft());
    assert_eq!(rebuilt, product);
}

#[test]
fn draft_omits_missing_live_link() {
    let draft = ProductDraft { name: "n".to_owned(), category: "c".to_owned(), price: 1.0, ..ProductDraft::default() };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("liveLink").is_none());
    assert!(value.get("_id").is_none());
}

#[test]
fn thumbnail_is_first_image() {
    assert_eq!(sample().thumbnail(), Some("https://img.example.com/a.png"));
    let bare = Product { images: Vec::new(), ..sample() };
    assert_eq!(bare.thumbnail(), None);
}
