//! Tests for API payload shapes

use psyche_core::{Bundle, CatalogItem, ContentView, ItemStatus, PurchaseReceipt, Suggestion};

#[test]
fn catalog_item_deserializes_full_payload() {
    let json = r#"{
        "id": "poker",
        "title": "Poker",
        "symbol": "♠",
        "keywords": ["Uncertainty", "State", "Mastery"],
        "doctrine": "Trust without proof.",
        "preview_content": "preview",
        "full_content": "full",
        "price": 5.0,
        "status": "available",
        "order_index": 1
    }"#;
    let item: CatalogItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, "poker");
    assert_eq!(item.symbol.as_deref(), Some("♠"));
    assert_eq!(item.keywords.len(), 3);
    assert_eq!(item.status, ItemStatus::Available);
    assert_eq!(item.order_index, Some(1));
}

#[test]
fn catalog_item_tolerates_missing_optionals() {
    let json = r#"{"id": "zen", "title": "Zen", "price": 3.5, "status": "coming_soon"}"#;
    let item: CatalogItem = serde_json::from_str(json).unwrap();
    assert!(item.symbol.is_none());
    assert!(item.keywords.is_empty());
    assert!(item.order_index.is_none());
    assert_eq!(item.status, ItemStatus::ComingSoon);
}

#[test]
fn catalog_item_serialization_omits_absent_optionals() {
    let item: CatalogItem =
        serde_json::from_str(r#"{"id": "zen", "title": "Zen", "price": 3.5, "status": "available"}"#)
            .unwrap();
    let json = serde_json::to_string(&item).unwrap();
    assert!(!json.contains("symbol"));
    assert!(!json.contains("order_index"));
}

#[test]
fn bundle_deserializes_with_defaults() {
    let json = r#"{"id": "all", "name": "📚 Everything", "price": 20.0}"#;
    let bundle: Bundle = serde_json::from_str(json).unwrap();
    assert!(bundle.metaphor_ids.is_empty());
    assert_eq!(bundle.discount_percent, 0);
    assert!(bundle.description.is_empty());
}

#[test]
fn bundle_deserializes_full_payload() {
    let json = r#"{
        "id": "duo",
        "name": "📚 Two Lenses",
        "description": "Poker and Chess together",
        "price": 8.0,
        "discount_percent": 20,
        "metaphor_ids": ["poker", "chess"]
    }"#;
    let bundle: Bundle = serde_json::from_str(json).unwrap();
    assert_eq!(bundle.metaphor_ids, ["poker", "chess"]);
    assert_eq!(bundle.discount_percent, 20);
}

#[test]
fn content_view_ignores_extra_fields() {
    let json = r#"{"id": "poker", "title": "Poker", "content": "text", "has_access": true}"#;
    let view: ContentView = serde_json::from_str(json).unwrap();
    assert_eq!(view.title, "Poker");
    assert!(view.has_access);
}

#[test]
fn purchase_receipt_lists_granted_items() {
    let json = r#"{"granted_items": ["poker", "chess"]}"#;
    let receipt: PurchaseReceipt = serde_json::from_str(json).unwrap();
    assert_eq!(receipt.granted_items, ["poker", "chess"]);
}

#[test]
fn purchase_receipt_tolerates_empty_payload() {
    let receipt: PurchaseReceipt = serde_json::from_str("{}").unwrap();
    assert!(receipt.granted_items.is_empty());
}

#[test]
fn suggestion_serializes_all_fields() {
    let suggestion = Suggestion {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        suggestion: "Gardening".to_string(),
        reason: "Growth takes seasons".to_string(),
    };
    let json = serde_json::to_string(&suggestion).unwrap();
    assert!(json.contains("Gardening"));
    assert!(json.contains("ada@example.com"));
    assert!(json.contains("reason"));
}
