// SPDX-License-Identifier: Apache-2.0

use forecourt_model::{CatalogEnvelope, CatalogItem, SettingsDocument};

#[test]
fn catalog_document_decodes_camel_case_fields() {
    let raw = r#"{
        "version": "1724400000000",
        "updatedAt": "2026-08-23T09:00:00.000Z",
        "cars": [{
            "id": "eco-1",
            "category": "Economy",
            "name": "Sprint Hatch",
            "price": "250",
            "unit": "MAD/day",
            "features": ["Automatic", "A/C"],
            "badge": null,
            "imagePublicId": "fleet/eco-1",
            "imageAlt": "White hatchback",
            "active": true
        }]
    }"#;
    let envelope: CatalogEnvelope = serde_json::from_str(raw).expect("decode catalog");
    assert_eq!(envelope.version, "1724400000000");
    let car = &envelope.cars[0];
    assert_eq!(car.image_public_id.as_deref(), Some("fleet/eco-1"));
    assert_eq!(car.image_alt, "White hatchback");
    assert_eq!(car.features, vec!["Automatic", "A/C"]);
    assert!(car.badge.is_none());
    assert!(car.image.is_none());
}

#[test]
fn item_unknown_fields_are_ignored() {
    let raw = r#"{"id": "x", "active": true, "promoCode": "SUMMER", "rank": 3}"#;
    let car: CatalogItem = serde_json::from_str(raw).expect("decode with extras");
    assert_eq!(car.id, "x");
    assert!(car.active);
}

#[test]
fn item_active_defaults_true_when_absent_or_malformed() {
    let absent: CatalogItem = serde_json::from_str(r#"{"id": "a"}"#).expect("decode");
    assert!(absent.active);

    let malformed: CatalogItem =
        serde_json::from_str(r#"{"id": "b", "active": "yes"}"#).expect("decode");
    assert!(malformed.active);

    let explicit_off: CatalogItem =
        serde_json::from_str(r#"{"id": "c", "active": false}"#).expect("decode");
    assert!(!explicit_off.active);
}

#[test]
fn item_serializes_wire_names_and_omits_absent_local_image() {
    let car = CatalogItem {
        id: "eco-1".to_string(),
        category: "Economy".to_string(),
        name: "Sprint Hatch".to_string(),
        price: "250".to_string(),
        unit: "MAD/day".to_string(),
        features: vec!["A/C".to_string()],
        badge: None,
        image_public_id: None,
        image: None,
        image_alt: "White hatchback".to_string(),
        active: true,
    };
    let value = serde_json::to_value(&car).expect("serialize");
    let obj = value.as_object().expect("object");
    assert!(obj.contains_key("imageAlt"));
    // Published items always carry the public-id slot, even when null.
    assert!(obj.contains_key("imagePublicId"));
    assert!(!obj.contains_key("image"));
    assert!(!obj.contains_key("image_alt"));
}

#[test]
fn settings_document_flattens_entries_around_timestamp() {
    let raw = r#"{"name": "Acme Cars", "hours": "9-5", "updatedAt": "2026-08-23T09:00:00.000Z"}"#;
    let doc: SettingsDocument = serde_json::from_str(raw).expect("decode settings");
    assert_eq!(doc.updated_at, "2026-08-23T09:00:00.000Z");
    assert_eq!(doc.entries.len(), 2);
    assert_eq!(
        doc.entries.get("name").and_then(|v| v.as_str()),
        Some("Acme Cars")
    );
}

#[test]
fn published_fields_round_trip_exactly() {
    let envelope = CatalogEnvelope::new(
        "1724400000000".to_string(),
        "2026-08-23T09:00:00.000Z".to_string(),
        vec![CatalogItem {
            id: "lux-1".to_string(),
            category: "Luxury".to_string(),
            name: "Grand Tourer".to_string(),
            price: "1 100,50".to_string(),
            unit: "MAD/day".to_string(),
            features: vec!["Leather".to_string(), "Massage seats".to_string()],
            badge: Some("VIP".to_string()),
            image_public_id: Some("fleet/lux-1".to_string()),
            image: None,
            image_alt: "Black sedan".to_string(),
            active: false,
        }],
    );
    let bytes = serde_json::to_vec(&envelope).expect("serialize");
    let back: CatalogEnvelope = serde_json::from_slice(&bytes).expect("deserialize");
    assert_eq!(back, envelope);
}
