// SPDX-License-Identifier: Apache-2.0

use forecourt_model::{BusinessProfile, SettingsDocument};
use serde_json::json;
use std::collections::BTreeMap;

fn doc(pairs: &[(&str, serde_json::Value)]) -> SettingsDocument {
    let entries: BTreeMap<String, serde_json::Value> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect();
    SettingsDocument::new("2026-08-23T09:00:00.000Z".to_string(), entries)
}

#[test]
fn patch_overwrites_only_present_keys() {
    let defaults = BusinessProfile::default();
    let patched = defaults.patched(&doc(&[("email", json!("new@x.com"))]));
    assert_eq!(patched.email, "new@x.com");
    assert_eq!(patched.name, defaults.name);
    assert_eq!(patched.hours, defaults.hours);
}

#[test]
fn patch_ignores_non_string_and_empty_values() {
    let defaults = BusinessProfile::default();
    let patched = defaults.patched(&doc(&[
        ("name", json!(42)),
        ("tagline", json!("   ")),
        ("hours", json!(null)),
        ("address", json!("1 New Road")),
    ]));
    assert_eq!(patched.name, defaults.name);
    assert_eq!(patched.tagline, defaults.tagline);
    assert_eq!(patched.hours, defaults.hours);
    assert_eq!(patched.address, "1 New Road");
}

#[test]
fn patch_ignores_unrecognized_keys() {
    let defaults = BusinessProfile::default();
    let patched = defaults.patched(&doc(&[("themeColor", json!("#ff0000"))]));
    assert_eq!(patched, defaults);
}

#[test]
fn patch_trims_values_and_maps_camel_case_message_key() {
    let defaults = BusinessProfile::default();
    let patched = defaults.patched(&doc(&[("whatsappMessage", json!("  Book now  "))]));
    assert_eq!(patched.whatsapp_message, "Book now");
}

#[test]
fn patch_is_pure_and_leaves_defaults_untouched() {
    let defaults = BusinessProfile::default();
    let before = defaults.clone();
    let _ = defaults.patched(&doc(&[("name", json!("Changed"))]));
    assert_eq!(defaults, before);
}

#[test]
fn whatsapp_url_strips_non_digits_and_encodes_message() {
    let mut profile = BusinessProfile::default();
    profile.whatsapp = "+212 600-000 000".to_string();
    profile.whatsapp_message = "Hello & welcome".to_string();
    let url = profile.whatsapp_url();
    assert!(url.starts_with("https://wa.me/212600000000?text="));
    assert!(url.contains("%26"), "ampersand must be encoded: {url}");
    assert!(!url.contains('&'));
}

#[test]
fn whatsapp_url_with_appends_custom_message() {
    let profile = BusinessProfile::default();
    let url = profile.whatsapp_url_with("About: Sprint Hatch");
    assert!(url.contains("Sprint"), "message missing from {url}");
}
