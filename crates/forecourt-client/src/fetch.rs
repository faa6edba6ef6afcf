// SPDX-License-Identifier: Apache-2.0

use crate::resolve::CatalogSource;
use crate::ClientError;
use async_trait::async_trait;
use forecourt_model::{CatalogEnvelope, CatalogItem, SettingsDocument, CATALOG_FILE, SETTINGS_FILE};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde_json::Value;
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of one retrieval attempt. The reason inside `Failure` is kept
/// for operator diagnostics only; callers fall back rather than render it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure(String),
}

/// Fetches the published documents from their well-known names under one
/// base URL. Requests carry `Cache-Control: no-store`: staleness after an
/// external edit is a correctness bug here, not a performance concern.
/// One attempt per call; the fallback path is the retry policy.
pub struct RemoteFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteFetcher {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError(format!("http client init failed: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_document(&self, file: &str) -> FetchOutcome<Value> {
        let url = format!("{}/{file}", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => return FetchOutcome::Failure(format!("request for {file} failed: {err}")),
        };
        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::Failure(format!("request for {file} returned status {status}"));
        }
        match response.json::<Value>().await {
            Ok(value) => FetchOutcome::Success(value),
            Err(err) => FetchOutcome::Failure(format!("body for {file} is not JSON: {err}")),
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteFetcher {
    async fn fetch_catalog(&self) -> FetchOutcome<CatalogEnvelope> {
        match self.fetch_document(CATALOG_FILE).await {
            FetchOutcome::Success(value) => FetchOutcome::Success(decode_envelope(&value)),
            FetchOutcome::Failure(reason) => FetchOutcome::Failure(reason),
        }
    }

    async fn fetch_settings(&self) -> FetchOutcome<SettingsDocument> {
        match self.fetch_document(SETTINGS_FILE).await {
            FetchOutcome::Success(value) => match serde_json::from_value(value) {
                Ok(document) => FetchOutcome::Success(document),
                Err(err) => FetchOutcome::Failure(format!("settings document malformed: {err}")),
            },
            FetchOutcome::Failure(reason) => FetchOutcome::Failure(reason),
        }
    }
}

/// Permissive envelope decode per the published contract: a document whose
/// `cars` field is missing or not a list gets an empty list substituted
/// (the resolver then treats it as zero active items), and an individual
/// item that fails to decode or carries an empty id is dropped rather than
/// poisoning the whole document.
#[must_use]
pub fn decode_envelope(value: &Value) -> CatalogEnvelope {
    let version = text_field(value, "version");
    let updated_at = text_field(value, "updatedAt");
    let cars = value
        .get("cars")
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .filter_map(|item| serde_json::from_value::<CatalogItem>(item.clone()).ok())
                .filter(|item| item.validate().is_ok())
                .collect()
        })
        .unwrap_or_default();
    CatalogEnvelope::new(version, updated_at, cars)
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_without_cars_field_decodes_to_an_empty_list() {
        let doc = json!({ "version": "1", "updatedAt": "now" });
        let envelope = decode_envelope(&doc);
        assert_eq!(envelope.version, "1");
        assert!(envelope.cars.is_empty());
    }

    #[test]
    fn envelope_with_non_list_cars_decodes_to_an_empty_list() {
        let doc = json!({ "version": "1", "updatedAt": "now", "cars": "oops" });
        assert!(decode_envelope(&doc).cars.is_empty());
    }

    #[test]
    fn malformed_items_are_dropped_without_poisoning_the_rest() {
        let doc = json!({
            "version": "1",
            "updatedAt": "now",
            "cars": [
                { "id": "eco-1", "name": "City Car", "active": true },
                { "name": "no id at all" },
                { "id": "" },
                42,
                { "id": "suv-1", "active": false }
            ]
        });
        let envelope = decode_envelope(&doc);
        let ids: Vec<&str> = envelope.cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["eco-1", "suv-1"]);
    }

    #[test]
    fn unknown_extra_fields_on_items_are_ignored() {
        let doc = json!({
            "version": "1",
            "updatedAt": "now",
            "cars": [ { "id": "eco-1", "horsepower": 90, "color": "red" } ]
        });
        let envelope = decode_envelope(&doc);
        assert_eq!(envelope.cars.len(), 1);
        // Absent active decodes to visible.
        assert!(envelope.cars[0].active);
    }
}
