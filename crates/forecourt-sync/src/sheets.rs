// SPDX-License-Identifier: Apache-2.0

use crate::SyncError;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const FLEET_RANGE: &str = "Fleet!A:L";
pub const SETTINGS_RANGE: &str = "Settings!A:B";

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Values payload for one range. An empty range omits the field entirely,
/// so absence decodes to no rows rather than an error.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Authenticated read-only client for the spreadsheet values endpoint.
pub struct SheetsClient {
    base_url: String,
    bearer: String,
    client: reqwest::blocking::Client,
}

impl SheetsClient {
    pub fn new(base_url: &str, bearer: &str) -> Result<Self, SyncError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| SyncError(format!("http client init failed: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: bearer.to_string(),
            client,
        })
    }

    /// Fetch one range of cells as the source returns them: untyped
    /// scalars in row-major order, trailing empty cells dropped per row.
    pub fn fetch_range(&self, sheet_id: &str, range: &str) -> Result<Vec<Vec<Value>>, SyncError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, sheet_id, range
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer)
            .send()
            .map_err(|err| SyncError(format!("range fetch failed for {range}: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError(format!(
                "range fetch for {range} returned status {status}"
            )));
        }
        let body: ValueRange = response
            .json()
            .map_err(|err| SyncError(format!("range payload malformed for {range}: {err}")))?;
        Ok(body.values)
    }
}
