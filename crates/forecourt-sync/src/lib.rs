// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! One-shot spreadsheet-to-catalog sync. A run authenticates against the
//! sheet provider, pulls the fleet and settings ranges, normalizes them
//! into the published wire documents, and replaces both JSON artifacts
//! atomically. Failures leave the previously published artifacts intact.

mod auth;
mod config;
mod logging;
mod normalize;
mod publish;
mod sheets;

use chrono::{SecondsFormat, Utc};
use forecourt_model::{CatalogEnvelope, SettingsDocument};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const CRATE_NAME: &str = "forecourt-sync";

pub use auth::{decode_credentials, exchange_access_token, ServiceCredentials, SHEETS_READONLY_SCOPE};
pub use config::{SyncConfig, ENV_SERVICE_ACCOUNT, ENV_SHEET_ID};
pub use logging::{SyncEvent, SyncLog, SyncStage};
pub use normalize::{normalize_fleet_row, normalize_settings_rows, FLEET_COLUMNS};
pub use publish::{publish_catalog, publish_settings, write_json_atomic};
pub use sheets::{SheetsClient, DEFAULT_SHEETS_BASE_URL, FLEET_RANGE, SETTINGS_RANGE};

#[derive(Debug)]
pub struct SyncError(pub String);
impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SyncError {}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub out_dir: PathBuf,
    pub sheets_base_url: String,
    pub fleet_range: String,
    pub settings_range: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            sheets_base_url: sheets::DEFAULT_SHEETS_BASE_URL.to_string(),
            fleet_range: sheets::FLEET_RANGE.to_string(),
            settings_range: sheets::SETTINGS_RANGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SyncReport {
    pub version: String,
    pub updated_at: String,
    pub item_count: usize,
    pub skipped_row_count: usize,
    pub setting_count: usize,
    pub catalog_path: PathBuf,
    pub settings_path: PathBuf,
}

pub fn run_sync(config: &SyncConfig, opts: &SyncOptions) -> Result<SyncReport, SyncError> {
    run_sync_with_events(config, opts).map(|(report, _)| report)
}

pub fn run_sync_with_events(
    config: &SyncConfig,
    opts: &SyncOptions,
) -> Result<(SyncReport, Vec<SyncEvent>), SyncError> {
    let mut log = logging::SyncLog::default();
    log.emit(
        SyncStage::Configure,
        "sync.start",
        BTreeMap::from([("out_dir".to_string(), opts.out_dir.display().to_string())]),
    );

    if config.sheet_id.trim().is_empty() {
        return Err(SyncError("sheet id must not be empty".to_string()));
    }

    let token = auth::exchange_access_token(&config.credentials)?;
    log.emit(SyncStage::Authorize, "sync.token.acquired", BTreeMap::new());

    let client = sheets::SheetsClient::new(&opts.sheets_base_url, &token)?;
    let fleet_rows = client.fetch_range(&config.sheet_id, &opts.fleet_range)?;
    log.emit(
        SyncStage::Fetch,
        "sync.fetch.fleet",
        BTreeMap::from([("rows".to_string(), fleet_rows.len().to_string())]),
    );
    let settings_rows = client.fetch_range(&config.sheet_id, &opts.settings_range)?;
    log.emit(
        SyncStage::Fetch,
        "sync.fetch.settings",
        BTreeMap::from([("rows".to_string(), settings_rows.len().to_string())]),
    );

    // Row 1 of the fleet range is the header row.
    let mut items = Vec::new();
    let mut skipped = 0usize;
    let mut seen_ids = BTreeSet::new();
    for row in fleet_rows.iter().skip(1) {
        match normalize::normalize_fleet_row(row) {
            Some(item) => {
                if seen_ids.insert(item.id.clone()) {
                    items.push(item);
                } else {
                    skipped += 1;
                    tracing::warn!(id = %item.id, "dropping fleet row with duplicate id");
                    log.emit(
                        SyncStage::Normalize,
                        "sync.normalize.duplicate_id",
                        BTreeMap::from([("id".to_string(), item.id.clone())]),
                    );
                }
            }
            None => skipped += 1,
        }
    }
    if items.is_empty() {
        tracing::warn!("fleet range normalized to zero items; publishing an empty catalog");
        log.emit(SyncStage::Normalize, "sync.normalize.empty_catalog", BTreeMap::new());
    }
    log.emit(
        SyncStage::Normalize,
        "sync.normalize.complete",
        BTreeMap::from([
            ("items".to_string(), items.len().to_string()),
            ("skipped".to_string(), skipped.to_string()),
        ]),
    );

    // One clock read stamps both artifacts so they name the same run.
    let now = Utc::now();
    let version = now.timestamp_millis().to_string();
    let updated_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let envelope = CatalogEnvelope::new(version.clone(), updated_at.clone(), items);
    envelope
        .validate_strict()
        .map_err(|err| SyncError(format!("catalog failed validation before publish: {err}")))?;

    let mut entries = normalize::normalize_settings_rows(&settings_rows);
    // updatedAt in the published settings is the publish timestamp, so a
    // sheet row with that key is dropped rather than forwarded.
    entries.remove("updatedAt");
    let setting_count = entries.len();
    let settings_document = SettingsDocument::new(
        updated_at.clone(),
        entries
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect(),
    );

    let catalog_path = publish::publish_catalog(&opts.out_dir, &envelope)?;
    log.emit(
        SyncStage::Publish,
        "sync.publish.catalog",
        BTreeMap::from([("path".to_string(), catalog_path.display().to_string())]),
    );
    let settings_path = publish::publish_settings(&opts.out_dir, &settings_document)?;
    log.emit(
        SyncStage::Publish,
        "sync.publish.settings",
        BTreeMap::from([("path".to_string(), settings_path.display().to_string())]),
    );

    let report = SyncReport {
        version,
        updated_at,
        item_count: envelope.cars.len(),
        skipped_row_count: skipped,
        setting_count,
        catalog_path,
        settings_path,
    };
    tracing::info!(
        version = %report.version,
        items = report.item_count,
        skipped = report.skipped_row_count,
        settings = report.setting_count,
        "sync run published both artifacts"
    );
    Ok((report, log.into_events()))
}
