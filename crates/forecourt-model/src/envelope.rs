// SPDX-License-Identifier: Apache-2.0

use crate::item::{CatalogItem, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const CATALOG_FILE: &str = "cars.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// The versioned catalog document. Every sync produces a full replacement;
/// the version token is monotonic (epoch milliseconds as a decimal string)
/// and exists only to tell two generations apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEnvelope {
    pub version: String,
    pub updated_at: String,
    pub cars: Vec<CatalogItem>,
}

impl CatalogEnvelope {
    #[must_use]
    pub fn new(version: String, updated_at: String, cars: Vec<CatalogItem>) -> Self {
        Self {
            version,
            updated_at,
            cars,
        }
    }

    pub fn validate_strict(&self) -> Result<(), ValidationError> {
        if self.version.trim().is_empty() {
            return Err(ValidationError("version must not be empty".to_string()));
        }
        if self.updated_at.trim().is_empty() {
            return Err(ValidationError("updatedAt must not be empty".to_string()));
        }
        let mut seen = BTreeSet::new();
        for item in &self.cars {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError(format!("duplicate item id: {}", item.id)));
            }
        }
        Ok(())
    }

    /// Items with the active flag set, source order preserved.
    #[must_use]
    pub fn active_items(&self) -> Vec<CatalogItem> {
        self.cars.iter().filter(|c| c.active).cloned().collect()
    }
}

/// The published settings document: a flat map plus the publish timestamp.
/// The publisher writes every pair the editor provided; recognizing keys is
/// the consumer's job, so values stay untyped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SettingsDocument {
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    #[serde(flatten)]
    pub entries: BTreeMap<String, serde_json::Value>,
}

impl SettingsDocument {
    #[must_use]
    pub fn new(updated_at: String, entries: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            updated_at,
            entries,
        }
    }
}
