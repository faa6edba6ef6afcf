// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Forecourt model SSOT: the published wire documents and the
//! client-side defaults they patch.

mod envelope;
mod item;
mod profile;

pub use envelope::{CatalogEnvelope, SettingsDocument, CATALOG_FILE, SETTINGS_FILE};
pub use item::{CatalogItem, ValidationError};
pub use profile::BusinessProfile;

pub const CRATE_NAME: &str = "forecourt-model";
