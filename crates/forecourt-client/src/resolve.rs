// SPDX-License-Identifier: Apache-2.0

use crate::bundled::default_dataset;
use crate::fetch::FetchOutcome;
use async_trait::async_trait;
use forecourt_model::{BusinessProfile, CatalogEnvelope, CatalogItem, SettingsDocument};

/// Seam between resolution and transport. The remote fetcher implements
/// this; tests substitute a stub so resolution logic runs without a
/// network.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> FetchOutcome<CatalogEnvelope>;
    async fn fetch_settings(&self) -> FetchOutcome<SettingsDocument>;
}

/// Where the resolved items came from. Diagnostics only; the visitor never
/// sees the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCatalog {
    pub items: Vec<CatalogItem>,
    pub origin: Origin,
}

/// Fetch, filter to active items, fall back. A well-formed remote document
/// with zero active items is treated the same as a transport failure: an
/// empty visitor-facing catalog is worse than showing the bundled data.
/// Whenever the bundled dataset has at least one active item the returned
/// sequence is non-empty.
pub async fn resolve_catalog(source: &dyn CatalogSource) -> ResolvedCatalog {
    match source.fetch_catalog().await {
        FetchOutcome::Success(envelope) => {
            let items = envelope.active_items();
            if items.is_empty() {
                tracing::warn!(
                    version = %envelope.version,
                    "remote catalog has zero active items; serving bundled dataset"
                );
                bundled_catalog()
            } else {
                tracing::debug!(
                    version = %envelope.version,
                    items = items.len(),
                    "serving remote catalog"
                );
                ResolvedCatalog {
                    items,
                    origin: Origin::Remote,
                }
            }
        }
        FetchOutcome::Failure(reason) => {
            tracing::warn!(%reason, "catalog fetch failed; serving bundled dataset");
            bundled_catalog()
        }
    }
}

/// Settings degrade field by field rather than document by document: each
/// recognized key with a non-empty string value overwrites its default,
/// everything else stays. A failed fetch keeps the defaults wholesale.
pub async fn resolve_settings(
    source: &dyn CatalogSource,
    defaults: &BusinessProfile,
) -> BusinessProfile {
    match source.fetch_settings().await {
        FetchOutcome::Success(document) => defaults.patched(&document),
        FetchOutcome::Failure(reason) => {
            tracing::warn!(%reason, "settings fetch failed; keeping defaults");
            defaults.clone()
        }
    }
}

fn bundled_catalog() -> ResolvedCatalog {
    ResolvedCatalog {
        items: default_dataset().active_items(),
        origin: Origin::Fallback,
    }
}
