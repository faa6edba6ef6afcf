// SPDX-License-Identifier: Apache-2.0

use forecourt_model::CatalogItem;
use std::env;

pub const PLACEHOLDER_IMAGE: &str = "images/car-placeholder.svg";
/// Placeholder configuration value treated the same as no value at all.
pub const UNSET_CLOUD_NAME: &str = "YOUR_CLOUD_NAME";
/// Auto format and quality, 800px wide, auto-gravity fill crop.
pub const DEFAULT_TRANSFORM: &str = "f_auto,q_auto,w_800,c_fill,g_auto";

pub const ENV_CLOUD_NAME: &str = "FORECOURT_CLOUDINARY_CLOUD_NAME";
pub const ENV_TRANSFORM: &str = "FORECOURT_CLOUDINARY_TRANSFORM";

/// Base configuration for composing remote image URLs.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub cloud_name: Option<String>,
    pub transform: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            transform: DEFAULT_TRANSFORM.to_string(),
        }
    }
}

impl AssetConfig {
    #[must_use]
    pub fn new(cloud_name: Option<String>, transform: Option<String>) -> Self {
        Self {
            cloud_name,
            transform: transform.unwrap_or_else(|| DEFAULT_TRANSFORM.to_string()),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env::var(ENV_CLOUD_NAME).ok().filter(|v| !v.trim().is_empty()),
            env::var(ENV_TRANSFORM).ok().filter(|v| !v.trim().is_empty()),
        )
    }

    fn usable_cloud_name(&self) -> Option<&str> {
        let name = self.cloud_name.as_deref()?.trim();
        if name.is_empty() || name == UNSET_CLOUD_NAME {
            return None;
        }
        Some(name)
    }

    /// Map an item to its image URL. A remote asset id composes the CDN
    /// URL; otherwise a local path is returned verbatim; otherwise the
    /// placeholder. A remote id with no usable cloud name also yields the
    /// placeholder — malformed configuration must never produce a dead
    /// image reference.
    #[must_use]
    pub fn resolve_image(&self, item: &CatalogItem) -> String {
        let public_id = item
            .image_public_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        if let Some(public_id) = public_id {
            return match self.usable_cloud_name() {
                Some(cloud) => format!(
                    "https://res.cloudinary.com/{cloud}/image/upload/{}/{public_id}",
                    self.transform
                ),
                None => {
                    tracing::warn!(id = %item.id, "no usable cloud name; using placeholder image");
                    PLACEHOLDER_IMAGE.to_string()
                }
            };
        }
        match item.image.as_deref() {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}
