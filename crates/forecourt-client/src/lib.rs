// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Client-side consumption pipeline for the published catalog. Retrieval
//! never throws into caller code: every fetch collapses to an outcome, and
//! resolution degrades to the bundled dataset so the visitor-facing catalog
//! is never empty because the publish location happened to be unreachable.

mod assets;
mod bundled;
mod fetch;
mod resolve;

pub use assets::{
    AssetConfig, DEFAULT_TRANSFORM, ENV_CLOUD_NAME, ENV_TRANSFORM, PLACEHOLDER_IMAGE,
    UNSET_CLOUD_NAME,
};
pub use bundled::default_dataset;
pub use fetch::{decode_envelope, FetchOutcome, RemoteFetcher};
pub use resolve::{resolve_catalog, resolve_settings, CatalogSource, Origin, ResolvedCatalog};

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "forecourt-client";

#[derive(Debug)]
pub struct ClientError(pub String);

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClientError {}
