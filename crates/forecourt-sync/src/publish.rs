// SPDX-License-Identifier: Apache-2.0

use crate::SyncError;
use forecourt_model::{CatalogEnvelope, SettingsDocument, CATALOG_FILE, SETTINGS_FILE};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn publish_catalog(out_dir: &Path, envelope: &CatalogEnvelope) -> Result<PathBuf, SyncError> {
    let path = out_dir.join(CATALOG_FILE);
    let bytes = serde_json::to_vec_pretty(envelope)
        .map_err(|err| SyncError(format!("catalog serialization failed: {err}")))?;
    write_json_atomic(&path, &bytes)?;
    Ok(path)
}

pub fn publish_settings(out_dir: &Path, document: &SettingsDocument) -> Result<PathBuf, SyncError> {
    let path = out_dir.join(SETTINGS_FILE);
    let bytes = serde_json::to_vec_pretty(document)
        .map_err(|err| SyncError(format!("settings serialization failed: {err}")))?;
    write_json_atomic(&path, &bytes)?;
    Ok(path)
}

/// Whole-document replacement. The bytes land in a temporary sibling,
/// are fsynced, then renamed over the destination, and the directory is
/// fsynced last. A concurrent reader sees either the previous complete
/// document or the new one, never a truncated mix.
pub fn write_json_atomic(path: &Path, bytes: &[u8]) -> Result<(), SyncError> {
    let dir = path
        .parent()
        .ok_or_else(|| SyncError(format!("no parent directory for {}", path.display())))?;
    fs::create_dir_all(dir)
        .map_err(|err| SyncError(format!("create {} failed: {err}", dir.display())))?;
    let tmp = path.with_extension("json.tmp");
    write_and_sync(&tmp, bytes)?;
    fs::rename(&tmp, path)
        .map_err(|err| SyncError(format!("rename into {} failed: {err}", path.display())))?;
    sync_dir(dir)
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), SyncError> {
    let mut file = fs::File::create(path)
        .map_err(|err| SyncError(format!("create {} failed: {err}", path.display())))?;
    file.write_all(bytes)
        .map_err(|err| SyncError(format!("write {} failed: {err}", path.display())))?;
    file.sync_all()
        .map_err(|err| SyncError(format!("sync {} failed: {err}", path.display())))?;
    Ok(())
}

fn sync_dir(dir: &Path) -> Result<(), SyncError> {
    let file = OpenOptions::new()
        .read(true)
        .open(dir)
        .map_err(|err| SyncError(format!("open dir {} failed: {err}", dir.display())))?;
    file.sync_all()
        .map_err(|err| SyncError(format!("sync dir {} failed: {err}", dir.display())))?;
    Ok(())
}
