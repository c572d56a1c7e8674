use crate::domain::models::{Catalog, ResultRow};
use anyhow::Context;
use std::path::{Path, PathBuf};

const RESULTS_HEADER: [&str; 6] = [
    "namespace",
    "action",
    "scope",
    "decision",
    "default_decision",
    "expected",
];

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("{} missing.", .0.display())]
    MissingCatalog(PathBuf),
}

pub fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    if !path.exists() {
        return Err(StorageError::MissingCatalog(path.to_path_buf()).into());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid catalog {}", path.display()))
}

pub fn write_catalog(path: &Path, catalog: &Catalog) -> anyhow::Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_string_pretty(catalog)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Overwrites `path` with the header and one line per row, header included
/// when there are no rows.
pub fn write_results(path: &Path, rows: &[ResultRow]) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(RESULTS_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
