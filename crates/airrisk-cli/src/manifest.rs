//! The `manifest` command: index of generated KML files for the map viewer.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use airrisk_core::AppConfig;
use airrisk_kml::format_timestamp;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Manifest {
    pub last_update: String,
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ManifestEntry {
    pub name: String,
    pub url: String,
    pub size: u64,
    pub updated: String,
}

/// Writes the manifest for `config.output_dir` to `config.manifest_path`.
///
/// # Errors
///
/// Returns an error if the output directory cannot be listed or the manifest
/// cannot be written.
pub(crate) fn run_manifest(config: &AppConfig) -> anyhow::Result<()> {
    let manifest = build_manifest(&config.output_dir, &config.manifest_base_url, Utc::now())?;
    write_manifest(&config.manifest_path, &manifest)?;
    println!(
        "Generated manifest with {} files at {}",
        manifest.files.len(),
        config.manifest_path.display()
    );
    Ok(())
}

/// Lists every `*.kml` file in `dir`, sorted by name.
pub(crate) fn build_manifest(
    dir: &Path,
    base_url: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<Manifest> {
    let base_url = base_url.trim_end_matches('/');
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if !name.ends_with(".kml") || !path.is_file() {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        let modified = metadata
            .modified()
            .with_context(|| format!("no modification time for {}", path.display()))?;

        files.push(ManifestEntry {
            url: format!("{base_url}/{name}"),
            size: metadata.len(),
            updated: format_timestamp(DateTime::<Utc>::from(modified)),
            name,
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Manifest {
        last_update: format_timestamp(now),
        files,
    })
}

fn write_manifest(path: &Path, manifest: &Manifest) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(manifest).context("failed to serialize manifest")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
