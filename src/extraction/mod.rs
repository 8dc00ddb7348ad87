//! Stage one: package exports to adapter records.
//!
//! The walk is directory → package zip → flow bundle zip → `.iflw` XML. Each
//! step is a function over explicit paths returning a typed error; failures
//! of a single package or bundle are reported through the status callback and
//! never abort the batch.

pub mod address;
pub mod iflow;
pub mod manifest;
pub mod parameters;

use crate::archive::{self, EXPORT_INFO_FILE};
use crate::core::{AdapterRecord, FlowInfo};
use crate::errors::{AsisError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use iflow::{extract_iflow_file, extract_message_flows};
pub use manifest::{parse_manifest, BundleManifest};
pub use parameters::{load_parameters, resolve_address, ResolvedAddress};

/// Per-run flow counters keyed by uid prefix.
///
/// Packages sharing a prefix continue the same sequence so uids stay unique
/// across the run.
#[derive(Debug, Default)]
pub struct PackageCounters {
    counters: HashMap<String, usize>,
}

impl PackageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `prefix` and return the new uid.
    pub fn next_uid(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{prefix}-{counter}")
    }
}

/// Progress notifications emitted while extracting.
#[derive(Debug)]
pub enum StatusEvent {
    /// A flow bundle was processed.
    BundleProcessed { bundle: String, adapters: usize },
    /// A flow bundle failed and was skipped.
    BundleFailed { bundle: PathBuf, error: AsisError },
    /// A package contained no flow bundles.
    NoBundles { package: String },
    /// A package could not be unpacked.
    PackageFailed { package: String, error: AsisError },
}

/// Outcome of extracting a batch of packages.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub records: Vec<AdapterRecord>,
    pub packages_processed: usize,
    pub bundles_processed: usize,
    pub failures: usize,
}

/// Extract every package zip into `scratch` and collect adapter records.
pub fn extract_packages(
    package_zips: &[PathBuf],
    scratch: &Path,
    on_status: &mut dyn FnMut(StatusEvent),
) -> ExtractionReport {
    let mut report = ExtractionReport::default();
    let mut counters = PackageCounters::new();

    for (index, zip_path) in package_zips.iter().enumerate() {
        let package_label = file_label(zip_path);
        let extract_dir = scratch.join(format!("package-{}", index + 1));

        match process_package(zip_path, &extract_dir, &mut counters, &mut report, on_status) {
            Ok(()) => report.packages_processed += 1,
            Err(error) => {
                log::error!("Failed to unpack package {}: {}", package_label, error);
                report.failures += 1;
                on_status(StatusEvent::PackageFailed {
                    package: package_label,
                    error,
                });
            }
        }
    }

    report
}

/// Unpack one package export and process each of its flow bundles.
pub fn process_package(
    zip_path: &Path,
    extract_dir: &Path,
    counters: &mut PackageCounters,
    report: &mut ExtractionReport,
    on_status: &mut dyn FnMut(StatusEvent),
) -> Result<()> {
    archive::unzip_file(zip_path, extract_dir)?;

    let package_name = archive::parse_package_name(&extract_dir.join(EXPORT_INFO_FILE));
    let prefix = archive::prefix_from_package(&package_name);
    log::info!(
        "Package '{}' from {} uses prefix {}",
        package_name,
        zip_path.display(),
        prefix
    );

    archive::prepare_inner_zips(extract_dir)?;
    let bundles = archive::find_inner_zips(extract_dir);
    if bundles.is_empty() {
        log::warn!("No flow bundles found in {}", zip_path.display());
        on_status(StatusEvent::NoBundles {
            package: file_label(zip_path),
        });
    }

    for bundle in bundles {
        let uid = counters.next_uid(&prefix);
        match process_bundle(&bundle, &package_name, &uid) {
            Ok(records) => {
                log::debug!("{} yielded {} adapters as {}", bundle.display(), records.len(), uid);
                report.bundles_processed += 1;
                on_status(StatusEvent::BundleProcessed {
                    bundle: file_label(&bundle),
                    adapters: records.len(),
                });
                report.records.extend(records);
            }
            Err(error) => {
                log::error!("Failed to process bundle {}: {}", bundle.display(), error);
                report.failures += 1;
                on_status(StatusEvent::BundleFailed { bundle, error });
            }
        }
    }

    Ok(())
}

/// Unpack one flow bundle next to its zip and extract its adapters.
pub fn process_bundle(zip_path: &Path, package_name: &str, uid: &str) -> Result<Vec<AdapterRecord>> {
    let extract_path = zip_path.with_extension("");
    archive::unzip_file(zip_path, &extract_path)?;

    let iflw = find_iflw_file(&extract_path)?;
    let parameters = load_parameters(&extract_path)?;
    let [meta_inf, manifest_file] = manifest::MANIFEST_PATH;
    let manifest = parse_manifest(&extract_path.join(meta_inf).join(manifest_file));

    let flow = FlowInfo {
        uid: uid.to_string(),
        package: package_name.to_string(),
        iflow: manifest.name,
        iflow_id: manifest.symbolic_name,
        iflow_version: manifest.version,
    };

    extract_iflow_file(&iflw, &flow, &parameters)
}

/// First `.iflw` file under `root`.
pub fn find_iflw_file(root: &Path) -> Result<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name().to_string_lossy().ends_with(".iflw"))
        .map(|e| e.into_path())
        .ok_or_else(|| AsisError::not_found(".iflw file", root))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_counters_restart_per_prefix() {
        let mut counters = PackageCounters::new();
        assert_eq!(counters.next_uid("OM"), "OM-1");
        assert_eq!(counters.next_uid("OM"), "OM-2");
        assert_eq!(counters.next_uid("PKG"), "PKG-1");
        assert_eq!(counters.next_uid("OM"), "OM-3");
    }

    #[test]
    fn test_find_iflw_file_missing() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("readme.txt"), "x").unwrap();

        let result = find_iflw_file(tmp.path());
        assert!(matches!(result, Err(AsisError::NotFound { .. })));
    }

    #[test]
    fn test_find_iflw_file_nested() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("src/main/resources/scenarioflows/integrationflow");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Create_Order.iflw"), "<definitions/>").unwrap();

        let found = find_iflw_file(tmp.path()).unwrap();
        assert!(found.ends_with("Create_Order.iflw"));
    }
}
