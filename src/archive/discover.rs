//! Inner archive normalization and discovery inside an extracted package.

use crate::errors::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Package exports store flow bundles as extensionless files such as
/// `Create_Order`. Any file name containing `_` and no `.` is treated as one
/// and gets a `.zip` suffix.
pub fn is_bundle_without_extension(file_name: &str) -> bool {
    file_name.contains('_') && !file_name.contains('.')
}

/// Rename every extensionless bundle under `root` to `<name>.zip`.
///
/// Returns the renamed paths.
pub fn prepare_inner_zips(root: &Path) -> Result<Vec<PathBuf>> {
    let candidates: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_bundle_without_extension(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect();

    let mut renamed = Vec::with_capacity(candidates.len());
    for path in candidates {
        let mut target = path.clone().into_os_string();
        target.push(".zip");
        let target = PathBuf::from(target);
        fs::rename(&path, &target)?;
        log::debug!("Renamed {} -> {}", path.display(), target.display());
        renamed.push(target);
    }

    Ok(renamed)
}

/// All `*.zip` files under `root`, in walk order.
pub fn find_inner_zips(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".zip"))
        .map(|e| e.into_path())
        .collect()
}
