//! Package-level metadata: display name and uid prefix.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// File at the root of a package export carrying its `Name=` line.
pub const EXPORT_INFO_FILE: &str = "ExportInformation.info";

pub const UNKNOWN_PACKAGE: &str = "Unknown";
pub const DEFAULT_PREFIX: &str = "PKG";
const MAX_PREFIX_LEN: usize = 5;

// Acronym runs ("SAP", "HR") or capitalized words ("Order").
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{2,}|[A-Z][a-z]+").expect("valid word pattern"));

/// Read the package name from an `ExportInformation.info` file.
///
/// Falls back to [`UNKNOWN_PACKAGE`] when the file is missing, unreadable or
/// has no `Name=` line.
pub fn parse_package_name(export_info_path: &Path) -> String {
    let content = match std::fs::read_to_string(export_info_path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read {}: {}", export_info_path.display(), e);
            }
            return UNKNOWN_PACKAGE.to_string();
        }
    };

    package_name_from_str(&content)
}

pub fn package_name_from_str(content: &str) -> String {
    content
        .lines()
        .find_map(|line| line.strip_prefix("Name="))
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string())
}

/// Derive a short uppercase uid prefix from a package name.
///
/// Takes the first letter of each capitalized word or acronym run, capped at
/// five characters. `"Order Management"` becomes `"OM"`.
pub fn prefix_from_package(package_name: &str) -> String {
    let prefix: String = WORD_PATTERN
        .find_iter(package_name)
        .filter_map(|word| word.as_str().chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_PREFIX_LEN)
        .collect();

    if prefix.is_empty() {
        DEFAULT_PREFIX.to_string()
    } else {
        prefix
    }
}
