//! Externalized flow parameters and `{{name}}` placeholder resolution.

use crate::core::ParameterTable;
use crate::errors::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;
use walkdir::WalkDir;

pub const PARAMETERS_FILE: &str = "parameters.prop";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid placeholder pattern"));

/// An address after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub value: String,
    /// At least one `{{...}}` occurred in the raw address.
    pub parametrized: bool,
}

/// Load the first `parameters.prop` found under `root`.
///
/// A flow without externalized parameters yields an empty table.
pub fn load_parameters(root: &Path) -> Result<ParameterTable> {
    let found = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name() == PARAMETERS_FILE);

    match found {
        Some(entry) => {
            let content = std::fs::read_to_string(entry.path())?;
            let table = parse_parameters(&content);
            log::debug!(
                "Loaded {} parameters from {}",
                table.len(),
                entry.path().display()
            );
            Ok(table)
        }
        None => Ok(ParameterTable::new()),
    }
}

/// Parse `key=value` lines. Comments, blank lines and lines without `=` are
/// skipped; `\ ` in keys is unescaped to a space.
pub fn parse_parameters(content: &str) -> ParameterTable {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            (
                key.replace("\\ ", " ").trim().to_string(),
                value.trim().to_string(),
            )
        })
        .collect()
}

/// Replace every `{{name}}` in `raw` with its value from `parameters`.
///
/// Single left-to-right pass; substituted values are not rescanned. Unknown
/// names keep their placeholder verbatim.
pub fn resolve_address(raw: &str, parameters: &ParameterTable) -> ResolvedAddress {
    let mut parametrized = false;
    let value = PLACEHOLDER.replace_all(raw, |caps: &Captures| {
        parametrized = true;
        match parameters.get(caps[1].trim()) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });

    ResolvedAddress {
        value: value.into_owned(),
        parametrized,
    }
}
