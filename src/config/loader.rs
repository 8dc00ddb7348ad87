use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{AsismapConfig, OutputConfig};

pub const CONFIG_FILE_NAME: &str = ".asismap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AsismapConfig, String> {
    let mut config = toml::from_str::<AsismapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(Err(e)) = config.output.as_ref().map(validate_output) {
        log::warn!("Invalid output settings: {}. Using defaults.", e);
        config.output = Some(OutputConfig::default());
    }

    Ok(config)
}

fn validate_output(output: &OutputConfig) -> Result<(), String> {
    if output.report_prefix.trim().is_empty() {
        return Err("report_prefix must not be empty".to_string());
    }
    let linked = output.linked_file_name.as_str();
    if linked.contains('/') || linked.contains('\\') {
        return Err("linked_file_name must be a bare file name".to_string());
    }
    if !linked.to_lowercase().ends_with(".csv") {
        return Err("linked_file_name must end in .csv".to_string());
    }
    Ok(())
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AsismapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load an explicit config file, or search upwards from the current directory.
pub fn load_config(explicit: Option<&Path>) -> AsismapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    if let Some(path) = explicit {
        return try_load_config_from_path(path).unwrap_or_else(|| {
            log::warn!("Config {} not usable. Using defaults.", path.display());
            AsismapConfig::default()
        });
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return AsismapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AsismapConfig::default()
        })
}
