//! OSGi `MANIFEST.MF` parsing for flow bundles.

use std::path::Path;

/// Location of the manifest inside an extracted flow bundle.
pub const MANIFEST_PATH: [&str; 2] = ["META-INF", "MANIFEST.MF"];

/// Identity fields read from a flow bundle manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleManifest {
    /// `Bundle-Name`
    pub name: Option<String>,
    /// `Bundle-Version`
    pub version: Option<String>,
    /// `Origin-Bundle-SymbolicName`
    pub symbolic_name: Option<String>,
}

/// Parse the manifest at `path`; a missing file yields empty fields.
pub fn parse_manifest(path: &Path) -> BundleManifest {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_manifest_str(&content),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read manifest {}: {}", path.display(), e);
            }
            BundleManifest::default()
        }
    }
}

pub fn parse_manifest_str(content: &str) -> BundleManifest {
    let mut manifest = BundleManifest::default();

    for line in unfold_lines(content) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = Some(value.trim().to_string());
        match key {
            "Bundle-Name" => manifest.name = value,
            "Bundle-Version" => manifest.version = value,
            "Origin-Bundle-SymbolicName" => manifest.symbolic_name = value,
            _ => {}
        }
    }

    manifest
}

/// Join continuation lines (leading single space) onto their logical line.
fn unfold_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in content.lines() {
        match (raw.strip_prefix(' '), lines.last_mut()) {
            (Some(rest), Some(previous)) => previous.push_str(rest),
            _ => lines.push(raw.to_string()),
        }
    }
    lines
}
