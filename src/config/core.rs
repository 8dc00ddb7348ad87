use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPORT_PREFIX: &str = "automatic_asis";
pub const DEFAULT_LINKED_FILE_NAME: &str = "final_output.csv";

/// Root configuration structure for asismap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AsismapConfig {
    /// Output file naming
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Scratch space used while unpacking packages
    #[serde(default)]
    pub scratch: Option<ScratchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// File name prefix of the extraction report
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,

    /// File name of the linked report
    #[serde(default = "default_linked_file_name")]
    pub linked_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_prefix: default_report_prefix(),
            linked_file_name: default_linked_file_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Parent directory for the per-run scratch directory (system temp dir
    /// when unset)
    #[serde(default)]
    pub root: Option<PathBuf>,
}

fn default_report_prefix() -> String {
    DEFAULT_REPORT_PREFIX.to_string()
}

fn default_linked_file_name() -> String {
    DEFAULT_LINKED_FILE_NAME.to_string()
}

impl AsismapConfig {
    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn scratch_root(&self) -> Option<PathBuf> {
        self.scratch.as_ref().and_then(|s| s.root.clone())
    }
}
