use super::extract::{handle_extract, ExtractConfig, ExtractOutcome};
use super::link::link_report;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Extract then link the report this run just wrote.
pub fn handle_run(
    extract: &ExtractConfig,
    linked_file_name: &str,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    match handle_extract(extract, out)? {
        ExtractOutcome::Saved { path, .. } => {
            link_report(&path, &extract.input_dir.join(linked_file_name))
        }
        ExtractOutcome::NothingToSave => anyhow::bail!(
            "No adapters extracted from {}; nothing to link",
            extract.input_dir.display()
        ),
    }
}
