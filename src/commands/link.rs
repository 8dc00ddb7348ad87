use crate::io;
use crate::linker::link_calls;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct LinkConfig {
    pub input_dir: PathBuf,
    pub linked_file_name: String,
}

/// Link the directory's report and return the absolute output path.
///
/// Any failure happens before the output file is created.
pub fn handle_link(config: &LinkConfig) -> Result<PathBuf> {
    let input = io::find_report_csv(&config.input_dir, &config.linked_file_name)?;
    link_report(&input, &config.input_dir.join(&config.linked_file_name))
}

/// Link the report at `input` into `output` and return the absolute output
/// path.
pub fn link_report(input: &Path, output: &Path) -> Result<PathBuf> {
    log::info!("Linking {}", input.display());

    let mut table =
        io::read_table(input).with_context(|| format!("Cannot read {}", input.display()))?;
    let summary = link_calls(&mut table)?;
    log::debug!(
        "{} rows, {} receivers, {} call edges",
        table.rows.len(),
        summary.receivers,
        summary.edges
    );

    io::write_table(output, &table)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(std::path::absolute(output)?)
}
