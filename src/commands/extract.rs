use crate::extraction::{extract_packages, StatusEvent};
use crate::formatting::{FormattingConfig, Status, StatusFormatter};
use crate::io;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct ExtractConfig {
    pub input_dir: PathBuf,
    pub report_prefix: String,
    pub scratch_root: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

/// Result of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Saved { path: PathBuf, adapters: usize },
    /// No adapters were found; no report file was written.
    NothingToSave,
}

/// Extract all packages in `config.input_dir`, writing status lines to `out`.
pub fn handle_extract(config: &ExtractConfig, out: &mut dyn Write) -> Result<ExtractOutcome> {
    let formatter = StatusFormatter::new(config.formatting_config);

    let zips = io::find_package_zips(&config.input_dir)
        .with_context(|| format!("Cannot list {}", config.input_dir.display()))?;
    if zips.is_empty() {
        writeln!(out, "{}", formatter.line(Status::Warning, "No zip files found."))?;
        return Ok(ExtractOutcome::NothingToSave);
    }
    log::info!(
        "Extracting {} packages from {}",
        zips.len(),
        config.input_dir.display()
    );

    let scratch = create_scratch(config.scratch_root.as_deref())?;

    let report = {
        let mut on_status = |event: StatusEvent| {
            let (status, text) = describe(&event);
            if let Err(e) = writeln!(out, "{}", formatter.line(status, &text)) {
                log::warn!("Failed to write status line: {}", e);
            }
        };
        extract_packages(&zips, scratch.path(), &mut on_status)
    };

    let scratch_path = scratch.path().to_path_buf();
    if let Err(e) = scratch.close() {
        log::warn!(
            "Failed to remove scratch directory {}: {}",
            scratch_path.display(),
            e
        );
    }

    log::info!(
        "{} packages, {} flow bundles processed, {} failures",
        report.packages_processed,
        report.bundles_processed,
        report.failures
    );

    if report.records.is_empty() {
        writeln!(
            out,
            "{}",
            formatter.line(Status::Error, "No adapters found to save.")
        )?;
        return Ok(ExtractOutcome::NothingToSave);
    }

    let path = io::report_path(&config.input_dir, &config.report_prefix);
    io::write_records(&path, &report.records)
        .with_context(|| format!("Failed to write report {}", path.display()))?;

    let adapters = report.records.len();
    writeln!(
        out,
        "{}",
        formatter.line(
            Status::Success,
            &format!("Saved {} adapters into '{}'.", adapters, path.display())
        )
    )?;

    Ok(ExtractOutcome::Saved { path, adapters })
}

fn create_scratch(root: Option<&Path>) -> Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("asismap-");

    let scratch = match root {
        Some(root) => {
            std::fs::create_dir_all(root)
                .with_context(|| format!("Cannot create scratch root {}", root.display()))?;
            builder.tempdir_in(root)?
        }
        None => builder.tempdir()?,
    };

    log::debug!("Scratch directory {}", scratch.path().display());
    Ok(scratch)
}

fn describe(event: &StatusEvent) -> (Status, String) {
    match event {
        StatusEvent::BundleProcessed { bundle, adapters } => (
            Status::Success,
            format!("Processed inner zip '{bundle}' with {adapters} adapters."),
        ),
        StatusEvent::BundleFailed { bundle, error } => (
            Status::Error,
            format!("Error processing inner zip '{}': {}", bundle.display(), error),
        ),
        StatusEvent::NoBundles { package } => (
            Status::Warning,
            format!("No inner zip files found in '{package}'."),
        ),
        StatusEvent::PackageFailed { package, error } => (
            Status::Error,
            format!("Error unzipping '{package}': {error}"),
        ),
    }
}
