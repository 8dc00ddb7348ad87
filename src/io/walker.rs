use crate::errors::{AsisError, Result};
use std::path::{Path, PathBuf};

/// Lists the files directly inside one input directory, filtered by
/// extension and optionally excluding specific file names.
pub struct InputWalker {
    root: PathBuf,
    extension: String,
    excluded_names: Vec<String>,
}

impl InputWalker {
    pub fn new(root: PathBuf, extension: &str) -> Self {
        Self {
            root,
            extension: extension.to_lowercase(),
            excluded_names: vec![],
        }
    }

    pub fn excluding(mut self, file_name: &str) -> Self {
        self.excluded_names.push(file_name.to_string());
        self
    }

    /// Matching files sorted by file name.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(AsisError::not_found("input directory", &self.root));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && self.should_process(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        if self.excluded_names.iter().any(|excluded| *excluded == name) {
            return false;
        }

        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase() == self.extension)
            .unwrap_or(false)
    }
}

/// Top-level package zips in `dir`.
pub fn find_package_zips(dir: &Path) -> Result<Vec<PathBuf>> {
    InputWalker::new(dir.to_path_buf(), "zip").walk()
}

/// The single report CSV in `dir`, ignoring a previous linked output.
pub fn find_report_csv(dir: &Path, linked_file_name: &str) -> Result<PathBuf> {
    let mut candidates = InputWalker::new(dir.to_path_buf(), "csv")
        .excluding(linked_file_name)
        .walk()?;

    match candidates.len() {
        0 => Err(AsisError::not_found("CSV report", dir)),
        1 => Ok(candidates.remove(0)),
        n => Err(AsisError::validation(format!(
            "expected exactly one CSV report in {}, found {}",
            dir.display(),
            n
        ))),
    }
}
