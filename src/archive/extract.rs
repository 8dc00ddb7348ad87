use crate::errors::{AsisError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Extract a zip archive into `dest`, creating it as needed.
///
/// Returns the number of files written. Entries whose names would escape
/// `dest` are skipped.
pub fn unzip_file(zip_path: &Path, dest: &Path) -> Result<usize> {
    if !zip_path.is_file() {
        return Err(AsisError::archive(zip_path, "zip file not found"));
    }

    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| AsisError::archive(zip_path, format!("invalid or corrupt zip: {e}")))?;

    fs::create_dir_all(dest)?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| AsisError::archive(zip_path, format!("failed to read entry {i}: {e}")))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::debug!(
                    "Skipping unsafe entry {:?} in {}",
                    entry.name(),
                    zip_path.display()
                );
                continue;
            }
        };

        let output_path = dest.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            count += 1;
        }
    }

    log::debug!("Extracted {} files from {}", count, zip_path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_unzip_extracts_nested_entries() {
        let tmp = TempDir::new().unwrap();
        let zip_path = tmp.path().join("pkg.zip");
        write_zip(
            &zip_path,
            &[("a.txt", &b"alpha"[..]), ("nested/dir/b.txt", &b"beta"[..])],
        );

        let dest = tmp.path().join("out");
        let count = unzip_file(&zip_path, &dest).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
        assert_eq!(
            fs::read_to_string(dest.join("nested/dir/b.txt")).unwrap(),
            "beta"
        );
    }

    #[test]
    fn test_unzip_missing_file_is_archive_error() {
        let tmp = TempDir::new().unwrap();
        let result = unzip_file(&tmp.path().join("missing.zip"), tmp.path());
        assert!(matches!(result, Err(AsisError::Archive { .. })));
    }

    #[test]
    fn test_unzip_corrupt_file_is_archive_error() {
        let tmp = TempDir::new().unwrap();
        let bogus = tmp.path().join("bogus.zip");
        fs::write(&bogus, b"definitely not a zip").unwrap();

        let result = unzip_file(&bogus, &tmp.path().join("out"));
        assert!(matches!(result, Err(AsisError::Archive { .. })));
    }
}
