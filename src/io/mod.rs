pub mod csv;
pub mod walker;

pub use self::csv::{read_table, write_records, write_table, Table};
pub use walker::{find_package_zips, find_report_csv, InputWalker};

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Run-unique identifier for report file names: UTC timestamp plus a random
/// token, so runs sharing an output directory do not collide.
pub fn report_id() -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}",
        chrono::Utc::now().format("%Y%m%d%H%M%S"),
        &token[..12]
    )
}

/// `<dir>/<prefix>_<id>.csv`
pub fn report_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{}_{}.csv", prefix, report_id()))
}
