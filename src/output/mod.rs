use crate::error::{Error, Result};
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Write `report` to `dir/file_name`, creating `dir` if needed. Existing
/// content is replaced.
pub fn save_report(dir: &Path, file_name: &str, report: &str) -> Result<PathBuf> {
    create_output_dir(dir)?;

    let path = dir.join(file_name);
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options
        .open(&path)
        .map_err(|e| Error::output("Error writing report to file", e))?;
    file.write_all(report.as_bytes())
        .map_err(|e| Error::output("Error writing report to file", e))?;

    debug!(path = %path.display(), bytes = report.len(), "report written");
    Ok(path)
}

fn create_output_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder
        .create(dir)
        .map_err(|e| Error::output("Unable to create output directory", e))
}
