// src/file.rs

use std::{
    fs::{ self, OpenOptions },
    path::Path,
};

use tracing::debug;

use crate::config::options::ExportFormat;
use crate::csv::{ record_row, HEADERS };
use crate::data::ProfileRecord;
use crate::error::Result;

/// Append one record to `path`. The header row is written first only if the file
/// did not exist when this was called. Returns whether the header was written.
///
/// No locking: two runs against the same file can interleave.
pub fn append_record(path: &Path, record: &ProfileRecord, format: ExportFormat) -> Result<bool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = ::csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(file);

    if is_new {
        out.write_record(HEADERS)?;
    }
    out.write_record(record_row(record))?;
    out.flush()?;

    debug!(path = %path.display(), header = is_new, "row appended");
    Ok(is_new)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/profiles.csv");
        assert!(append_record(&path, &ProfileRecord::default(), ExportFormat::Csv).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn parent_that_is_a_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(ensure_directory(&blocker).is_err());
    }
}
