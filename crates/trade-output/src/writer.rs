//! CSV output of frames.
//!
//! Files are written next to their destination with a `.partial` suffix and
//! renamed once complete, so a failed run never leaves a truncated table at
//! the requested path.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::error::{OutputError, Result};

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Writes `contents` to `path` through a temporary sibling file.
///
/// The staging file is removed whenever the write or the final rename fails,
/// so on error neither `path` nor its `.partial` sibling is left behind
/// (an existing file at `path` is untouched).
///
/// # Errors
///
/// Returns the error produced by `contents`, or an [`OutputError::Io`] when the
/// staging file cannot be created or renamed into place.
pub fn write_atomically<E>(
    path: &Path,
    contents: impl FnOnce(&mut File) -> std::result::Result<(), E>,
) -> std::result::Result<(), E>
where
    E: From<OutputError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    let staging = partial_path(path);
    let mut file = File::create(&staging).map_err(|e| OutputError::io(&staging, e))?;
    if let Err(error) = contents(&mut file) {
        drop(file);
        let _ = fs::remove_file(&staging);
        return Err(error);
    }
    drop(file);
    if let Err(error) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(OutputError::io(path, error).into());
    }
    Ok(())
}

/// Writes `df` as CSV with a header row.
///
/// Nulls are written as empty cells, NaN as `NaN` and infinities as `inf` or
/// `-inf`.
pub fn write_frame_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    write_atomically(path, |file| -> Result<()> {
        CsvWriter::new(file).include_header(true).finish(df)?;
        Ok(())
    })?;
    debug!(path = %path.display(), rows = df.height(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_keeps_directory() {
        let path = Path::new("out/trade_metrics.csv");
        assert_eq!(partial_path(path), Path::new("out/trade_metrics.csv.partial"));
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.csv");
        let result: Result<()> = write_atomically(&path, |_| {
            Err(OutputError::io("facts.csv", std::io::Error::other("boom")))
        });
        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "occupied").unwrap();

        let result: Result<()> = write_atomically(&path, |file| {
            use std::io::Write;
            writeln!(file, "Time,Country").map_err(|e| OutputError::io("facts.csv", e))
        });

        assert!(matches!(result, Err(OutputError::Io { .. })));
        assert!(path.join("keep.txt").exists());
        assert!(!partial_path(&path).exists());
    }
}
