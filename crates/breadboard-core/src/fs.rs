//! Filesystem utilities for persisting UI-local preferences atomically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a sibling temp file and a rename.
///
/// Parent directories are created when missing. Readers never observe a
/// half-written file.
///
/// # Errors
///
/// Returns an error if the directory, the temp file or the rename fails.
pub fn write_atomic(destination: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp_path = temp_sibling(destination);
    if let Err(err) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    rename_with_fallback(&temp_path, destination)
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "breadboard".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

/// Move `temp_path` over `destination`, replacing an existing file.
///
/// Windows refuses to rename onto an existing path, so a failed first rename
/// removes the destination and tries once more. The temp file is removed when
/// the retry fails too.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|second| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            second.kind(),
            format!("Could not replace {} ({}; retry: {})", destination.display(), first, second),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("config.toml");

        write_atomic(&dest, "a = 1").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "a = 1");
        assert!(!temp_sibling(&dest).exists());
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("config.toml");

        write_atomic(&dest, "old").unwrap();
        write_atomic(&dest, "new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_temp_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("config.toml");
        let temp = temp_sibling(&dest);
        std::os::unix::fs::symlink(dir.path().join("missing").join("target"), &temp).unwrap();

        assert!(write_atomic(&dest, "a = 1").is_err());
        assert!(fs::symlink_metadata(&temp).is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_rename_missing_source_fails_and_leaves_nothing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("missing.tmp");
        let dest = dir.path().join("dest.txt");

        assert!(rename_with_fallback(&temp, &dest).is_err());
        assert!(!dest.exists());
    }
}
