//! # File I/O Module
//!
//! Whole-file reads and whole-file replacement for the processor.
//!
//! Writes go to a temporary file next to the target which is then renamed
//! over it, so a file is either left as it was or fully rewritten.

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::RewriteError;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the raw bytes of a file.
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>, RewriteError> {
    std::fs::read(path).map_err(|source| RewriteError::Unreadable {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Decodes file bytes as UTF-8.
  pub fn decode(path: &Path, bytes: Vec<u8>) -> Result<String, RewriteError> {
    String::from_utf8(bytes).map_err(|source| RewriteError::InvalidEncoding {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Reads full file content as UTF-8 text.
  pub fn read_full_content(path: &Path) -> Result<String, RewriteError> {
    let bytes = Self::read_bytes(path)?;
    Self::decode(path, bytes)
  }

  /// Replaces the content of `path` in one step.
  ///
  /// The new content is written to a temporary file in the same directory,
  /// given the permissions of the original, and renamed over it.
  pub fn replace_file(path: &Path, content: &str) -> Result<(), RewriteError> {
    let unwritable = |source: std::io::Error| RewriteError::Unwritable {
      path: path.to_path_buf(),
      source,
    };

    let parent = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let permissions = std::fs::metadata(path).map_err(unwritable)?.permissions();

    let mut temp = NamedTempFile::new_in(parent).map_err(unwritable)?;
    temp.write_all(content.as_bytes()).map_err(unwritable)?;
    temp.as_file().sync_all().map_err(unwritable)?;
    std::fs::set_permissions(temp.path(), permissions).map_err(unwritable)?;

    temp.persist(path).map_err(|e| unwritable(e.error))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;
  use crate::error::FailureKind;

  #[test]
  fn test_replace_file_overwrites_entirely() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("A.cs");
    std::fs::write(&path, "a much longer original body than the replacement").unwrap();

    FileIO::replace_file(&path, "short").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    // Only the target remains in the directory, no temp files left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn test_replace_file_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("A.cs");
    std::fs::write(&path, "x").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    FileIO::replace_file(&path, "y").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
  }

  #[test]
  fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let err = FileIO::read_full_content(&dir.path().join("gone.cs")).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Unreadable);
  }

  #[test]
  fn test_read_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.cs");
    std::fs::write(&path, b"// caf\xe9\n").unwrap();

    let err = FileIO::read_full_content(&path).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidEncoding);
  }

  #[test]
  fn test_replace_missing_file_is_unwritable() {
    let dir = tempdir().unwrap();
    let err = FileIO::replace_file(&dir.path().join("gone.cs"), "x").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Unwritable);
  }
}
