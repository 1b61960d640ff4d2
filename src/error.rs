//! # Error Module
//!
//! Error types for rewriting a single file. Every variant of [`RewriteError`]
//! names the offending path so it can be reported on its own, and maps to a
//! serializable [`FailureKind`] for the final report.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Problems with the header block found at the top of a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
  /// The file starts with the open marker but the close marker never follows.
  #[error("header starts with `{open}` but no closing `{close}` line was found")]
  Unterminated {
    open: &'static str,
    close: &'static str,
  },
}

/// Failure to process one eligible file.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
  #[error("Failed to read {}: {source}", .path.display())]
  Unreadable { path: PathBuf, source: std::io::Error },

  #[error("Failed to write {}: {source}", .path.display())]
  Unwritable { path: PathBuf, source: std::io::Error },

  #[error("{} is not valid UTF-8 text: {source}", .path.display())]
  InvalidEncoding {
    path: PathBuf,
    source: std::string::FromUtf8Error,
  },

  #[error("Malformed header in {}: {source}", .path.display())]
  MalformedHeader { path: PathBuf, source: HeaderError },
}

/// Classification of a [`RewriteError`], as shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
  Unreadable,
  Unwritable,
  InvalidEncoding,
  MalformedHeader,
}

impl std::fmt::Display for FailureKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      FailureKind::Unreadable => "unreadable",
      FailureKind::Unwritable => "unwritable",
      FailureKind::InvalidEncoding => "invalid encoding",
      FailureKind::MalformedHeader => "malformed header",
    };
    f.write_str(label)
  }
}

impl RewriteError {
  pub fn path(&self) -> &Path {
    match self {
      Self::Unreadable { path, .. }
      | Self::Unwritable { path, .. }
      | Self::InvalidEncoding { path, .. }
      | Self::MalformedHeader { path, .. } => path,
    }
  }

  pub const fn kind(&self) -> FailureKind {
    match self {
      Self::Unreadable { .. } => FailureKind::Unreadable,
      Self::Unwritable { .. } => FailureKind::Unwritable,
      Self::InvalidEncoding { .. } => FailureKind::InvalidEncoding,
      Self::MalformedHeader { .. } => FailureKind::MalformedHeader,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_message_names_path() {
    let err = RewriteError::MalformedHeader {
      path: PathBuf::from("src/Broken.cs"),
      source: HeaderError::Unterminated { open: "/*", close: "*/" },
    };

    let message = err.to_string();
    assert!(message.contains("src/Broken.cs"), "{message}");
    assert!(message.contains("`*/`"), "{message}");
    assert_eq!(err.kind(), FailureKind::MalformedHeader);
    assert_eq!(err.path(), Path::new("src/Broken.cs"));
  }

  #[test]
  fn test_io_error_kinds() {
    let read = RewriteError::Unreadable {
      path: PathBuf::from("a.cs"),
      source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };
    let write = RewriteError::Unwritable {
      path: PathBuf::from("a.cs"),
      source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };

    assert_eq!(read.kind(), FailureKind::Unreadable);
    assert_eq!(write.kind(), FailureKind::Unwritable);
    assert_eq!(write.kind().to_string(), "unwritable");
  }
}
