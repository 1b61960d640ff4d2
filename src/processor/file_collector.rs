//! # File Collector Module
//!
//! This module walks the root directory and sorts every regular file into
//! eligible files (with the rule they matched) and skipped files.

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::RewriteError;
use crate::rules::ExtensionRule;

/// A file selected for rewriting, with the rule its name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleFile {
  pub path: PathBuf,
  pub rule: ExtensionRule,
}

/// Everything found under the root in one traversal.
#[derive(Debug, Default)]
pub struct CollectedFiles {
  /// Files whose name matched a rule
  pub eligible: Vec<EligibleFile>,
  /// Regular files with no matching rule
  pub skipped: Vec<PathBuf>,
  /// Entries that could not be read during the walk
  pub errors: Vec<RewriteError>,
}

/// File collector for directory traversal.
///
/// Symlinks are neither followed nor processed. Entries the walk cannot read
/// (permission denied, removed mid-walk) are collected as errors instead of
/// aborting the traversal.
pub struct FileCollector {
  rules: Vec<ExtensionRule>,
}

impl FileCollector {
  pub const fn new(rules: Vec<ExtensionRule>) -> Self {
    Self { rules }
  }

  /// Traverses `root` recursively and classifies every regular file.
  pub fn collect(&self, root: &Path) -> CollectedFiles {
    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let mut collected = CollectedFiles::default();

    for entry in WalkDir::new(root).follow_links(false) {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
          warn!("Error walking {}: {}", path.display(), e);
          let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
          collected.errors.push(RewriteError::Unreadable { path, source });
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();
      match ExtensionRule::match_path(&path, &self.rules) {
        Some(rule) => {
          trace!("Eligible: {} ({})", path.display(), rule);
          collected.eligible.push(EligibleFile { path, rule });
        }
        None => {
          trace!("Skipping: {} (no rule for extension)", path.display());
          collected.skipped.push(path);
        }
      }
    }

    debug!(
      "Found {} eligible and {} skipped files in {}ms",
      collected.eligible.len(),
      collected.skipped.len(),
      start_time.elapsed().as_millis()
    );

    collected
  }
}
