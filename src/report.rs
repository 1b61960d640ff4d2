//! # Report Module
//!
//! This module records what happened to each file and can write the result
//! as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::error::{FailureKind, RewriteError};
use crate::rules::ExtensionRule;

/// Information about a processed file for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Rule the file matched, if it was eligible
  pub rule: Option<ExtensionRule>,
  /// What was (or, in check mode, would be) done to the file
  pub action: FileAction,
  /// Why the file failed, if it did
  pub failure: Option<FailureKind>,
  /// Human-readable failure description
  pub message: Option<String>,
}

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// The file had no header and one was prepended
  Added,
  /// An existing header was replaced
  Replaced,
  /// The file already carried the current header byte for byte
  Unchanged,
  /// The file's extension has no rule
  Skipped,
  /// The file could not be processed
  Failed,
}

impl FileReport {
  pub const fn new(path: PathBuf, rule: Option<ExtensionRule>, action: FileAction) -> Self {
    Self {
      path,
      rule,
      action,
      failure: None,
      message: None,
    }
  }

  /// Builds a failed report from the error that caused it.
  pub fn failed(rule: Option<ExtensionRule>, error: &RewriteError) -> Self {
    Self {
      path: error.path().to_path_buf(),
      rule,
      action: FileAction::Failed,
      failure: Some(error.kind()),
      message: Some(error.to_string()),
    }
  }

  /// Whether the file's content differs (or would differ) from the rewrite.
  pub const fn is_changed(&self) -> bool {
    matches!(self.action, FileAction::Added | FileAction::Replaced)
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Summary of the processing results
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
  /// Number of eligible files
  pub total_files: usize,
  /// Headers prepended to files that had none
  pub headers_added: usize,
  /// Existing headers replaced
  pub headers_replaced: usize,
  /// Files already up to date
  pub files_unchanged: usize,
  /// Files with no matching rule
  pub files_skipped: usize,
  /// Files that could not be processed
  pub files_failed: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// Timestamp when the report was generated
  pub timestamp: i64,
}

impl ProcessingSummary {
  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: 0,
      headers_added: 0,
      headers_replaced: 0,
      files_unchanged: 0,
      files_skipped: 0,
      files_failed: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Local::now().timestamp(),
    };

    for file in files {
      match file.action {
        FileAction::Added => summary.headers_added += 1,
        FileAction::Replaced => summary.headers_replaced += 1,
        FileAction::Unchanged => summary.files_unchanged += 1,
        FileAction::Skipped => summary.files_skipped += 1,
        FileAction::Failed => summary.files_failed += 1,
      }
    }
    summary.total_files = files.len() - summary.files_skipped;

    summary
  }

  pub const fn has_failures(&self) -> bool {
    self.files_failed > 0
  }

  pub const fn has_changes(&self) -> bool {
    self.headers_added + self.headers_replaced > 0
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: Vec<&'a FileReport>,
}

/// Writes a JSON report of the run to `output_path`.
///
/// Skipped files are left out of the file list; they only count in the
/// summary.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let report = JsonReport {
    summary,
    files: files.iter().filter(|f| f.action != FileAction::Skipped).collect(),
  };

  let content = serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;

  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
