//! # Diff Module
//!
//! Renders line diffs between a file's current content and its rewrite.
//! Used in check mode to show what a real run would change.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for planned header changes.
///
/// This struct handles:
/// - Printing diffs to stderr with colorization
/// - Appending diffs to a single consolidated file
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that diffs are appended to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the diff file so a run starts with an empty one.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      std::fs::write(diff_path, "")
        .with_context(|| format!("Failed to create diff file: {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Displays and/or saves the diff between `original` and `new`.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let diff_content = render_diff(path, original, new);

    if self.show_diff {
      for line in diff_content.lines() {
        let colored = match line.chars().next() {
          Some('+') => line.if_supports_color(Stream::Stderr, |l| l.green()).to_string(),
          Some('-') => line.if_supports_color(Stream::Stderr, |l| l.red()).to_string(),
          _ => line.to_string(),
        };
        eprintln!("{}", colored);
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(diff_content.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}

/// Renders a plain-text diff with a `Diff for <path>:` heading.
pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);

  let mut diff_content = format!("Diff for {}:\n", path.display());

  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    diff_content.push_str(sign);
    diff_content.push_str(change.value());
    if change.missing_newline() {
      diff_content.push('\n');
    }
  }

  diff_content
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_render_diff_marks_inserted_header() {
    let diff = render_diff(Path::new("A.cs"), "int x;\n", "/*\nheader\n*/\nint x;\n");

    assert!(diff.starts_with("Diff for A.cs:\n"));
    assert!(diff.contains("+/*\n"));
    assert!(diff.contains("+header\n"));
    assert!(diff.contains(" int x;\n"));
  }

  #[test]
  fn test_render_diff_without_trailing_newline() {
    let diff = render_diff(Path::new("A.cs"), "int x;", "/*\n*/\nint x;");
    assert!(diff.ends_with(" int x;\n"));
  }

  #[test]
  fn test_saved_diffs_are_appended() {
    let dir = tempdir().unwrap();
    let diff_path = dir.path().join("changes.diff");
    let manager = DiffManager::new(false, Some(diff_path.clone()));
    manager.init().unwrap();

    manager.display_diff(Path::new("A.cs"), "a\n", "b\n").unwrap();
    manager.display_diff(Path::new("B.cs"), "c\n", "d\n").unwrap();

    let saved = std::fs::read_to_string(&diff_path).unwrap();
    assert!(saved.contains("Diff for A.cs:\n-a\n+b\n"));
    assert!(saved.contains("Diff for B.cs:\n-c\n+d\n"));
  }

  #[test]
  fn test_disabled_manager_writes_nothing() {
    let manager = DiffManager::default();
    assert!(!manager.is_enabled());
    manager.display_diff(Path::new("A.cs"), "a", "b").unwrap();
  }
}
