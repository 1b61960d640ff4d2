//! # Output Module
//!
//! This module centralizes all user-facing output for headerstamp.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! Regular output goes to stdout and is silenced by `-q`. Failures always go
//! to stderr so they are never lost.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Header added
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure or pending change in check mode
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Completion notice printed when every eligible file succeeded.
pub const DONE_MESSAGE: &str = "done";

const fn files_word(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Print the initial "Stamping N files..." or "Checking N files..." message.
pub fn print_start_message(file_count: usize, check_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_mode { "Checking" } else { "Stamping" };
  println!("{} {} {}...", verb, file_count, files_word(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Prints a heading followed by up to [`DEFAULT_FILE_LIST_LIMIT`] paths, or
/// all of them in verbose mode.
fn print_file_list(header: &str, files: &[&FileReport], root: Option<&Path>) {
  println!("{}", header);

  let count = files.len();
  let limit = if is_verbose() { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", make_relative_path(&file.path, root));
  }

  if count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Print the files whose header was added or replaced.
///
/// In check mode both groups are listed together as files that would change.
pub fn print_changed_files(reports: &CategorizedReports<'_>, root: Option<&Path>, check_mode: bool) {
  if is_quiet() {
    return;
  }

  if check_mode {
    let pending: Vec<_> = reports.added.iter().chain(&reports.replaced).copied().collect();
    if pending.is_empty() {
      return;
    }
    let header = format!(
      "{} {} {} would change:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      pending.len(),
      files_word(pending.len())
    );
    print_file_list(&header, &pending, root);
    return;
  }

  if !reports.added.is_empty() {
    let header = format!(
      "{} Added header to {} {}:",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      reports.added.len(),
      files_word(reports.added.len())
    );
    print_file_list(&header, &reports.added, root);
  }

  if !reports.replaced.is_empty() {
    let header = format!(
      "{} Replaced header in {} {}:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      reports.replaced.len(),
      files_word(reports.replaced.len())
    );
    print_file_list(&header, &reports.replaced, root);
  }
}

/// Print every failed path with its failure kind and message to stderr.
///
/// Never truncated and not affected by quiet mode.
pub fn print_failed_files(files: &[&FileReport], root: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  eprintln!(
    "{} {} {} could not be processed:",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    files.len(),
    files_word(files.len())
  );

  for file in files {
    let kind = file.failure.map(|k| k.to_string()).unwrap_or_default();
    eprintln!(
      "  {} ({})",
      make_relative_path(&file.path, root),
      kind.if_supports_color(Stream::Stderr, |s| s.red())
    );
    if let Some(ref message) = file.message {
      eprintln!("    {}", message);
    }
  }
}

/// Print the processing summary.
///
/// Format: "Summary: A added, R replaced, U up to date, F failed, S skipped"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let failed_str = if summary.files_failed > 0 {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };

  let mut summary_line = format!(
    "Summary: {} added, {} replaced, {} up to date, {} failed, {} skipped",
    summary.headers_added.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.headers_replaced.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.files_unchanged.if_supports_color(Stream::Stdout, |s| s.cyan()),
    failed_str,
    summary.files_skipped.if_supports_color(Stream::Stdout, |s| s.dimmed()),
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Print the completion notice.
pub fn print_done() {
  if !is_quiet() {
    println!("{}", DONE_MESSAGE);
  }
}

/// File reports grouped by outcome for output.
pub struct CategorizedReports<'a> {
  pub added: Vec<&'a FileReport>,
  pub replaced: Vec<&'a FileReport>,
  pub unchanged: Vec<&'a FileReport>,
  pub skipped: Vec<&'a FileReport>,
  pub failed: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports. Each group is sorted by path.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut categorized = Self {
      added: Vec::new(),
      replaced: Vec::new(),
      unchanged: Vec::new(),
      skipped: Vec::new(),
      failed: Vec::new(),
    };

    for report in reports {
      match report.action {
        FileAction::Added => categorized.added.push(report),
        FileAction::Replaced => categorized.replaced.push(report),
        FileAction::Unchanged => categorized.unchanged.push(report),
        FileAction::Skipped => categorized.skipped.push(report),
        FileAction::Failed => categorized.failed.push(report),
      }
    }

    for group in [
      &mut categorized.added,
      &mut categorized.replaced,
      &mut categorized.unchanged,
      &mut categorized.skipped,
      &mut categorized.failed,
    ] {
      group.sort_by(|a, b| a.path.cmp(&b.path));
    }

    categorized
  }
}

/// Make a path relative to the root for display.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  if let Some(root) = root {
    path
      .strip_prefix(root)
      .map(|p| p.to_string_lossy().to_string())
      .unwrap_or_else(|_| path.to_string_lossy().to_string())
  } else {
    path.to_string_lossy().to_string()
  }
}
