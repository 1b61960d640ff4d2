//! # Processor Module
//!
//! This module contains the header rewriter: it walks the root directory,
//! picks the files with a known extension and rewrites each one so it starts
//! with the project's copyright header.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and whole-file replacement
//! - [`content_transformer`] - Artifact stripping, header removal and insertion
//! - [`file_collector`] - Directory traversal and extension matching
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
pub use content_transformer::{BOM_ARTIFACTS, ContentTransformer, LineEnding, Rewrite, strip_bom_artifacts};
pub use file_collector::{CollectedFiles, EligibleFile, FileCollector};
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::diff::DiffManager;
use crate::error::RewriteError;
use crate::report::{FileAction, FileReport};
use crate::rules::ExtensionRule;
use crate::templates::{HeaderTemplate, ProjectInfo};
use crate::verbose_log;

/// What to do when a file cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
  /// Record the failure, keep processing the remaining files
  #[default]
  KeepGoing,
  /// Stop at the first failure
  FailFast,
}

/// Transient state for one file between reading and writing it.
struct FileRecord {
  path: PathBuf,
  rule: ExtensionRule,
  original: String,
  rewritten: Rewrite,
}

/// Configuration for creating a Processor instance.
///
/// Built once at startup; the processor never changes it.
pub struct ProcessorConfig {
  /// Directory to walk
  pub root: PathBuf,
  /// Extension table used to select files
  pub rules: Vec<ExtensionRule>,
  /// Header text with placeholders
  pub template: HeaderTemplate,
  /// Project identity filled into the header
  pub project: ProjectInfo,

  // Behavior flags
  pub check_only: bool,
  pub error_policy: ErrorPolicy,

  // Optional components
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig for `root` with the default rules, header
  /// and project.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```
  /// use headerstamp::processor::{ErrorPolicy, ProcessorConfig};
  ///
  /// let config = ProcessorConfig {
  ///   error_policy: ErrorPolicy::FailFast,
  ///   ..ProcessorConfig::new("../ChemProV")
  /// };
  /// assert!(!config.check_only);
  /// ```
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      rules: ExtensionRule::ALL.to_vec(),
      template: HeaderTemplate::default(),
      project: ProjectInfo::default(),
      check_only: false,
      error_policy: ErrorPolicy::default(),
      diff_manager: None,
    }
  }
}

/// Rewrites the header of every eligible file under a root directory.
///
/// The `Processor` is responsible for:
/// - Walking the root recursively
/// - Matching file names against the extension table
/// - Replacing or inserting the header block of each eligible file
/// - Showing diffs instead of writing in check mode
/// - Collecting a report for every file
pub struct Processor {
  root: PathBuf,

  check_only: bool,

  error_policy: ErrorPolicy,

  diff_manager: DiffManager,

  content_transformer: ContentTransformer,

  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the rendered header would contain the close marker
  /// of one of the rules. Such a header would end its own comment block and
  /// could not be recognized on the next run.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let header_text = config.template.render(&config.project);

    for rule in &config.rules {
      let close = rule.delimiters().close;
      if header_text.contains(close) {
        bail!("Header text must not contain `{}`, the closing marker for {} files", close, rule);
      }
    }

    Ok(Self {
      root: config.root,
      check_only: config.check_only,
      error_policy: config.error_policy,
      diff_manager: config.diff_manager.unwrap_or_default(),
      content_transformer: ContentTransformer::new(header_text),
      file_collector: FileCollector::new(config.rules),
    })
  }

  /// Traverses the root without touching any file.
  ///
  /// # Errors
  ///
  /// Returns an error if the root does not exist or is not a directory.
  pub fn collect(&self) -> Result<CollectedFiles> {
    let metadata =
      std::fs::metadata(&self.root).with_context(|| format!("Root directory not found: {}", self.root.display()))?;
    if !metadata.is_dir() {
      bail!("Root path is not a directory: {}", self.root.display());
    }

    Ok(self.file_collector.collect(&self.root))
  }

  /// Walks the root and processes every eligible file.
  ///
  /// Returns one report per regular file found, including skipped ones. With
  /// [`ErrorPolicy::KeepGoing`] failures are returned as
  /// [`FileAction::Failed`] reports.
  ///
  /// # Errors
  ///
  /// Returns an error if the root cannot be walked, or with
  /// [`ErrorPolicy::FailFast`] for the first file that fails.
  pub fn process(&self) -> Result<Vec<FileReport>> {
    let collected = self.collect()?;
    self.process_collected(collected)
  }

  /// Processes files from an earlier [`collect`](Self::collect).
  pub fn process_collected(&self, collected: CollectedFiles) -> Result<Vec<FileReport>> {
    let CollectedFiles {
      eligible,
      skipped,
      errors,
    } = collected;

    let mut reports = Vec::with_capacity(eligible.len() + skipped.len() + errors.len());

    for error in errors {
      self.handle_failure(None, error, &mut reports)?;
    }

    debug!("Processing {} files", eligible.len());

    for file in eligible {
      match self.process_file(&file.path, file.rule) {
        Ok(report) => reports.push(report),
        Err(error) => self.handle_failure(Some(file.rule), error, &mut reports)?,
      }
    }

    reports.extend(
      skipped
        .into_iter()
        .map(|path| FileReport::new(path, None, FileAction::Skipped)),
    );

    Ok(reports)
  }

  fn handle_failure(
    &self,
    rule: Option<ExtensionRule>,
    error: RewriteError,
    reports: &mut Vec<FileReport>,
  ) -> Result<()> {
    match self.error_policy {
      ErrorPolicy::FailFast => Err(error.into()),
      ErrorPolicy::KeepGoing => {
        warn!("{}", error);
        reports.push(FileReport::failed(rule, &error));
        Ok(())
      }
    }
  }

  /// Processes a single eligible file.
  ///
  /// Reads the file, strips byte-order-mark artifacts and any existing header
  /// of the rule's kind, prepends the new header and replaces the file. In
  /// check mode the file is left untouched and the report describes what
  /// would happen.
  ///
  /// # Errors
  ///
  /// Returns a [`RewriteError`] naming the path if the file cannot be read,
  /// is not UTF-8, has an unterminated header or cannot be written.
  pub fn process_file(&self, path: &Path, rule: ExtensionRule) -> Result<FileReport, RewriteError> {
    let record = self.read_record(path, rule)?;

    let action = if record.rewritten.content == record.original {
      FileAction::Unchanged
    } else if record.rewritten.replaced_header {
      FileAction::Replaced
    } else {
      FileAction::Added
    };

    if action == FileAction::Unchanged {
      trace!("Up to date: {}", path.display());
    } else if self.check_only {
      if let Err(e) = self
        .diff_manager
        .display_diff(&record.path, &record.original, &record.rewritten.content)
      {
        warn!("Failed to display diff for {}: {}", record.path.display(), e);
      }
    } else {
      FileIO::replace_file(&record.path, &record.rewritten.content)?;
      match action {
        FileAction::Replaced => verbose_log!("Replaced header in: {}", record.path.display()),
        _ => verbose_log!("Added header to: {}", record.path.display()),
      }
    }

    Ok(FileReport::new(record.path, Some(record.rule), action))
  }

  fn read_record(&self, path: &Path, rule: ExtensionRule) -> Result<FileRecord, RewriteError> {
    let original = FileIO::read_full_content(path)?;

    let rewritten = self
      .content_transformer
      .rewrite(&original, rule.delimiters())
      .map_err(|source| RewriteError::MalformedHeader {
        path: path.to_path_buf(),
        source,
      })?;

    Ok(FileRecord {
      path: path.to_path_buf(),
      rule,
      original,
      rewritten,
    })
  }
}
