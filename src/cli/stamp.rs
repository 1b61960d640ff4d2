//! # Stamp Command
//!
//! This module implements the command that stamps copyright headers onto a
//! source tree, or checks which files would change.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{load_config, resolve_project, resolve_root};
use crate::diff::DiffManager;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_blank_line, print_changed_files, print_done, print_failed_files, print_hint,
  print_start_message, print_summary,
};
use crate::processor::{ErrorPolicy, Processor, ProcessorConfig};
use crate::report::{ProcessingSummary, write_json_report};

/// Arguments for stamping headers
#[derive(Args, Debug, Default)]
pub struct StampArgs {
  /// Directory to process recursively [default: ../ChemProV]
  #[arg(value_name = "ROOT")]
  pub root: Option<PathBuf>,

  /// Report files that would change without modifying them
  #[arg(long)]
  pub check: bool,

  /// Show a diff of each planned change (requires --check)
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// Save a diff of the planned changes to a file (requires --check)
  #[arg(long, value_name = "FILE", requires = "check")]
  pub save_diff: Option<PathBuf>,

  /// Project name written into the header
  #[arg(long, value_name = "NAME")]
  pub project_name: Option<String>,

  /// Project URL written into the header
  #[arg(long, value_name = "URL")]
  pub project_url: Option<String>,

  /// Path to config file (default: .headerstamp.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Stop at the first file that cannot be processed
  #[arg(long)]
  pub fail_fast: bool,

  /// Generate a JSON report of the run and save it to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the stamp command with the given arguments.
///
/// Exits the process with status 1 when any file failed or, in check mode,
/// when any file would change.
pub fn run_stamp(args: StampArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to determine the current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;

  let root = resolve_root(args.root, config.as_ref());
  let project = resolve_project(args.project_name, args.project_url, config.as_ref())?;
  debug!("Using root {} for project {} ({})", root.display(), project.name, project.url);

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    project,
    check_only: args.check,
    error_policy: if args.fail_fast {
      ErrorPolicy::FailFast
    } else {
      ErrorPolicy::KeepGoing
    },
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(root.clone())
  })?;

  if args.check {
    info_log!("Check mode: no files will be modified");
  }

  let collected = processor.collect()?;
  print_start_message(collected.eligible.len(), args.check);

  let start_time = Instant::now();
  let file_reports = processor.process_collected(collected)?;
  let elapsed = start_time.elapsed();

  let summary = ProcessingSummary::from_reports(&file_reports, elapsed);
  let categorized = CategorizedReports::from_reports(&file_reports);

  print_blank_line();
  print_changed_files(&categorized, Some(root.as_path()), args.check);
  print_failed_files(&categorized.failed, Some(root.as_path()));

  print_blank_line();
  print_summary(&summary);

  if let Some(ref report_path) = args.report_json {
    write_json_report(report_path, &file_reports, &summary)?;
    debug!("JSON report written to {}", report_path.display());
  }

  let pending_changes = args.check && summary.has_changes();

  if summary.has_failures() || pending_changes {
    if pending_changes {
      print_blank_line();
      print_hint("Run without --check to stamp the headers.");
    }
    process::exit(1);
  }

  print_done();
  Ok(())
}
