//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod stamp;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use stamp::{StampArgs, run_stamp};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Stamp every .xaml, .xaml.cs and .cs file under ../ChemProV
  headerstamp

  # Stamp a different tree
  headerstamp path/to/project

  # Report files that would change without writing them
  headerstamp --check --show-diff src/

  # Save the planned changes as a diff
  headerstamp --check --save-diff changes.diff src/

  # Stamp headers for another project
  headerstamp --project-name Widgets --project-url https://example.org/widgets src/

  # Write a JSON report of the run
  headerstamp --report-json report.json
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub stamp_args: StampArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_arguments_required() {
    let cli = Cli::try_parse_from(["headerstamp"]).unwrap();
    assert!(cli.stamp_args.root.is_none());
    assert!(!cli.stamp_args.check);
    assert!(!cli.stamp_args.fail_fast);
  }

  #[test]
  fn test_parse_flags() {
    let cli = Cli::try_parse_from([
      "headerstamp",
      "src",
      "--check",
      "--show-diff",
      "--project-name",
      "Widgets",
      "--fail-fast",
      "-vv",
    ])
    .unwrap();

    let args = cli.stamp_args;
    assert_eq!(args.root, Some(PathBuf::from("src")));
    assert!(args.check);
    assert!(args.show_diff);
    assert_eq!(args.project_name.as_deref(), Some("Widgets"));
    assert!(args.fail_fast);
    assert_eq!(args.verbose, 2);
  }

  #[test]
  fn test_diff_flags_require_check() {
    assert!(Cli::try_parse_from(["headerstamp", "--show-diff"]).is_err());
    assert!(Cli::try_parse_from(["headerstamp", "--save-diff", "out.diff"]).is_err());
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["headerstamp", "-q", "-v"]).is_err());
  }
}
