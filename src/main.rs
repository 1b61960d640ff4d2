//! # headerstamp
//!
//! Stamps a copyright header onto every XAML and C# source file in a tree.

use anyhow::Result;
use headerstamp::cli::{Cli, run_stamp};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_stamp(cli.stamp_args)
}
