//! # headerstamp
//!
//! A tool that stamps a copyright header onto every XAML and C# source file
//! in a directory tree.
//!
//! `headerstamp` walks the tree, picks `.xaml`, `.xaml.cs` and `.cs` files,
//! removes any header block the file already starts with and writes the
//! current one in its place. Running it twice leaves the tree unchanged.
//!
//! ## Features
//!
//! * Recursive traversal with a fixed extension table matched after the first dot
//! * XML comment headers for `.xaml`, C block comment headers for C# files
//! * Removal of byte-order-mark leftovers anywhere in a file
//! * Check mode with optional diffs, without touching any file
//! * Every failed file reported by path, the rest of the tree still processed
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use headerstamp::processor::{Processor, ProcessorConfig};
//! use headerstamp::templates::ProjectInfo;
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(ProcessorConfig {
//!         project: ProjectInfo::new("ChemProV", "http://helplab.org/chemprov"),
//!         ..ProcessorConfig::new("../ChemProV")
//!     })?;
//!
//!     let reports = processor.process()?;
//!     for report in reports.iter().filter(|r| r.is_changed()) {
//!         println!("{}", report.path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Traversal and per-file header rewriting
//! * [`rules`] - The extension table and comment delimiters
//! * [`templates`] - Header text and project identity
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`rules`]: crate::rules
//! [`templates`]: crate::templates
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod rules;
pub mod templates;
