//! # Logging Module
//!
//! This module provides logging utilities for headerstamp, including:
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//! - Diagnostic tracing setup
//!
//! Verbose logs go to stderr and info logs go to stdout, so the list of
//! rewritten files can be piped on its own.
//!
//! ## Example
//!
//! ```rust
//! use headerstamp::logging::{ColorMode, set_verbose};
//! use headerstamp::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Let owo-colors decide based on the terminal
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Processing file: {}", "MainPage.xaml");
//!
//! // Log an info message (goes to stdout)
//! info_log!("Added header to: {}", "MainPage.xaml");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// This macro is used for information that should normally be displayed to
/// the user. It uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message, in yellow when stdout supports it.
///
/// Called by the [`info_log!`] macro.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
