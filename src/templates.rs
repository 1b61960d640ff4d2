//! # Templates Module
//!
//! This module holds the copyright text stamped into every file and renders
//! it for a specific project.
//!
//! The module includes:
//! - [`HeaderTemplate`] for the header text and its placeholders
//! - [`ProjectInfo`] for the project identity filled into the template
//!
//! ## Example
//!
//! ```rust
//! use headerstamp::templates::{HeaderTemplate, ProjectInfo};
//!
//! let project = ProjectInfo::new("ChemProV", "http://helplab.org/chemprov");
//! let header = HeaderTemplate::default().render(&project);
//!
//! assert!(header.starts_with("\nCopyright 2010"));
//! assert!(header.contains("This file is part of ChemProV (http://helplab.org/chemprov)."));
//! ```

use crate::verbose_log;

/// Default project name filled into the header.
pub const DEFAULT_PROJECT_NAME: &str = "ChemProV";

/// Default project URL filled into the header.
pub const DEFAULT_PROJECT_URL: &str = "http://helplab.org/chemprov";

/// The copyright notice placed between the comment markers.
///
/// The leading and trailing newlines are part of the text: they put the
/// markers on lines of their own.
pub const DEFAULT_TEMPLATE: &str = "
Copyright 2010 HELP Lab @ Washington State University

This file is part of {{project}} ({{url}}).

{{project}} is distributed under the Open Software License (\"OSL\") v3.0.
Consult \"LICENSE.txt\" included in this package for the complete OSL license.
";

/// Identity of the project the header is written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
  /// Project name, e.g. "ChemProV"
  pub name: String,
  /// Project home page
  pub url: String,
}

impl ProjectInfo {
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      url: url.into(),
    }
  }
}

impl Default for ProjectInfo {
  fn default() -> Self {
    Self::new(DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_URL)
  }
}

/// The header text with `{{project}}` and `{{url}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  template: String,
}

impl Default for HeaderTemplate {
  fn default() -> Self {
    Self {
      template: DEFAULT_TEMPLATE.to_string(),
    }
  }
}

impl HeaderTemplate {
  /// Renders the template for the given project.
  ///
  /// The result always uses `\n` line endings; the processor converts them
  /// to the line ending of each file it writes.
  pub fn render(&self, project: &ProjectInfo) -> String {
    verbose_log!("Rendering header for project: {} ({})", project.name, project.url);

    self
      .template
      .replace("{{project}}", &project.name)
      .replace("{{url}}", &project.url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EXPECTED_CHEMPROV_HEADER: &str = "\nCopyright 2010 HELP Lab @ Washington State University\n\nThis file is part of ChemProV (http://helplab.org/chemprov).\n\nChemProV is distributed under the Open Software License (\"OSL\") v3.0.\nConsult \"LICENSE.txt\" included in this package for the complete OSL license.\n";

  #[test]
  fn test_default_render_is_verbatim() {
    let rendered = HeaderTemplate::default().render(&ProjectInfo::default());
    assert_eq!(rendered, EXPECTED_CHEMPROV_HEADER);
  }

  #[test]
  fn test_render_other_project() {
    let project = ProjectInfo::new("Widget", "https://example.org/widget");
    let rendered = HeaderTemplate::default().render(&project);

    assert!(rendered.contains("This file is part of Widget (https://example.org/widget)."));
    assert!(rendered.contains("\nWidget is distributed under the Open Software License"));
    assert!(!rendered.contains("{{"));
  }
}
