//! # Rules Module
//!
//! The fixed table of file kinds that receive a header, and the comment
//! delimiters used to wrap the header for each of them.
//!
//! A file is eligible when the text after the first dot of its name is
//! exactly one of the known extensions, so `Window.xaml.cs` is a code-behind
//! file and never plain C#.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Opening and closing markers of a header comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
  /// Marker the file must start with for an existing header to be detected
  pub open: &'static str,
  /// Marker that ends the header block; always followed by a line ending
  pub close: &'static str,
}

/// A recognized file extension and the comment syntax for its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionRule {
  /// XAML markup (`*.xaml`)
  Xaml,
  /// XAML code-behind (`*.xaml.cs`)
  XamlCs,
  /// C# source (`*.cs`)
  Cs,
}

impl ExtensionRule {
  /// Every rule, in table order.
  pub const ALL: [Self; 3] = [Self::Xaml, Self::XamlCs, Self::Cs];

  /// The dot-suffix this rule matches, without the leading dot.
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Xaml => "xaml",
      Self::XamlCs => "xaml.cs",
      Self::Cs => "cs",
    }
  }

  pub const fn delimiters(self) -> Delimiters {
    match self {
      Self::Xaml => Delimiters {
        open: "<!--",
        close: "-->",
      },
      Self::XamlCs | Self::Cs => Delimiters { open: "/*", close: "*/" },
    }
  }

  /// Selects the rule for a file name out of `rules`.
  ///
  /// The extension is everything after the first dot and must equal a
  /// rule's extension exactly: `Form1.Designer.cs` has extension
  /// `Designer.cs` and matches nothing. Names without a dot never match.
  pub fn match_file_name(file_name: &str, rules: &[Self]) -> Option<Self> {
    let (_, extension) = file_name.split_once('.')?;
    rules.iter().copied().find(|rule| rule.extension() == extension)
  }

  /// Selects the rule for a path by its final component.
  pub fn match_path(path: &Path, rules: &[Self]) -> Option<Self> {
    let file_name = path.file_name()?.to_str()?;
    Self::match_file_name(file_name, rules)
  }
}

impl fmt::Display for ExtensionRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, ".{}", self.extension())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_extensions() {
    assert_eq!(
      ExtensionRule::match_file_name("App.xaml", &ExtensionRule::ALL),
      Some(ExtensionRule::Xaml)
    );
    assert_eq!(
      ExtensionRule::match_file_name("Program.cs", &ExtensionRule::ALL),
      Some(ExtensionRule::Cs)
    );
  }

  #[test]
  fn test_code_behind_is_xaml_cs() {
    assert_eq!(
      ExtensionRule::match_file_name("MainWindow.xaml.cs", &ExtensionRule::ALL),
      Some(ExtensionRule::XamlCs)
    );
  }

  #[test]
  fn test_extension_starts_at_first_dot() {
    for name in ["Resources.Designer.cs", "Form1.Designer.cs", "Settings.Designer.xaml"] {
      assert_eq!(ExtensionRule::match_file_name(name, &ExtensionRule::ALL), None, "{name}");
    }
  }

  #[test]
  fn test_extension_must_be_in_table() {
    // No fallback to the shorter `cs` suffix
    let rules = [ExtensionRule::Xaml, ExtensionRule::Cs];
    assert_eq!(ExtensionRule::match_file_name("MainWindow.xaml.cs", &rules), None);
  }

  #[test]
  fn test_ineligible_names() {
    for name in ["foo.txt", "Makefile", "foo.cs.txt", "foo.CS", "foo.xamlcs", "foo."] {
      assert_eq!(ExtensionRule::match_file_name(name, &ExtensionRule::ALL), None, "{name}");
    }
  }

  #[test]
  fn test_hidden_file_with_known_extension() {
    assert_eq!(
      ExtensionRule::match_file_name(".cs", &ExtensionRule::ALL),
      Some(ExtensionRule::Cs)
    );
  }

  #[test]
  fn test_match_path_uses_file_name_only() {
    let path = Path::new("some.dir.xaml/nested/readme");
    assert_eq!(ExtensionRule::match_path(path, &ExtensionRule::ALL), None);

    let path = Path::new("some.dir/nested/View.xaml");
    assert_eq!(
      ExtensionRule::match_path(path, &ExtensionRule::ALL),
      Some(ExtensionRule::Xaml)
    );
  }

  #[test]
  fn test_delimiters() {
    assert_eq!(ExtensionRule::Xaml.delimiters().open, "<!--");
    assert_eq!(ExtensionRule::Xaml.delimiters().close, "-->");
    assert_eq!(ExtensionRule::XamlCs.delimiters(), ExtensionRule::Cs.delimiters());
    assert_eq!(ExtensionRule::Cs.delimiters().open, "/*");
    assert_eq!(ExtensionRule::Cs.delimiters().close, "*/");
  }
}
