//! # Content Transformer Module
//!
//! Pure text transformations applied to one file: removing byte-order-mark
//! artifacts, detecting the line ending, stripping an existing header block
//! and prepending the new one. Nothing here touches the filesystem.

use std::borrow::Cow;

use crate::error::HeaderError;
use crate::rules::Delimiters;

/// Byte-order-mark leftovers removed wherever they appear.
///
/// The first is the BOM character itself (bytes `EF BB BF`). The second is
/// the same three bytes after being decoded as Latin-1 and saved again as
/// UTF-8.
pub const BOM_ARTIFACTS: [&str; 2] = ["\u{feff}", "\u{ef}\u{bb}\u{bf}"];

/// Line ending used when writing the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
  Lf,
  CrLf,
}

impl LineEnding {
  /// A file containing any `\r\n` is treated as a CRLF file.
  pub fn detect(content: &str) -> Self {
    if content.contains("\r\n") { Self::CrLf } else { Self::Lf }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::CrLf => "\r\n",
    }
  }

  /// Converts `\n`-terminated text to this line ending.
  pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
    match self {
      Self::Lf => Cow::Borrowed(text),
      Self::CrLf => Cow::Owned(text.replace('\n', "\r\n")),
    }
  }
}

/// Outcome of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  /// The complete new file content
  pub content: String,
  /// Whether an existing header block was removed
  pub replaced_header: bool,
}

/// Content transformation for one kind of header.
///
/// The `ContentTransformer` holds the rendered header text and applies it
/// with the delimiters of whatever rule a file matched.
pub struct ContentTransformer {
  /// Rendered header text with `\n` line endings
  header_text: String,
}

impl ContentTransformer {
  pub const fn new(header_text: String) -> Self {
    Self { header_text }
  }

  pub fn header_text(&self) -> &str {
    &self.header_text
  }

  /// Produces the new content for a file.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::Unterminated`] when the content starts with the
  /// open marker but no close marker line follows it.
  pub fn rewrite(&self, content: &str, delimiters: Delimiters) -> Result<Rewrite, HeaderError> {
    let cleaned = strip_bom_artifacts(content);
    let line_ending = LineEnding::detect(&cleaned);

    let (body, replaced_header) = match strip_existing_header(&cleaned, delimiters)? {
      Some(body) => (body, true),
      None => (&*cleaned, false),
    };

    let header = line_ending.apply(&self.header_text);
    let eol = line_ending.as_str();

    let mut new_content =
      String::with_capacity(delimiters.open.len() + header.len() + delimiters.close.len() + eol.len() + body.len());
    new_content.push_str(delimiters.open);
    new_content.push_str(&header);
    new_content.push_str(delimiters.close);
    new_content.push_str(eol);
    new_content.push_str(body);

    Ok(Rewrite {
      content: new_content,
      replaced_header,
    })
  }
}

/// Removes every BOM artifact from the content.
pub fn strip_bom_artifacts(content: &str) -> Cow<'_, str> {
  if !BOM_ARTIFACTS.iter().any(|artifact| content.contains(artifact)) {
    return Cow::Borrowed(content);
  }

  let mut cleaned = content.to_string();
  for artifact in BOM_ARTIFACTS {
    cleaned = cleaned.replace(artifact, "");
  }
  Cow::Owned(cleaned)
}

/// Removes a leading header block delimited by `delimiters`.
///
/// Returns `Ok(None)` when the content does not start with the open marker,
/// and `Ok(Some(rest))` with everything after the close marker and its line
/// ending otherwise. A close marker only counts when it ends a line (or the
/// file).
pub fn strip_existing_header(content: &str, delimiters: Delimiters) -> Result<Option<&str>, HeaderError> {
  let Some(after_open) = content.strip_prefix(delimiters.open) else {
    return Ok(None);
  };
  let offset = delimiters.open.len();

  for (index, _) in after_open.match_indices(delimiters.close) {
    let close_end = offset + index + delimiters.close.len();
    let tail = &content[close_end..];

    let eol_len = if tail.starts_with("\r\n") {
      2
    } else if tail.starts_with('\n') {
      1
    } else if tail.is_empty() {
      0
    } else {
      continue;
    };

    return Ok(Some(&content[close_end + eol_len..]));
  }

  Err(HeaderError::Unterminated {
    open: delimiters.open,
    close: delimiters.close,
  })
}
