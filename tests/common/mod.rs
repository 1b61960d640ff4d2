#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Header text for the default project, without comment markers.
pub const CHEMPROV_HEADER: &str = "
Copyright 2010 HELP Lab @ Washington State University

This file is part of ChemProV (http://helplab.org/chemprov).

ChemProV is distributed under the Open Software License (\"OSL\") v3.0.
Consult \"LICENSE.txt\" included in this package for the complete OSL license.
";

/// Expected content of a C# file after stamping.
pub fn stamped_cs(body: &str) -> String {
  format!("/*{}*/\n{}", CHEMPROV_HEADER, body)
}

/// Expected content of a XAML file after stamping.
pub fn stamped_xaml(body: &str) -> String {
  format!("<!--{}-->\n{}", CHEMPROV_HEADER, body)
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Removes write permission from `dir`.
///
/// Returns `false` when the restriction has no effect (for example when the
/// tests run as root), in which case callers should skip their assertions.
#[cfg(unix)]
pub fn make_read_only(dir: &Path) -> Result<bool> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(dir, fs::Permissions::from_mode(0o555))?;

  let check = dir.join(".write-check");
  if fs::write(&check, "").is_ok() {
    fs::remove_file(&check)?;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755))?;
    return Ok(false);
  }
  Ok(true)
}

#[cfg(unix)]
pub fn make_writable(dir: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(dir, fs::Permissions::from_mode(0o755))?;
  Ok(())
}

pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  Ok(fs::read_to_string(root.join(relative))?)
}
