//! Reading and writing newline-delimited manifest files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ManifestError, ManifestResult};

/// Write `paths` to `output`, one per line, truncating any previous manifest.
///
/// Each line holds the path's raw OS-string bytes followed by `\n`. The file is flushed and
/// synced before returning so a successful result means the manifest is fully on disk.
pub fn write_manifest(output: &Path, paths: &[PathBuf]) -> ManifestResult<usize> {
  let fail = |err| ManifestError::filesystem(output, err);

  let file = File::create(output).map_err(fail)?;
  let mut writer = BufWriter::new(file);
  for path in paths {
    writer
      .write_all(path.as_os_str().as_encoded_bytes())
      .map_err(fail)?;
    writer.write_all(b"\n").map_err(fail)?;
  }

  let file = writer.into_inner().map_err(|err| fail(err.into_error()))?;
  file.sync_all().map_err(fail)?;
  Ok(paths.len())
}

/// Load a manifest back into its listed paths, skipping blank lines.
pub fn read_manifest(path: &Path) -> ManifestResult<Vec<PathBuf>> {
  let content = fs::read_to_string(path).map_err(|err| ManifestError::filesystem(path, err))?;
  Ok(
    content
      .lines()
      .filter(|line| !line.is_empty())
      .map(PathBuf::from)
      .collect(),
  )
}
