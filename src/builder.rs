//! Manifest build orchestrator: scan the tree, then persist the collected paths.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ManifestConfig;
use crate::error::{ManifestError, ManifestResult};
use crate::extensions::ExtensionAllowList;
use crate::manifest::write_manifest;
use crate::scanning::{ScanOptions, collect_image_paths};

/// Outcome of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
  /// Manifest file that was written.
  pub output_file: PathBuf,
  /// Paths written, in manifest order.
  pub paths: Vec<PathBuf>,
}

impl ManifestSummary {
  /// Number of lines in the manifest.
  pub fn count(&self) -> usize {
    self.paths.len()
  }
}

/// High-level helper that owns validated build inputs.
pub struct ManifestBuilder {
  root_dir: PathBuf,
  output_file: PathBuf,
  allow_list: ExtensionAllowList,
  options: ScanOptions,
}

impl ManifestBuilder {
  /// Create a builder with default traversal options.
  pub fn new(
    root_dir: impl Into<PathBuf>,
    output_file: impl Into<PathBuf>,
    allow_list: ExtensionAllowList,
  ) -> Self {
    Self {
      root_dir: root_dir.into(),
      output_file: output_file.into(),
      allow_list,
      options: ScanOptions::default(),
    }
  }

  /// Create a builder from a loaded configuration, validating its allow-list.
  pub fn from_config(config: &ManifestConfig) -> ManifestResult<Self> {
    Ok(
      Self::new(&config.root_dir, &config.output_file, config.allow_list()?)
        .with_options(config.scan_options()),
    )
  }

  /// Replace the traversal options.
  pub fn with_options(mut self, options: ScanOptions) -> Self {
    self.options = options;
    self
  }

  /// Scan the whole tree, then write the manifest.
  ///
  /// The output file is only opened after the traversal succeeds, so a failed scan leaves any
  /// existing manifest untouched.
  pub fn build(&self) -> ManifestResult<ManifestSummary> {
    let paths = collect_image_paths(&self.root_dir, &self.allow_list, self.options)?;
    write_manifest(&self.output_file, &paths)?;

    info!(
      root = %self.root_dir.display(),
      output = %self.output_file.display(),
      count = paths.len(),
      "manifest written"
    );

    Ok(ManifestSummary {
      output_file: self.output_file.clone(),
      paths,
    })
  }
}

/// Scan `root_directory` for files in `extensions` and write them to `output_path`.
///
/// Prints a confirmation naming the manifest on stdout and returns the number of paths
/// written.
pub fn build_manifest<S: AsRef<str>>(
  root_directory: &Path,
  output_path: &Path,
  extensions: &[S],
) -> ManifestResult<usize> {
  build_manifest_with_report(root_directory, output_path, extensions, &mut io::stdout().lock())
}

/// Same as [`build_manifest`], writing the confirmation line to `report` instead of stdout.
pub fn build_manifest_with_report<S: AsRef<str>, W: Write>(
  root_directory: &Path,
  output_path: &Path,
  extensions: &[S],
  report: &mut W,
) -> ManifestResult<usize> {
  let allow_list = ExtensionAllowList::new(extensions)?;
  let summary = ManifestBuilder::new(root_directory, output_path, allow_list).build()?;
  writeln!(report, "{}", confirmation_message(&summary))
    .and_then(|()| report.flush())
    .map_err(|err| ManifestError::filesystem("<stdout>", err))?;
  Ok(summary.count())
}

/// Console line announcing a finished manifest.
pub fn confirmation_message(summary: &ManifestSummary) -> String {
  format!(
    "Manifest written to {} ({} paths)",
    summary.output_file.display(),
    summary.count()
  )
}
