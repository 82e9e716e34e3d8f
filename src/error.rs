//! Error type shared by the scanning, writing and configuration layers.

use std::io;
use std::path::{Path, PathBuf};

/// Result alias used throughout the crate.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while building a manifest.
#[derive(Debug)]
pub enum ManifestError {
  /// The root directory, a nested directory or the output file could not be accessed.
  FilesystemAccess {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: io::Error,
  },
  /// The extension allow-list was empty or contained a malformed entry.
  InvalidAllowList {
    /// Human readable explanation of the rejected input.
    reason: String,
  },
  /// An explicitly requested configuration file could not be read or parsed.
  Config {
    /// Path to the configuration file.
    path: PathBuf,
    /// Underlying read or parse failure.
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ManifestError {
  pub(crate) fn filesystem(path: impl AsRef<Path>, source: io::Error) -> Self {
    Self::FilesystemAccess {
      path: path.as_ref().to_path_buf(),
      source,
    }
  }

  pub(crate) fn invalid_allow_list(reason: impl Into<String>) -> Self {
    Self::InvalidAllowList {
      reason: reason.into(),
    }
  }
}

impl From<walkdir::Error> for ManifestError {
  fn from(err: walkdir::Error) -> Self {
    let path = err
      .loop_ancestor()
      .or_else(|| err.path())
      .map(Path::to_path_buf)
      .unwrap_or_default();
    Self::FilesystemAccess {
      path,
      source: io::Error::from(err),
    }
  }
}

impl std::fmt::Display for ManifestError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::FilesystemAccess { path, source } => {
        write!(f, "cannot access {}: {}", path.display(), source)
      }
      Self::InvalidAllowList { reason } => {
        write!(f, "invalid extension allow-list: {}", reason)
      }
      Self::Config { path, source } => {
        write!(f, "failed to load config {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ManifestError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::FilesystemAccess { source, .. } => Some(source),
      Self::InvalidAllowList { .. } => None,
      Self::Config { source, .. } => Some(source.as_ref()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error;

  #[test]
  fn filesystem_errors_name_the_path() {
    let err = ManifestError::filesystem(
      "/missing/root",
      io::Error::new(io::ErrorKind::NotFound, "no such directory"),
    );

    let message = err.to_string();
    assert!(message.contains("/missing/root"));
    assert!(message.contains("no such directory"));
    assert!(err.source().is_some());
  }

  #[test]
  fn allow_list_errors_have_no_source() {
    let err = ManifestError::invalid_allow_list("empty");
    assert_eq!(err.to_string(), "invalid extension allow-list: empty");
    assert!(err.source().is_none());
  }
}
