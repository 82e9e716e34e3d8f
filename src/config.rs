//! Manifest configuration loader describing what to scan and where to write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{ManifestError, ManifestResult};
use crate::extensions::{DEFAULT_EXTENSIONS, ExtensionAllowList};
use crate::scanning::ScanOptions;

/// File name looked up by [`ManifestConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "image_manifest.json";

/// Inputs for a single manifest build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Directory tree to scan.
    pub root_dir: PathBuf,
    /// Destination of the newline-delimited manifest.
    pub output_file: PathBuf,
    /// Extensions (with leading `.`) that mark a file as an image.
    pub extensions: Vec<String>,
    /// Resolve symbolic links while walking.
    pub follow_links: bool,
    /// Sort sibling entries by name for platform-independent output.
    pub sort_entries: bool,
    /// Emit absolute paths by canonicalising the root first.
    pub absolute_paths: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            output_file: PathBuf::from("image_manifest.txt"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            follow_links: false,
            sort_entries: false,
            absolute_paths: false,
        }
    }
}

impl ManifestConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing file yields the defaults. A malformed one is reported and also yields the
    /// defaults so a stray file never blocks a run.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.exists() {
            return Self::default();
        }

        Self::load(&candidate).unwrap_or_else(|err| {
            warn!(error = %err, "ignoring unusable config file");
            Self::default()
        })
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| ManifestError::Config {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;
        serde_json::from_str(&content).map_err(|err| ManifestError::Config {
            path: path.to_path_buf(),
            source: Box::new(err),
        })
    }

    /// Validated allow-list built from `extensions`.
    pub fn allow_list(&self) -> ManifestResult<ExtensionAllowList> {
        ExtensionAllowList::new(&self.extensions)
    }

    /// Traversal switches carried by this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.follow_links,
            sort_entries: self.sort_entries,
            absolute_paths: self.absolute_paths,
        }
    }
}
