#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod extensions;
pub mod manifest;
pub mod scanning;

pub use builder::{ManifestBuilder, ManifestSummary, build_manifest, build_manifest_with_report, confirmation_message};
pub use config::ManifestConfig;
pub use error::{ManifestError, ManifestResult};
pub use extensions::ExtensionAllowList;
pub use scanning::{ScanOptions, collect_image_paths};
