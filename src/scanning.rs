//! Directory scanning for image files matching the extension allow-list.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ManifestError, ManifestResult};
use crate::extensions::ExtensionAllowList;

/// Traversal switches layered on top of the default top-down walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Resolve symbolic links instead of skipping them.
    pub follow_links: bool,
    /// Order siblings by file name instead of filesystem enumeration order.
    pub sort_entries: bool,
    /// Canonicalise the root so every collected path is absolute.
    pub absolute_paths: bool,
}

/// Walk `root` collecting every regular file the allow-list accepts, in discovery order.
///
/// Within each directory, files are reported before any subdirectory is descended into.
/// Symbolic links to regular files are listed even when links are not followed; linked
/// directories are only descended into with `follow_links`. Any unreadable directory aborts
/// the scan.
pub fn collect_image_paths(
    root: &Path,
    allow_list: &ExtensionAllowList,
    options: ScanOptions,
) -> ManifestResult<Vec<PathBuf>> {
    let root = if options.absolute_paths {
        fs::canonicalize(root).map_err(|err| ManifestError::filesystem(root, err))?
    } else {
        root.to_path_buf()
    };

    // walkdir reports a file root as a single entry; only directories are scanned.
    let metadata = fs::metadata(&root).map_err(|err| ManifestError::filesystem(&root, err))?;
    if !metadata.is_dir() {
        return Err(ManifestError::filesystem(
            &root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let sort_entries = options.sort_entries;
    let walker = WalkDir::new(&root)
        .follow_links(options.follow_links)
        .sort_by(move |a, b| sibling_order(a, b, sort_entries));

    let mut image_paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() && !is_link_to_file(&entry) {
            trace!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }

        if allow_list.matches(entry.path()) {
            debug!(path = %entry.path().display(), "matched image file");
            image_paths.push(entry.into_path());
        }
    }

    Ok(image_paths)
}

/// Unfollowed symlink whose target is a regular file. Dangling links resolve to nothing.
fn is_link_to_file(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

/// Files sort ahead of directories; ties keep enumeration order unless sorting by name.
fn sibling_order(a: &DirEntry, b: &DirEntry, by_name: bool) -> Ordering {
    let kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    if by_name {
        kind.then_with(|| a.file_name().cmp(b.file_name()))
    } else {
        kind
    }
}
