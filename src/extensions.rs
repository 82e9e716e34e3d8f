//! Case-insensitive filename extension filter.

use std::path::Path;

use crate::error::{ManifestError, ManifestResult};

/// Extensions recognised when no allow-list is configured.
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Ordered, lowercase set of extensions (each including its leading `.`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowList {
    entries: Vec<String>,
}

impl ExtensionAllowList {
    /// Validate and lowercase the supplied extensions.
    ///
    /// Every entry must start with `.` and name at least one character after it. Duplicate
    /// entries collapse onto the first occurrence.
    pub fn new<I, S>(extensions: I) -> ManifestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for raw in extensions {
            let value = raw.as_ref().trim();
            if !value.starts_with('.') {
                return Err(ManifestError::invalid_allow_list(format!(
                    "`{value}` must start with `.`"
                )));
            }
            if value.len() == 1 {
                return Err(ManifestError::invalid_allow_list(
                    "`.` does not name an extension",
                ));
            }

            let lowered = value.to_lowercase();
            if !entries.contains(&lowered) {
                entries.push(lowered);
            }
        }

        if entries.is_empty() {
            return Err(ManifestError::invalid_allow_list(
                "at least one extension is required",
            ));
        }

        Ok(Self { entries })
    }

    /// Entries in the order they were supplied.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` when the file name's extension is in the allow-list.
    pub fn matches(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.entries.iter().any(|entry| *entry == ext))
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        Self {
            entries: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// Lowercase `.ext` suffix of a path's file name.
///
/// Leading dots are ignored, so dotfiles such as `.jpg` or `..png` have no extension, while
/// `photo.` has the empty extension `.`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let (_, ext) = name.trim_start_matches('.').rsplit_once('.')?;
    Some(format!(".{}", ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_regardless_of_case() {
        let allow = ExtensionAllowList::default();
        assert!(allow.matches(Path::new("PHOTO.JPG")));
        assert!(allow.matches(Path::new("a/b/photo2.PNG")));
        assert!(allow.matches(Path::new("scan.JpEg")));
    }

    #[test]
    fn rejects_unlisted_extensions() {
        let allow = ExtensionAllowList::default();
        assert!(!allow.matches(Path::new("notes.txt")));
        assert!(!allow.matches(Path::new("archive.jpg.zip")));
        assert!(!allow.matches(Path::new("README")));
    }

    #[test]
    fn uses_only_the_final_suffix() {
        let allow = ExtensionAllowList::default();
        assert!(allow.matches(Path::new("backup.tar.png")));
        assert_eq!(
            extension_of(Path::new("frame.0001.JPG")).as_deref(),
            Some(".jpg")
        );
    }

    #[test]
    fn dotfiles_have_no_extension() {
        assert_eq!(extension_of(Path::new(".jpg")), None);
        assert_eq!(extension_of(Path::new("..jpg")), None);
        assert_eq!(extension_of(Path::new("...png")), None);
        assert_eq!(extension_of(Path::new(".hidden.png")).as_deref(), Some(".png"));
        assert_eq!(extension_of(Path::new("trailing.")).as_deref(), Some("."));
        let allow = ExtensionAllowList::default();
        assert!(!allow.matches(Path::new(".png")));
        assert!(!allow.matches(Path::new("..jpg")));
        assert!(!allow.matches(Path::new("a/...png")));
    }

    #[test]
    fn lowercases_and_deduplicates_entries() {
        let allow = ExtensionAllowList::new([".PNG", ".png", " .Webp "]).unwrap();
        assert_eq!(allow.entries(), [".png".to_string(), ".webp".to_string()]);
        assert!(allow.matches(Path::new("x.WEBP")));
    }

    #[test]
    fn rejects_malformed_lists() {
        assert!(ExtensionAllowList::new(Vec::<String>::new()).is_err());
        assert!(ExtensionAllowList::new(["jpg"]).is_err());
        assert!(ExtensionAllowList::new(["."]).is_err());
    }
}
