//! The path model
//!
//! [`FilePath`] wraps a path string together with the separator convention
//! detected when it was built. The convention never changes afterwards and
//! every read goes through it, so a path created from `C:/A` keeps reading
//! back with `/` whatever separators later combinations bring in.

use crate::combine::combine;
use crate::names::{file_name, join, normalize_extension, parent_directory};
use crate::names::{total_extension, total_file_name};
use crate::sanitize::sanitize_path;
use crate::separator::Separator;
use std::fmt;

/// A file or directory path with a fixed separator convention
///
/// An empty (or whitespace-only) path is valid: every view of it is empty.
///
/// # Examples
/// ```
/// use path_model::{FilePath, Separator};
///
/// let path = FilePath::with_file("C:/A/B", "../file.tar.gz");
/// assert_eq!(path.full_path(), "C:/A/file.tar.gz");
/// assert_eq!(path.separator(), Separator::Slash);
/// assert_eq!(path.directory(), "C:/A");
/// assert_eq!(path.stem(), "file");
/// assert_eq!(path.extension(), ".tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilePath {
    path: String,
    separator: Separator,
}

impl FilePath {
    /// Path from a raw string
    pub fn new(path: &str) -> Self {
        Self::with_file(path, "")
    }

    /// Path from `folder` combined with `file`
    ///
    /// The separator convention is taken from `folder`: `/` if it contains
    /// one, `\` otherwise.
    pub fn with_file(folder: &str, file: &str) -> Self {
        let separator = if folder.trim().is_empty() {
            Separator::default()
        } else {
            Separator::detect(folder)
        };

        Self {
            path: combine(folder, file),
            separator,
        }
    }

    /// Whether the path is empty or whitespace
    pub fn is_empty(&self) -> bool {
        self.path.trim().is_empty()
    }

    /// Separator convention fixed at construction
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The full path written with the path's separator
    pub fn full_path(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            self.separator.normalize(&self.path)
        }
    }

    /// Final component
    pub fn file_name(&self) -> String {
        file_name(&self.full_path()).to_string()
    }

    /// Parent directory (empty for a bare root)
    pub fn directory(&self) -> String {
        let full = self.full_path();
        parent_directory(&full).unwrap_or("").to_string()
    }

    /// File name without its total extension
    pub fn stem(&self) -> String {
        total_file_name(&self.full_path()).to_string()
    }

    /// Total extension with its leading dot (`.tar.gz`), or empty
    pub fn extension(&self) -> String {
        let full = self.full_path();
        let extension = total_extension(&full);
        if extension.is_empty() {
            String::new()
        } else {
            format!(".{}", extension)
        }
    }

    /// New path combining this one with `fragment`
    ///
    /// Leading `..` segments of the fragment walk up from this path. The
    /// receiver is left untouched.
    ///
    /// # Examples
    /// ```
    /// use path_model::FilePath;
    ///
    /// let base = FilePath::new("C:\\A\\B\\C");
    /// let file = base.combine("..\\..\\file.txt");
    /// assert_eq!(file.full_path(), "C:\\A\\file.txt");
    /// assert_eq!(base.full_path(), "C:\\A\\B\\C");
    /// ```
    pub fn combine(&self, fragment: &str) -> FilePath {
        FilePath {
            path: combine(&self.full_path(), fragment),
            separator: self.separator,
        }
    }

    /// Replace the total extension
    ///
    /// The extension is trimmed and given a leading dot if it lacks one. A
    /// blank extension leaves the path unchanged.
    ///
    /// # Examples
    /// ```
    /// use path_model::FilePath;
    ///
    /// let mut path = FilePath::new("C:/A/archive.tar.gz");
    /// path.update_extension("zip");
    /// assert_eq!(path.full_path(), "C:/A/archive.zip");
    /// ```
    pub fn update_extension(&mut self, extension: &str) {
        if self.is_empty() || extension.trim().is_empty() {
            return;
        }

        let name = format!("{}{}", self.stem(), normalize_extension(extension));
        self.path = join(&self.directory(), &name, self.separator);
    }

    /// Replace the stem, optionally keeping the current extension
    ///
    /// Without `preserve_extension` the new name is taken whole, so any dots
    /// in it start the new extension.
    ///
    /// # Examples
    /// ```
    /// use path_model::FilePath;
    ///
    /// let mut path = FilePath::new("C:/A/file.txt");
    /// path.update_name("notes.old", true);
    /// assert_eq!(path.full_path(), "C:/A/notes.old.txt");
    /// assert_eq!(path.extension(), ".old.txt");
    /// ```
    pub fn update_name(&mut self, new_name: &str, preserve_extension: bool) {
        if self.is_empty() {
            return;
        }

        let name = if preserve_extension {
            format!("{}{}", new_name, self.extension())
        } else {
            new_name.to_string()
        };
        self.path = combine(&self.directory(), &name);
    }

    /// Strip characters that are not valid in a path
    ///
    /// Separators are kept. If nothing valid remains the path is left as it
    /// was.
    pub fn normalize(&mut self) {
        if self.is_empty() {
            return;
        }

        let sanitized = sanitize_path(&self.path);
        if sanitized.trim().is_empty() {
            log::debug!("'{}' has no valid characters, left unchanged", self.path);
        } else {
            self.path = sanitized;
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path())
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        FilePath::new(path)
    }
}

impl From<String> for FilePath {
    fn from(path: String) -> Self {
        FilePath::new(&path)
    }
}
