//! Separator conventions
//!
//! Paths handled by this crate use either `/` or `\` as separator. Both are
//! always recognized when splitting; the convention only decides which one
//! is written out.

use std::fmt;

/// Separator convention of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// Forward slash (`/`)
    Slash,
    /// Backslash (`\`), used when nothing else is detected
    #[default]
    Backslash,
}

impl Separator {
    /// The separator character
    pub const fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// The separator character this convention replaces
    pub const fn other(self) -> char {
        match self {
            Separator::Slash => '\\',
            Separator::Backslash => '/',
        }
    }

    /// Detect the convention used by `path`
    ///
    /// Returns [`Separator::Slash`] as soon as one `/` is present, otherwise
    /// [`Separator::Backslash`].
    ///
    /// # Examples
    /// ```
    /// use path_model::Separator;
    ///
    /// assert_eq!(Separator::detect("C:/A/file.txt"), Separator::Slash);
    /// assert_eq!(Separator::detect("C:\\A\\file.txt"), Separator::Backslash);
    /// assert_eq!(Separator::detect(""), Separator::Backslash);
    /// ```
    pub fn detect(path: &str) -> Self {
        if path.contains('/') {
            Separator::Slash
        } else {
            Separator::Backslash
        }
    }

    /// Rewrite every separator of `path` to this convention
    ///
    /// # Examples
    /// ```
    /// use path_model::Separator;
    ///
    /// assert_eq!(Separator::Slash.normalize("C:\\A/b\\c"), "C:/A/b/c");
    /// assert_eq!(Separator::Backslash.normalize("C:\\A/b\\c"), "C:\\A\\b\\c");
    /// ```
    pub fn normalize(self, path: &str) -> String {
        path.replace(self.other(), &self.as_char().to_string())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Whether `c` is a path separator under either convention
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Detect the separator convention of `path`
///
/// Free-function form of [`Separator::detect`].
pub fn detect_separator(path: &str) -> Separator {
    Separator::detect(path)
}

/// Normalize the separators of `path` to `separator`
///
/// Free-function form of [`Separator::normalize`].
pub fn normalize_separators(path: &str, separator: Separator) -> String {
    separator.normalize(path)
}
