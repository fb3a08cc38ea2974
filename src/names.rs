//! Name primitives
//!
//! Decomposition of a path string into its directory, file name, stem and
//! extension. Both separators are recognized everywhere and a leading drive
//! (`C:`) or separator is treated as the root.
//!
//! The extension used throughout this crate is the *total* extension: the
//! part of the file name after its first dot, so `file.tar.gz` has the
//! extension `tar.gz` and the stem `file`. A name starting with a dot has an
//! empty stem (`.file` has the extension `file`).

use crate::separator::{is_separator, Separator};

const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".bmp", ".gif", ".png", ".tif", ".tiff"];

/// Length in bytes of the root of `path`: `C:\`, `C:` or a leading separator
pub(crate) fn root_len(path: &str) -> usize {
    let bytes = path.as_bytes();

    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.len() >= 3 && is_separator(bytes[2] as char) {
            3
        } else {
            2
        }
    } else if bytes.first().is_some_and(|&b| is_separator(b as char)) {
        1
    } else {
        0
    }
}

/// Whether `path` is rooted (starts with a drive or a separator)
pub fn is_rooted(path: &str) -> bool {
    root_len(path) > 0
}

/// Final component of `path`
///
/// # Examples
/// ```
/// use path_model::file_name;
///
/// assert_eq!(file_name("C:\\A\\file.txt"), "file.txt");
/// assert_eq!(file_name("C:/A/file.txt"), "file.txt");
/// assert_eq!(file_name("C:\\A\\"), "");
/// assert_eq!(file_name("file.txt"), "file.txt");
/// ```
pub fn file_name(path: &str) -> &str {
    let start = path
        .rfind(is_separator)
        .map(|idx| idx + 1)
        .unwrap_or(0)
        .max(root_len(path));
    &path[start..]
}

/// Parent directory of `path`
///
/// Returns `None` when `path` is empty or is a bare root (`C:\`, `/`), so
/// that repeated calls stop at the root instead of failing. A relative name
/// without separators has the empty string as parent.
///
/// # Examples
/// ```
/// use path_model::parent_directory;
///
/// assert_eq!(parent_directory("C:\\A\\file.txt"), Some("C:\\A"));
/// assert_eq!(parent_directory("C:\\A"), Some("C:\\"));
/// assert_eq!(parent_directory("C:\\"), None);
/// assert_eq!(parent_directory("file.txt"), Some(""));
/// ```
pub fn parent_directory(path: &str) -> Option<&str> {
    let root = root_len(path);
    if path.len() <= root {
        return None;
    }

    match path[root..].rfind(is_separator) {
        Some(idx) => {
            let parent = path[..root + idx].trim_end_matches(is_separator);
            if parent.len() < root {
                Some(&path[..root])
            } else {
                Some(parent)
            }
        }
        None => Some(&path[..root]),
    }
}

/// Join `base` and `name` with a single `separator`
///
/// A rooted `name` replaces `base`. No separator is inserted when `base`
/// already ends with one or with a drive colon.
///
/// # Examples
/// ```
/// use path_model::{join, Separator};
///
/// assert_eq!(join("C:\\A", "file.txt", Separator::Backslash), "C:\\A\\file.txt");
/// assert_eq!(join("C:\\A\\", "file.txt", Separator::Backslash), "C:\\A\\file.txt");
/// assert_eq!(join("/tmp", "file.txt", Separator::Slash), "/tmp/file.txt");
/// assert_eq!(join("", "file.txt", Separator::Slash), "file.txt");
/// ```
pub fn join(base: &str, name: &str, separator: Separator) -> String {
    if base.is_empty() || is_rooted(name) {
        name.to_string()
    } else if name.is_empty() || base.ends_with(is_separator) || base.ends_with(':') {
        format!("{}{}", base, name)
    } else {
        format!("{}{}{}", base, separator.as_char(), name)
    }
}

/// Total extension of the file name of `path`, without the leading dot
///
/// Everything after the *first* dot of the file name is extension.
///
/// # Examples
/// ```
/// use path_model::total_extension;
///
/// assert_eq!(total_extension("file.tar.gz"), "tar.gz");
/// assert_eq!(total_extension("C:/A.b.c/file.abc"), "abc");
/// assert_eq!(total_extension("file"), "");
/// assert_eq!(total_extension(".file"), "file");
/// ```
pub fn total_extension(path: &str) -> &str {
    let file = file_name(path);
    if file.trim().is_empty() {
        return "";
    }

    match file.find('.') {
        Some(idx) => &file[idx + 1..],
        None => "",
    }
}

/// File name of `path` without its total extension
///
/// # Examples
/// ```
/// use path_model::total_file_name;
///
/// assert_eq!(total_file_name("C:/A/file.abc.def"), "file");
/// assert_eq!(total_file_name("file"), "file");
/// assert_eq!(total_file_name(".file"), "");
/// ```
pub fn total_file_name(path: &str) -> &str {
    let file = file_name(path);

    match file.find('.') {
        Some(idx) if !file[idx + 1..].trim().is_empty() => &file[..idx],
        _ => file,
    }
}

/// Trim `extension` and make sure it starts with a dot
///
/// Blank input gives an empty extension.
///
/// # Examples
/// ```
/// use path_model::normalize_extension;
///
/// assert_eq!(normalize_extension("txt"), ".txt");
/// assert_eq!(normalize_extension(" .txt "), ".txt");
/// assert_eq!(normalize_extension("  "), "");
/// ```
pub fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// Last component of `path`, splitting on both separators
///
/// Unlike [`file_name`] a drive prefix is not treated specially.
pub fn last_segment(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or("")
}

/// Whether `path` names an image by its extension (case-insensitive)
pub fn is_image(path: &str) -> bool {
    let lower = path.trim().to_lowercase();
    !lower.is_empty() && IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
