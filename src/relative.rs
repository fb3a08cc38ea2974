//! Relative path resolution between two absolute paths

use crate::names::{file_name, join, parent_directory};
use crate::separator::Separator;

/// Split on `/` when the path has one, otherwise on `\`
fn split_path(path: &str) -> Vec<&str> {
    if path.contains('/') {
        path.split('/').collect()
    } else {
        path.split('\\').collect()
    }
}

fn same_segment(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Relative path that leads from `source` to `target`
///
/// Segments are compared case-insensitively. One `..` is emitted for every
/// segment of `source` past the common prefix, followed by the rest of
/// `target`. The result always uses backslashes.
///
/// # Examples
/// ```
/// use path_model::relative_path;
///
/// assert_eq!(relative_path("C:\\A\\B", "C:\\A\\C"), "..\\C");
/// assert_eq!(relative_path("C:/A", "C:/A/B/C"), "B\\C");
/// assert_eq!(relative_path("C:\\A\\B", "C:\\A\\B"), "");
/// ```
pub fn relative_path(source: &str, target: &str) -> String {
    let source_parts = split_path(source);
    let target_parts = split_path(target);

    let common = source_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(source, target)| same_segment(source, target))
        .count();

    let mut relative = "../".repeat(source_parts.len() - common);
    relative.push_str(&target_parts[common..].join("/"));

    Separator::Backslash.normalize(&relative)
}

/// Relative file name of `file` as seen from the directory `directory`
///
/// # Examples
/// ```
/// use path_model::relative_file_name;
///
/// assert_eq!(relative_file_name("C:\\A\\B", "C:\\A\\C\\file.txt"), "..\\C\\file.txt");
/// assert_eq!(relative_file_name("C:\\A", "C:\\A\\file.txt"), "file.txt");
/// ```
pub fn relative_file_name(directory: &str, file: &str) -> String {
    let relative = relative_path(directory, parent_directory(file).unwrap_or(""));
    join(&relative, file_name(file), Separator::Backslash)
}
