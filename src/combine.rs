//! Path combination
//!
//! Combining resolves leading `..` segments of the fragment against the
//! base before joining, so `C:\A\B` combined with `..\file.txt` gives
//! `C:\A\file.txt`.

use crate::names::{join, parent_directory};
use crate::separator::Separator;

const PARENT_PREFIX: &str = "..\\";

/// Combine `base` with a possibly relative `fragment`
///
/// The fragment is normalized to backslashes and every leading `..\` removes
/// one trailing segment from `base`. Once `base` is reduced to a root (or to
/// nothing) further `..\` segments are dropped without shortening anything.
/// The result is written in the separator convention detected on `base`.
///
/// - A blank `fragment` returns `base` unchanged.
/// - A blank `base` returns the fragment with backslash separators.
///
/// # Examples
/// ```
/// use path_model::combine;
///
/// assert_eq!(combine("C:\\A\\B\\C", "..\\..\\file.txt"), "C:\\A\\file.txt");
/// assert_eq!(combine("C:/A", "../file.txt"), "C:/file.txt");
/// assert_eq!(combine("C:\\A", ""), "C:\\A");
/// assert_eq!(combine("", "sub/file.txt"), "sub\\file.txt");
/// ```
pub fn combine(base: &str, fragment: &str) -> String {
    if fragment.trim().is_empty() {
        return base.to_string();
    }

    let fragment = Separator::Backslash.normalize(fragment);
    if base.trim().is_empty() {
        return fragment;
    }

    let mut current = base;
    let mut rest = fragment.as_str();
    while let Some(stripped) = rest.strip_prefix(PARENT_PREFIX) {
        if !current.trim().is_empty() {
            match parent_directory(current) {
                Some(parent) => current = parent,
                None => log::trace!("'..' above root '{}' ignored", current),
            }
        }
        rest = stripped;
    }

    let combined = if current.trim().is_empty() {
        rest.to_string()
    } else {
        join(current, rest, Separator::Backslash)
    };

    Separator::detect(base).normalize(&combined)
}

/// Combine two paths segment by segment
///
/// Both inputs are trimmed and normalized to backslashes, blank segments are
/// discarded, and each leading `..` of `relative` drops one trailing segment
/// of `path` (never more than `path` has). The result always uses
/// backslashes and never starts or ends with a separator.
///
/// # Examples
/// ```
/// use path_model::combine_segments;
///
/// assert_eq!(combine_segments("C:\\A\\B", "..\\C\\file.txt"), "C:\\A\\C\\file.txt");
/// assert_eq!(combine_segments("C:/A//B/", "file.txt"), "C:\\A\\B\\file.txt");
/// ```
pub fn combine_segments(path: &str, relative: &str) -> String {
    let path = Separator::Backslash.normalize(path.trim());
    let relative = Separator::Backslash.normalize(relative.trim());

    if path.is_empty() {
        return relative;
    } else if relative.is_empty() {
        return path;
    }

    let source = split_segments(&path);
    let target = split_segments(&relative);
    let ups = target.iter().take_while(|segment| **segment == "..").count();
    let keep = source.len().saturating_sub(ups);

    source[..keep]
        .iter()
        .chain(target[ups..].iter())
        .copied()
        .collect::<Vec<_>>()
        .join("\\")
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('\\')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Build `directory` + `name` + `extension`
///
/// The extension is trimmed and gets a dot when it has none; a blank
/// extension adds nothing.
///
/// # Examples
/// ```
/// use path_model::combine_file_name;
///
/// assert_eq!(combine_file_name("C:\\A", "file", "txt"), "C:\\A\\file.txt");
/// assert_eq!(combine_file_name("/data", "report", ".csv"), "/data/report.csv");
/// assert_eq!(combine_file_name("C:\\A", "file", " "), "C:\\A\\file");
/// ```
pub fn combine_file_name(directory: &str, name: &str, extension: &str) -> String {
    let mut file_name = join(directory, name, Separator::detect(directory));
    let extension = extension.trim();

    if !extension.is_empty() && !extension.starts_with('.') {
        file_name.push('.');
    }
    file_name.push_str(extension);
    file_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PathGenerators;
    use proptest::prelude::*;

    #[test]
    fn test_combine_simple() {
        assert_eq!(combine("C:\\A", "file.txt"), "C:\\A\\file.txt");
        assert_eq!(combine("C:/A", "file.txt"), "C:/A/file.txt");
        assert_eq!(combine("C:\\A\\", "file.txt"), "C:\\A\\file.txt");
        assert_eq!(combine("C:\\A", "sub/file.txt"), "C:\\A\\sub\\file.txt");
    }

    #[test]
    fn test_combine_parent_segments() {
        assert_eq!(combine("C:\\A", "../file.txt"), "C:\\file.txt");
        assert_eq!(combine("C:/A", "../file.txt"), "C:/file.txt");
        assert_eq!(combine("C:\\A\\B\\C", "../../file.txt"), "C:\\A\\file.txt");
        assert_eq!(combine("C:\\A\\B\\C", "..\\..\\file.txt"), "C:\\A\\file.txt");
        assert_eq!(combine("C:\\A\\B", "..\\C\\file.txt"), "C:\\A\\C\\file.txt");
    }

    #[test]
    fn test_combine_parent_beyond_root() {
        // Stops at the root
        assert_eq!(combine("C:\\A", "..\\..\\..\\file.txt"), "C:\\file.txt");
        assert_eq!(combine("/usr", "../../file.txt"), "/file.txt");

        // A relative base is used up and only the fragment remains
        assert_eq!(combine("A", "..\\file.txt"), "file.txt");
        assert_eq!(combine("A\\B", "..\\..\\..\\file.txt"), "file.txt");
    }

    #[test]
    fn test_combine_only_leading_parents_are_resolved() {
        assert_eq!(combine("C:\\A", "B\\..\\file.txt"), "C:\\A\\B\\..\\file.txt");
        assert_eq!(combine("C:\\A", ".."), "C:\\A\\..");
    }

    #[test]
    fn test_combine_empty_inputs() {
        assert_eq!(combine("C:\\A", ""), "C:\\A");
        assert_eq!(combine("C:/A", "   "), "C:/A");
        assert_eq!(combine("", "A/file.txt"), "A\\file.txt");
        assert_eq!(combine("  ", "file.txt"), "file.txt");
        assert_eq!(combine("", ""), "");
    }

    #[test]
    fn test_combine_rooted_fragment_replaces_base() {
        assert_eq!(combine("C:\\A", "D:\\B\\file.txt"), "D:\\B\\file.txt");
    }

    #[test]
    fn test_combine_segments() {
        assert_eq!(combine_segments("C:\\A\\B", "file.txt"), "C:\\A\\B\\file.txt");
        assert_eq!(combine_segments("C:\\A\\B", "..\\file.txt"), "C:\\A\\file.txt");
        assert_eq!(combine_segments("C:/A/B", "../../file.txt"), "C:\\file.txt");
        assert_eq!(combine_segments("C:\\A", "..\\..\\..\\file.txt"), "file.txt");
        assert_eq!(combine_segments(" A \\ B ", " C "), "A\\B\\C");
        assert_eq!(combine_segments("", "A/B"), "A\\B");
        assert_eq!(combine_segments("A/B", ""), "A\\B");
    }

    #[test]
    fn test_combine_file_name() {
        assert_eq!(combine_file_name("C:\\A", "file", "txt"), "C:\\A\\file.txt");
        assert_eq!(combine_file_name("C:\\A", "file", ".txt"), "C:\\A\\file.txt");
        assert_eq!(combine_file_name("C:/A", "file", "tar.gz"), "C:/A/file.tar.gz");
        assert_eq!(combine_file_name("", "file", "txt"), "file.txt");
        assert_eq!(combine_file_name("C:\\A", "file", ""), "C:\\A\\file");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Combining twice equals combining once with the joined fragment
        #[test]
        fn combine_is_associative_without_parents(
            base in PathGenerators::absolute_path(),
            first in PathGenerators::relative_fragment(),
            second in PathGenerators::relative_fragment()
        ) {
            let stepwise = combine(&combine(&base, &first), &second);
            let at_once = combine(&base, &format!("{}\\{}", first, second));

            prop_assert_eq!(stepwise, at_once);
        }

        /// Each leading `..` removes exactly one segment of the base
        #[test]
        fn parent_segments_strip_one_segment_each(
            drive in PathGenerators::drive(),
            dirs in prop::collection::vec(PathGenerators::directory_name(), 3..=6),
            name in PathGenerators::filename(),
            ups in 0usize..=2
        ) {
            let base = format!("{}\\{}", drive, dirs.join("\\"));
            let fragment = format!("{}{}", "..\\".repeat(ups), name);
            let kept = &dirs[..dirs.len() - ups];
            let expected = format!("{}\\{}\\{}", drive, kept.join("\\"), name);

            prop_assert_eq!(combine(&base, &fragment), expected);
        }

        /// The output keeps the convention of the base
        #[test]
        fn combine_keeps_base_convention(
            base in PathGenerators::absolute_path(),
            fragment in PathGenerators::relative_fragment()
        ) {
            let slashed = base.replace('\\', "/");
            let combined = combine(&slashed, &fragment);

            prop_assert!(!combined.contains('\\'), "unexpected backslash in {}", combined);
        }
    }
}
