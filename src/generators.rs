//! Property test generators for the path model
//!
//! Generators produce Windows-style paths (drive + backslashes) since that
//! is the default convention; tests derive slash variants from them.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate drive roots such as `C:`
    pub fn drive() -> impl Strategy<Value = String> {
        "[A-Z]".prop_map(|letter| format!("{}:", letter))
    }

    /// Generate directory names (no dots, no separators)
    pub fn directory_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,12}"
    }

    /// Generate file extensions, including compound and missing ones
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("txt".to_string()),
            Just("rs".to_string()),
            Just("json".to_string()),
            Just("tar.gz".to_string()),
            Just("xml.json".to_string()),
            Just("".to_string()),
        ]
    }

    /// Generate a complete filename with extension
    pub fn filename() -> impl Strategy<Value = String> {
        (Self::directory_name(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate relative fragments without `..` segments
    pub fn relative_fragment() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::directory_name(), 0..=3).prop_flat_map(|dirs| {
            Self::filename().prop_map(move |filename| {
                let mut parts = dirs.clone();
                parts.push(filename);
                parts.join("\\")
            })
        })
    }

    /// Generate absolute paths with a drive and at least one directory
    pub fn absolute_path() -> impl Strategy<Value = String> {
        (
            Self::drive(),
            prop::collection::vec(Self::directory_name(), 1..=5),
        )
            .prop_map(|(drive, dirs)| format!("{}\\{}", drive, dirs.join("\\")))
    }

    /// Generate names mixing valid and invalid sanitizer input
    pub fn messy_name() -> impl Strategy<Value = String> {
        "[ .a-zA-Z0-9_?*<>|:\"#@,áéíóúÁÉÍÓÚàèüñ/\\\\-]{0,40}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn absolute_paths_are_rooted(path in PathGenerators::absolute_path()) {
            prop_assert!(crate::names::is_rooted(&path));
            prop_assert!(!path.contains('/'));
            prop_assert!(!path.contains(".."));
        }

        #[test]
        fn relative_fragments_have_no_parents(fragment in PathGenerators::relative_fragment()) {
            prop_assert!(!fragment.is_empty());
            prop_assert!(!fragment.starts_with(".."));
            prop_assert!(!crate::names::is_rooted(&fragment));
        }
    }
}
