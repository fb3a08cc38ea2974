//! Name sanitization
//!
//! Filters a name or path down to characters that are safe on every
//! filesystem: ASCII letters and digits, path separators and a small
//! allow-list of punctuation. Two presets cover the common cases:
//!
//! - [`SanitizeOptions::path`] keeps separators and allows ` .-,#@`
//! - [`SanitizeOptions::file_name`] turns separators into `_`, allows
//!   ` .-,_` and can fold accented vowels

use crate::separator::is_separator;
use serde::{Deserialize, Serialize};

const PATH_EXTRA_CHARS: &str = " .-,#@";
const FILE_NAME_EXTRA_CHARS: &str = " .-,_";

/// Accented vowels and their plain equivalent
const ACCENTS: [(char, char); 40] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('à', 'a'),
    ('è', 'e'),
    ('ì', 'i'),
    ('ò', 'o'),
    ('ù', 'u'),
    ('â', 'a'),
    ('ê', 'e'),
    ('î', 'i'),
    ('ô', 'o'),
    ('û', 'u'),
    ('ä', 'a'),
    ('ë', 'e'),
    ('ï', 'i'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('À', 'A'),
    ('È', 'E'),
    ('Ì', 'I'),
    ('Ò', 'O'),
    ('Ù', 'U'),
    ('Â', 'A'),
    ('Ê', 'E'),
    ('Î', 'I'),
    ('Ô', 'O'),
    ('Û', 'U'),
    ('Ä', 'A'),
    ('Ë', 'E'),
    ('Ï', 'I'),
    ('Ö', 'O'),
    ('Ü', 'U'),
];

/// What to do with `/` and `\` while sanitizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorPolicy {
    /// Keep separators as they are
    #[default]
    Keep,
    /// Replace every separator with the given character
    Replace(char),
}

/// Sanitizer configuration
///
/// Deserializable so hosts can keep it in their own configuration files;
/// missing fields take the general-purpose defaults.
///
/// # Examples
/// ```
/// use path_model::{SanitizeOptions, SeparatorPolicy};
///
/// let options = SanitizeOptions::file_name().with_max_length(8);
/// assert_eq!(options.separators, SeparatorPolicy::Replace('_'));
/// assert_eq!(options.max_length, Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Characters allowed besides ASCII letters and digits
    pub extra_chars: String,
    /// Handling of path separators
    pub separators: SeparatorPolicy,
    /// Maximum length in characters of the result
    pub max_length: Option<usize>,
    /// Map accented vowels to their plain form before filtering
    pub fold_accents: bool,
}

impl SanitizeOptions {
    /// General-purpose preset for full paths
    pub fn path() -> Self {
        Self {
            extra_chars: PATH_EXTRA_CHARS.to_string(),
            separators: SeparatorPolicy::Keep,
            max_length: None,
            fold_accents: false,
        }
    }

    /// Preset for a single file name
    pub fn file_name() -> Self {
        Self {
            extra_chars: FILE_NAME_EXTRA_CHARS.to_string(),
            separators: SeparatorPolicy::Replace('_'),
            max_length: None,
            fold_accents: false,
        }
    }

    /// Limit the result to `max_length` characters
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Enable or disable accent folding
    pub fn with_accent_folding(mut self, fold_accents: bool) -> Self {
        self.fold_accents = fold_accents;
        self
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::path()
    }
}

fn fold_accent(ch: char) -> Option<char> {
    ACCENTS
        .iter()
        .find(|(accented, _)| *accented == ch)
        .map(|(_, plain)| *plain)
}

/// Sanitize `name` according to `options`
///
/// Characters outside the allowed set are dropped, leading dots and
/// surrounding whitespace are removed, then the result is truncated to
/// `max_length` characters. Input with nothing valid yields an empty string.
///
/// # Examples
/// ```
/// use path_model::{sanitize, SanitizeOptions};
///
/// assert_eq!(sanitize("a/b\\c?d", &SanitizeOptions::path()), "a/b\\cd");
/// assert_eq!(sanitize("a/b\\c?d", &SanitizeOptions::file_name()), "a_b_cd");
/// assert_eq!(sanitize("..hidden", &SanitizeOptions::path()), "hidden");
/// assert_eq!(sanitize("???", &SanitizeOptions::path()), "");
/// ```
pub fn sanitize(name: &str, options: &SanitizeOptions) -> String {
    let mut filtered = String::with_capacity(name.len());

    for ch in name.chars() {
        if is_separator(ch) {
            match options.separators {
                SeparatorPolicy::Keep => filtered.push(ch),
                SeparatorPolicy::Replace(replacement) => filtered.push(replacement),
            }
            continue;
        }

        let ch = if options.fold_accents {
            fold_accent(ch).unwrap_or(ch)
        } else {
            ch
        };
        if ch.is_ascii_alphanumeric() || options.extra_chars.contains(ch) {
            filtered.push(ch);
        }
    }

    let cleaned = filtered
        .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_end();

    match options.max_length {
        Some(max_length) if cleaned.chars().count() > max_length => {
            log::trace!("truncating '{}' to {} characters", cleaned, max_length);
            cleaned.chars().take(max_length).collect()
        }
        _ => cleaned.to_string(),
    }
}

/// Sanitize a full path with the general-purpose preset
///
/// Separators are kept so the structure of the path survives.
pub fn sanitize_path(path: &str) -> String {
    sanitize(path, &SanitizeOptions::path())
}

/// Sanitize a single file name
///
/// Separators become `_`; `fold_accents` maps accented vowels to plain ones
/// instead of dropping them.
///
/// # Examples
/// ```
/// use path_model::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("Canción: #1.mp3", None, true), "Cancion 1.mp3");
/// assert_eq!(sanitize_file_name("Canción: #1.mp3", None, false), "Cancin 1.mp3");
/// assert_eq!(sanitize_file_name("report 2024.pdf", Some(6), false), "report");
/// ```
pub fn sanitize_file_name(name: &str, max_length: Option<usize>, fold_accents: bool) -> String {
    let options = SanitizeOptions {
        max_length,
        fold_accents,
        ..SanitizeOptions::file_name()
    };
    sanitize(name, &options)
}
