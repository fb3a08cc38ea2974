//! # path-model
//!
//! String algebra over file and directory paths.
//!
//! This crate models paths as plain strings with a separator convention
//! (`/` or `\`) that is fixed when a path is built. It never touches the
//! filesystem except for the read-only directory probes of the consecutive
//! name generators, which go through the [`DirectoryLister`] trait.
//!
//! ## Features
//!
//! - **Path Model**: [`FilePath`] with file name, directory, stem and extension views
//! - **Combination**: `..`-aware joining of a base path and a fragment
//! - **Relative Paths**: the `..\`-style route from one absolute path to another
//! - **Sanitization**: filesystem-safe names and paths, with optional accent folding
//! - **Consecutive Names**: `file.txt`, `file_1.txt`, ... without collisions
//!
//! Extensions are *total* extensions: everything after the first dot of the
//! file name, so `file.tar.gz` has extension `tar.gz` and stem `file`.
//!
//! ## Examples
//!
//! ### Path Model
//!
//! ```rust
//! use path_model::FilePath;
//!
//! let mut path = FilePath::with_file("C:/Projects/app", "../docs/readme.txt");
//! assert_eq!(path.full_path(), "C:/Projects/docs/readme.txt");
//!
//! path.update_extension("md");
//! assert_eq!(path.file_name(), "readme.md");
//! ```
//!
//! ### Combination and Relative Paths
//!
//! ```rust
//! use path_model::{combine, relative_path};
//!
//! assert_eq!(combine("C:\\A\\B\\C", "..\\..\\file.txt"), "C:\\A\\file.txt");
//! assert_eq!(relative_path("C:\\A\\B", "C:\\A\\C"), "..\\C");
//! ```
//!
//! ### Sanitization
//!
//! ```rust
//! use path_model::{sanitize_file_name, sanitize_path};
//!
//! // Paths keep their separators
//! assert_eq!(sanitize_path("docs/draft?.txt"), "docs/draft.txt");
//!
//! // File names don't
//! assert_eq!(sanitize_file_name("a/b: canción", None, true), "a_b cancion");
//! ```

mod combine;
mod consecutive;
mod error;
mod model;
mod names;
mod relative;
mod sanitize;
mod separator;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use combine::{combine, combine_file_name, combine_segments};
pub use consecutive::{
    consecutive_file_name, consecutive_file_name_by_extension, consecutive_path,
    DirectoryLister, EntryMask, FsLister,
};
pub use error::{PathError, Result};
pub use model::FilePath;
pub use names::{
    file_name, is_image, is_rooted, join, last_segment, normalize_extension, parent_directory,
    total_extension, total_file_name,
};
pub use relative::{relative_file_name, relative_path};
pub use sanitize::{sanitize, sanitize_file_name, sanitize_path, SanitizeOptions, SeparatorPolicy};
pub use separator::{detect_separator, is_separator, normalize_separators, Separator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
