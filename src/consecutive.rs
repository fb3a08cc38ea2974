//! Collision-free sequential names
//!
//! The generators probe a directory and return the first name that is not
//! taken: `file.txt`, `file_1.txt`, `file_2.txt`, ... for files,
//! `0000001.txt`, `0000002.txt`, ... for numbered files and `Name`,
//! `Name_1`, ... for directories. Names are compared case-insensitively.
//!
//! The probe is not a reservation. Another process may create the same
//! name between the probe and the caller's own create; callers that care
//! must handle the creation failure and probe again.

use crate::error::{PathError, Result};
use crate::names::{join, normalize_extension, total_extension, total_file_name};
use crate::separator::Separator;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name filter of the form `prefix*suffix`, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMask {
    prefix: String,
    suffix: String,
}

impl EntryMask {
    /// Mask matching names that start with `prefix` and end with `suffix`
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_uppercase(),
            suffix: suffix.to_uppercase(),
        }
    }

    /// Whether `name` matches the mask
    ///
    /// # Examples
    /// ```
    /// use path_model::EntryMask;
    ///
    /// let mask = EntryMask::new("report", ".txt");
    /// assert!(mask.matches("REPORT_1.TXT"));
    /// assert!(mask.matches("report.txt"));
    /// assert!(!mask.matches("report.csv"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_uppercase();
        name.len() >= self.prefix.len() + self.suffix.len()
            && name.starts_with(&self.prefix)
            && name.ends_with(&self.suffix)
    }
}

impl fmt::Display for EntryMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// Read-only view of the directories the generators probe
pub trait DirectoryLister {
    /// Names (not paths) of the files and directories in `directory`
    /// matching `mask`
    ///
    /// A directory that does not exist has no entries. Failing to read an
    /// existing directory is a [`PathError::DirectoryUnavailable`].
    fn list_entries(&self, directory: &str, mask: &EntryMask) -> Result<BTreeSet<String>>;

    /// Whether `path` is an existing directory
    fn directory_exists(&self, path: &str) -> bool;
}

/// [`DirectoryLister`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_entries(&self, directory: &str, mask: &EntryMask) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();

        if directory.trim().is_empty() || !is_listable(directory, fs::metadata(directory))? {
            return Ok(names);
        }

        let entries =
            fs::read_dir(directory).map_err(|e| PathError::directory_unavailable(directory, &e))?;
        for entry in entries {
            let entry = entry.map_err(|e| PathError::directory_unavailable(directory, &e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if mask.matches(&name) {
                names.insert(name);
            }
        }

        Ok(names)
    }

    fn directory_exists(&self, path: &str) -> bool {
        !path.trim().is_empty() && Path::new(path).is_dir()
    }
}

/// Whether `directory` has entries to read
///
/// A missing path or a plain file has none. Any other metadata failure
/// (permission denied on a parent, I/O error) is reported.
fn is_listable(directory: &str, metadata: io::Result<fs::Metadata>) -> Result<bool> {
    match metadata {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PathError::directory_unavailable(directory, &e)),
    }
}

/// Upper-cased names in `directory` matching `mask`
fn taken_names<L: DirectoryLister + ?Sized>(
    lister: &L,
    directory: &str,
    mask: &EntryMask,
) -> Result<BTreeSet<String>> {
    let names = lister.list_entries(directory, mask)?;
    log::debug!(
        "{} entries matching '{}' in '{}'",
        names.len(),
        mask,
        directory
    );
    Ok(names.iter().map(|name| name.to_uppercase()).collect())
}

fn is_taken(taken: &BTreeSet<String>, name: &str) -> bool {
    let taken_now = taken.contains(&name.to_uppercase());
    if taken_now {
        log::debug!("'{}' already exists", name);
    }
    taken_now
}

/// Free file name in `directory` derived from `file_name`
///
/// Tries `stem.ext`, then `stem_1.ext`, `stem_2.ext`, ... where stem and
/// extension follow the total-extension rule (`a.tar.gz` gives
/// `a_1.tar.gz`). Both files and directories count as taken. Returns the
/// directory joined with the chosen name.
///
/// # Examples
/// ```
/// use path_model::{consecutive_file_name, FsLister};
/// use tempfile::TempDir;
///
/// let dir = TempDir::new().unwrap();
/// let base = dir.path().to_string_lossy().to_string();
///
/// let first = consecutive_file_name(&FsLister, &base, "report.txt").unwrap();
/// assert!(first.ends_with("report.txt"));
///
/// std::fs::write(&first, "").unwrap();
/// let second = consecutive_file_name(&FsLister, &base, "report.txt").unwrap();
/// assert!(second.ends_with("report_1.txt"));
/// ```
pub fn consecutive_file_name<L: DirectoryLister + ?Sized>(
    lister: &L,
    directory: &str,
    file_name: &str,
) -> Result<String> {
    let stem = total_file_name(file_name).to_string();
    let extension = normalize_extension(total_extension(file_name));
    let taken = taken_names(lister, directory, &EntryMask::new(&stem, &extension))?;

    let mut name = format!("{}{}", stem, extension);
    let mut index = 1u64;
    while is_taken(&taken, &name) {
        name = format!("{}_{}{}", stem, index, extension);
        index += 1;
    }

    log::debug!("consecutive file name in '{}': '{}'", directory, name);
    Ok(join(directory, &name, Separator::detect(directory)))
}

/// Free numbered file name in `directory` with the given extension
///
/// Candidates are a seven digit zero-padded counter starting at one:
/// `0000001.ext`, `0000002.ext`, ...
pub fn consecutive_file_name_by_extension<L: DirectoryLister + ?Sized>(
    lister: &L,
    directory: &str,
    extension: &str,
) -> Result<String> {
    let extension = normalize_extension(extension);
    let taken = taken_names(lister, directory, &EntryMask::new("", &extension))?;

    let mut index = 1u64;
    let mut name = format!("{:07}{}", index, extension);
    while is_taken(&taken, &name) {
        index += 1;
        name = format!("{:07}{}", index, extension);
    }

    log::debug!("numbered file name in '{}': '{}'", directory, name);
    Ok(join(directory, &name, Separator::detect(directory)))
}

/// Free directory path under `base` derived from `name`
///
/// Tries `name`, then `name_1`, `name_2`, ... checking each candidate
/// directly for an existing directory.
pub fn consecutive_path<L: DirectoryLister + ?Sized>(lister: &L, base: &str, name: &str) -> String {
    let separator = Separator::detect(base);
    let mut candidate = join(base, name, separator);
    let mut index = 1u64;

    while lister.directory_exists(&candidate) {
        log::debug!("directory '{}' already exists", candidate);
        candidate = join(base, &format!("{}_{}", name, index), separator);
        index += 1;
    }

    candidate
}
