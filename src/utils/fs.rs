//! Filesystem utilities.
//!
//! Thin wrappers the importer needs on top of `std::fs`: idempotent
//! directory creation, flat source listing and timestamp-preserving copies.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use filetime::FileTime;

/// Ensure a directory and its ancestors exist. Existing directories are fine.
pub fn ensure_dir(path: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(path.as_ref())
}

/// Whether `name` is a single plain file name: not empty, no separators and
/// not `.` or `..`.
#[must_use]
pub fn is_plain_file_name(name: &str) -> bool {
    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Whether two paths resolve to the same filesystem entry. Paths that cannot
/// be resolved (for example because they do not exist yet) never match.
#[must_use]
pub fn same_entry(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    match (fs::canonicalize(a.as_ref()), fs::canonicalize(b.as_ref())) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// A regular file found directly inside a source folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as stored on disk; destinations are built from this.
    pub file_name: OsString,
    /// File name, lossily converted for display and classification.
    pub name: String,
    pub path: PathBuf,
}

/// List regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are not traversed. Symlinks count when they point at a
/// regular file.
pub fn list_files(dir: impl AsRef<Path>) -> io::Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            let file_name = entry.file_name();
            files.push(SourceFile {
                name: file_name.to_string_lossy().into_owned(),
                file_name,
                path,
            });
        }
    }
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// Copy `from` to `to`, overwriting, and carry over access and modification
/// times. Copying a file onto itself is refused, since opening the
/// destination would truncate the source.
pub fn copy_preserving_times(from: impl AsRef<Path>, to: impl AsRef<Path>) -> io::Result<u64> {
    let (from, to) = (from.as_ref(), to.as_ref());
    if same_entry(from, to) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} and {} are the same file", from.display(), to.display()),
        ));
    }
    let bytes = fs::copy(from, to)?;
    let metadata = fs::metadata(from)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;
    Ok(bytes)
}
