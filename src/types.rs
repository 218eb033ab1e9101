use crate::error::FinderError;
use std::ffi::OsStr;
use std::fs::{self, FileType, Metadata};
use std::path::{Path, PathBuf};

/// A single filesystem node visited during traversal.
///
/// Entries are transient: one is produced per visited node, handed to the
/// filter pipeline (and the caller's predicate), and discarded. Content and
/// metadata are read on demand so that a predicate which never looks at a
/// file costs no extra I/O.
#[derive(Debug, Clone)]
pub struct FileEntry {
    path: PathBuf,
    file_type: Option<FileType>,
    depth: usize,
}

impl FileEntry {
    pub(crate) fn from_walk_entry(entry: &ignore::DirEntry) -> Self {
        Self {
            path: entry.path().to_path_buf(),
            file_type: entry.file_type(),
            depth: entry.depth(),
        }
    }

    /// The full path of the node.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final component of the path, if any.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Directory depth below the traversal root (the root itself is 0, its
    /// immediate children are 1).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the node is a regular file. Directories and special files
    /// are traversed or skipped, never yielded.
    pub fn is_file(&self) -> bool {
        self.file_type.is_some_and(|ft| ft.is_file())
    }

    pub fn is_dir(&self) -> bool {
        self.file_type.is_some_and(|ft| ft.is_dir())
    }

    /// Stats the node.
    pub fn metadata(&self) -> Result<Metadata, FinderError> {
        fs::metadata(&self.path).map_err(|e| FinderError::io(&self.path, e))
    }

    /// Reads the full content of the node as bytes.
    pub fn read(&self) -> Result<Vec<u8>, FinderError> {
        fs::read(&self.path).map_err(|e| FinderError::io(&self.path, e))
    }

    /// Reads the full content of the node as UTF-8 text.
    ///
    /// Non-UTF-8 content surfaces as an [`FinderError::Io`] like any other
    /// read failure.
    pub fn read_to_string(&self) -> Result<String, FinderError> {
        fs::read_to_string(&self.path).map_err(|e| FinderError::io(&self.path, e))
    }

    pub(crate) fn into_path(self) -> PathBuf {
        self.path
    }
}
