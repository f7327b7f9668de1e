use crate::errors::{FileOperation, IoError};
use colored::Colorize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// The two filesystem effects a tree description can have.
///
/// Both operations are idempotent: directories are created together with any
/// missing parents and succeed if already present, files are created empty and
/// truncate whatever was there before.
pub trait Filesystem {
    fn create_dir(&mut self, path: &Path) -> Result<(), IoError>;
    fn create_file(&mut self, path: &Path) -> Result<(), IoError>;
}

/// [`Filesystem`] backed by the host filesystem.
#[derive(Debug, Default)]
pub struct DiskFS {
    report: bool,
}
impl DiskFS {
    pub fn new() -> Self {
        Self::default()
    }
    /// Same as [`DiskFS::new`] but prints a `create <path>` line for every
    /// new directory and every file written.
    pub fn reporting() -> Self {
        Self { report: true }
    }
    fn announce(&self, path: &Path) {
        if self.report {
            println!("{} {}", "create".green(), path.display());
        }
    }
}
impl Filesystem for DiskFS {
    fn create_dir(&mut self, path: &Path) -> Result<(), IoError> {
        let existed = path.is_dir();

        std::fs::create_dir_all(path)
            .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

        if !existed {
            log::debug!("created directory {}", path.display());
            self.announce(path);
        }

        Ok(())
    }
    fn create_file(&mut self, path: &Path) -> Result<(), IoError> {
        std::fs::File::create(path)
            .map_err(|error| IoError::new(FileOperation::CreateFile, path.into(), error))?;

        log::debug!("created file {}", path.display());
        self.announce(path);

        Ok(())
    }
}

/// A file or directory recorded by a [`VirtualFS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    pub destination: PathBuf,
    /// Indicates whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}

/// In-memory [`Filesystem`] that records entries in creation order instead of
/// touching the disk. Requests for an entry already recorded are ignored.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    entries: Vec<VirtualEntry>,
    // normalized (path, is_file) pairs already in `entries`
    seen: HashSet<(PathBuf, bool)>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }
    /// Separator-insensitive key, so `a/b/` and `a/b` are the same entry.
    fn key(path: &Path, is_file: bool) -> (PathBuf, bool) {
        (path.components().collect(), is_file)
    }
    fn record(&mut self, path: &Path, is_file: bool) {
        if self.seen.insert(Self::key(path, is_file)) {
            self.entries.push(VirtualEntry {
                destination: path.to_path_buf(),
                is_file,
            });
        }
    }
    pub fn entries(&self) -> &[VirtualEntry] {
        &self.entries
    }
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_file)
            .map(|entry| entry.destination.as_path())
    }
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|entry| entry.is_file)
            .map(|entry| entry.destination.as_path())
    }
    pub fn contains_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        self.seen.contains(&Self::key(path.as_ref(), false))
    }
    pub fn contains_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.seen.contains(&Self::key(path.as_ref(), true))
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl Filesystem for VirtualFS {
    fn create_dir(&mut self, path: &Path) -> Result<(), IoError> {
        self.record(path, false);
        Ok(())
    }
    fn create_file(&mut self, path: &Path) -> Result<(), IoError> {
        self.record(path, true);
        Ok(())
    }
}
