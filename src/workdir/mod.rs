//! Working directory state for a file manager session
//!
//! Holds the session's current directory. The process-wide current directory
//! is never touched; every relative path is resolved against this value.

use crate::error::{FileManagerError, Result};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The session's current directory
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingDirectory {
    current: PathBuf,
}

impl WorkingDirectory {
    /// Create a working directory rooted at `path`
    ///
    /// The path must name an existing, enumerable directory; it is stored
    /// in canonical form.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let current = check_directory(path.as_ref())?;
        Ok(Self { current })
    }

    /// Create a working directory from the process current directory
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FileManagerError::from_io(e, Path::new(".")))?;
        Self::new(cwd)
    }

    /// Get the current absolute path
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Resolve a user-supplied path against the current directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        // Path::join replaces the base when the argument is absolute
        self.current.join(path)
    }

    /// Move the session to `new_path`
    ///
    /// On failure the previous directory is kept.
    pub fn set_current(&mut self, new_path: impl AsRef<Path>) -> Result<&Path> {
        let resolved = self.resolve(new_path);
        let canonical = check_directory(&resolved)?;
        info!("working directory changed to {}", canonical.display());
        self.current = canonical;
        Ok(&self.current)
    }
}

/// Canonicalise `path` and check it is a directory the session may enter
fn check_directory(path: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|e| FileManagerError::from_io(e, path))?;

    let metadata = fs::metadata(&canonical).map_err(|e| FileManagerError::from_io(e, path))?;
    if !metadata.is_dir() {
        return Err(FileManagerError::NotADirectory(path.to_path_buf()));
    }

    // An unreadable directory would make every later `list` fail
    match fs::read_dir(&canonical) {
        Ok(_) => Ok(canonical),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(FileManagerError::PermissionDenied(path.to_path_buf()))
        }
        Err(e) => Err(FileManagerError::from_io(e, path)),
    }
}
