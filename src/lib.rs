//! Basic File Manager
//!
//! An interactive, line-oriented file manager. A session keeps a current
//! working directory and reads commands (`list`, `cd`, `view`, `mkdir`,
//! `copy`, `move`, `help`, `exit`) from a whitespace-delimited token stream,
//! running exactly one filesystem effect per command.

pub mod commands;
pub mod dispatcher;
pub mod operations;
pub mod tokenizer;
pub mod workdir;

// Re-export core types for convenience
pub use crate::error::{FileManagerError, Result};
pub use commands::{Command, Verb};
pub use dispatcher::{Control, Dispatcher};
pub use tokenizer::TokenStream;
pub use workdir::WorkingDirectory;

/// Core error handling types for the file manager
pub mod error {
    use std::fmt;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Result type for file manager operations
    pub type Result<T> = std::result::Result<T, FileManagerError>;

    /// Every way a single command can fail. None of these end the session.
    #[derive(Debug, Clone, PartialEq)]
    pub enum FileManagerError {
        // Wrong or missing filesystem entries
        NotFound(PathBuf),
        NotADirectory(PathBuf),
        NotAFile(PathBuf),
        AlreadyExists(PathBuf),

        // OS-level access refusal
        PermissionDenied(PathBuf),

        // Dispatch errors
        UnknownCommand(String),

        // Anything else the OS reports (cross-device rename, disk full, ...)
        Io { path: PathBuf, message: String },
    }

    impl FileManagerError {
        /// Classify an OS error raised while operating on `path`.
        pub fn from_io(err: io::Error, path: &Path) -> Self {
            let path = path.to_path_buf();
            match err.kind() {
                io::ErrorKind::NotFound => FileManagerError::NotFound(path),
                io::ErrorKind::PermissionDenied => FileManagerError::PermissionDenied(path),
                io::ErrorKind::AlreadyExists => FileManagerError::AlreadyExists(path),
                // A path component that should be a directory is a file
                io::ErrorKind::NotADirectory => FileManagerError::NotADirectory(path),
                io::ErrorKind::IsADirectory => FileManagerError::NotAFile(path),
                _ => FileManagerError::Io {
                    path,
                    message: err.to_string(),
                },
            }
        }
    }

    impl fmt::Display for FileManagerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                FileManagerError::NotFound(path) => {
                    write!(f, "No such file or directory: {}", path.display())
                }
                FileManagerError::NotADirectory(path) => {
                    write!(f, "Not a directory: {}", path.display())
                }
                FileManagerError::NotAFile(path) => write!(f, "Not a file: {}", path.display()),
                FileManagerError::AlreadyExists(path) => {
                    write!(f, "Already exists: {}", path.display())
                }
                FileManagerError::PermissionDenied(path) => {
                    write!(f, "Permission denied: {}", path.display())
                }
                FileManagerError::UnknownCommand(verb) => write!(f, "Unknown command: {}", verb),
                FileManagerError::Io { path, message } => {
                    write!(f, "{}: {}", path.display(), message)
                }
            }
        }
    }

    impl std::error::Error for FileManagerError {}

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_from_io_classifies_kinds() {
            let path = Path::new("/tmp/x");
            let not_found = io::Error::new(io::ErrorKind::NotFound, "gone");
            assert_eq!(
                FileManagerError::from_io(not_found, path),
                FileManagerError::NotFound(path.to_path_buf())
            );

            let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
            assert_eq!(
                FileManagerError::from_io(denied, path),
                FileManagerError::PermissionDenied(path.to_path_buf())
            );

            let enotdir = io::Error::new(io::ErrorKind::NotADirectory, "not a directory");
            assert_eq!(
                FileManagerError::from_io(enotdir, path),
                FileManagerError::NotADirectory(path.to_path_buf())
            );

            let eisdir = io::Error::new(io::ErrorKind::IsADirectory, "is a directory");
            assert_eq!(
                FileManagerError::from_io(eisdir, path),
                FileManagerError::NotAFile(path.to_path_buf())
            );

            let other = io::Error::new(io::ErrorKind::Other, "cross-device link");
            match FileManagerError::from_io(other, path) {
                FileManagerError::Io { message, .. } => assert!(message.contains("cross-device")),
                e => panic!("unexpected classification: {:?}", e),
            }
        }

        #[test]
        fn test_display_is_single_line() {
            let errors = [
                FileManagerError::NotFound(PathBuf::from("a")),
                FileManagerError::NotADirectory(PathBuf::from("b")),
                FileManagerError::NotAFile(PathBuf::from("c")),
                FileManagerError::AlreadyExists(PathBuf::from("d")),
                FileManagerError::PermissionDenied(PathBuf::from("e")),
                FileManagerError::UnknownCommand("foo".to_string()),
            ];
            for e in &errors {
                assert!(!e.to_string().contains('\n'));
            }
            assert_eq!(
                FileManagerError::UnknownCommand("foo".to_string()).to_string(),
                "Unknown command: foo"
            );
        }
    }
}
