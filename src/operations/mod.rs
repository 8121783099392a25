//! File operations for the file manager
//!
//! Each handler performs exactly one filesystem effect and returns a
//! [`Report`] to show on success. Handlers never print; rendering is the
//! dispatcher's job. A file opened by `view` is owned by its report and
//! closed when the report is dropped, whether or not it was read to the end.

use crate::commands::help_lines;
use crate::error::{FileManagerError, Result};
use crate::workdir::WorkingDirectory;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// What a successful operation has to show
#[derive(Debug)]
pub enum Report {
    /// A handful of lines built in memory
    Lines(Vec<String>),
    /// File contents, read line by line while rendering
    File(FileLines),
}

impl Report {
    /// Drain the report into owned lines
    pub fn into_lines(self) -> Result<Vec<String>> {
        match self {
            Report::Lines(lines) => Ok(lines),
            Report::File(lines) => lines.collect(),
        }
    }
}

/// Lines of an open file, without their terminators
#[derive(Debug)]
pub struct FileLines {
    reader: BufReader<File>,
    path: PathBuf,
    buf: Vec<u8>,
    failed: bool,
}

impl FileLines {
    fn new(file: File, path: PathBuf) -> Self {
        Self {
            reader: BufReader::new(file),
            path,
            buf: Vec::new(),
            failed: false,
        }
    }
}

impl Iterator for FileLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                // One error ends the stream
                self.failed = true;
                Some(Err(FileManagerError::from_io(e, &self.path)))
            }
        }
    }
}

/// Enumerate the immediate entries of the current directory
///
/// Order is whatever the filesystem yields.
pub fn list(workdir: &WorkingDirectory) -> Result<Report> {
    let dir = workdir.current();
    let entries = fs::read_dir(dir).map_err(|e| FileManagerError::from_io(e, dir))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FileManagerError::from_io(e, dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(Report::Lines(names))
}

/// Commit a new working directory
pub fn change_dir(workdir: &mut WorkingDirectory, path: &str) -> Result<Report> {
    let current = workdir.set_current(path)?;
    Ok(Report::Lines(vec![format!(
        "Changed directory to: {}",
        current.display()
    )]))
}

/// Open a file for line-by-line display
pub fn view(workdir: &WorkingDirectory, path: &str) -> Result<Report> {
    let target = workdir.resolve(path);
    let metadata = fs::metadata(&target).map_err(|e| FileManagerError::from_io(e, &target))?;
    if metadata.is_dir() {
        return Err(FileManagerError::NotAFile(target));
    }

    let file = File::open(&target).map_err(|e| FileManagerError::from_io(e, &target))?;
    Ok(Report::File(FileLines::new(file, target)))
}

/// Create exactly one directory; the parent must already exist
pub fn make_dir(workdir: &WorkingDirectory, path: &str) -> Result<Report> {
    let target = workdir.resolve(path);
    fs::create_dir(&target).map_err(|e| FileManagerError::from_io(e, &target))?;
    Ok(Report::Lines(vec![format!("Directory created: {}", path)]))
}

/// Duplicate a regular file; an existing destination is never overwritten
pub fn copy(workdir: &WorkingDirectory, src: &str, dst: &str) -> Result<Report> {
    let source = workdir.resolve(src);
    let destination = workdir.resolve(dst);

    let metadata = fs::metadata(&source).map_err(|e| FileManagerError::from_io(e, &source))?;
    if !metadata.is_file() {
        return Err(FileManagerError::NotAFile(source));
    }
    if exists(&destination) {
        return Err(FileManagerError::AlreadyExists(destination));
    }

    fs::copy(&source, &destination).map_err(|e| attribute(e, &source, &destination))?;
    Ok(Report::Lines(vec![format!("File copied to: {}", dst)]))
}

/// Rename `src` to `dst` with the OS rename primitive
pub fn move_entry(workdir: &WorkingDirectory, src: &str, dst: &str) -> Result<Report> {
    let source = workdir.resolve(src);
    let destination = workdir.resolve(dst);

    if !exists(&source) {
        return Err(FileManagerError::NotFound(source));
    }
    fs::rename(&source, &destination).map_err(|e| attribute(e, &source, &destination))?;
    Ok(Report::Lines(vec![format!("File moved to: {}", dst)]))
}

/// The command table
pub fn help() -> Report {
    Report::Lines(help_lines())
}

// symlink_metadata so a dangling link still counts as present
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Pin a two-path failure on the side the OS most likely refused
fn attribute(err: io::Error, source: &Path, destination: &Path) -> FileManagerError {
    let blame_source = match err.kind() {
        io::ErrorKind::NotFound => !exists(source),
        io::ErrorKind::PermissionDenied => {
            let readable = File::open(source).is_ok();
            let parent_locked = source
                .parent()
                .and_then(|dir| fs::metadata(dir).ok())
                .map(|m| m.permissions().readonly())
                .unwrap_or(false);
            !readable || parent_locked
        }
        _ => false,
    };

    if blame_source {
        FileManagerError::from_io(err, source)
    } else {
        FileManagerError::from_io(err, destination)
    }
}
