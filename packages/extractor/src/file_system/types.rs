use std::io;
use std::path::Path;

/// A fully qualified path in the file system, in POSIX form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbsoluteFsPath(String);

impl AbsoluteFsPath {
    pub fn new(path: String) -> Self {
        AbsoluteFsPath(path)
    }

    pub fn from<P: AsRef<Path>>(path: P) -> Self {
        AbsoluteFsPath(super::util::normalize_separators(
            &path.as_ref().to_string_lossy(),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AbsoluteFsPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for AbsoluteFsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for AbsoluteFsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Information about an object in the FileSystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub is_file: bool,
    pub is_directory: bool,
}

/// An abstraction over the path manipulation aspects of a file-system.
pub trait PathManipulation {
    fn dirname(&self, file: &str) -> String;
    fn join(&self, base_path: &str, paths: &[&str]) -> String;

    /// Resolve `paths` right to left into an absolute path, like node's `path.resolve`.
    /// `.` and `..` segments are folded lexically.
    fn resolve(&self, paths: &[&str]) -> AbsoluteFsPath;

    /// Path of `to` relative to `from`, or `None` when `to` is not below `from`.
    fn relative(&self, from: &str, to: &str) -> Option<String>;

    fn basename(&self, file_path: &str) -> String;
    fn pwd(&self) -> AbsoluteFsPath;
}

/// An abstraction over the read-only aspects of a file-system.
pub trait ReadonlyFileSystem: PathManipulation {
    fn exists(&self, path: &AbsoluteFsPath) -> bool;
    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String>;
    fn stat(&self, path: &AbsoluteFsPath) -> io::Result<FileStats>;
}

/// A basic interface to abstract the underlying file-system.
pub trait FileSystem: ReadonlyFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()>;
    fn ensure_dir(&self, path: &AbsoluteFsPath) -> io::Result<()>;
}
