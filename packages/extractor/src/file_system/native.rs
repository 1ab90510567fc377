use super::types::{AbsoluteFsPath, FileStats, FileSystem, PathManipulation, ReadonlyFileSystem};
use super::util::{clean_path, normalize_separators, relative_below, resolve_against};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The file system of the host machine, accessed through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        NativeFileSystem
    }
}

impl PathManipulation for NativeFileSystem {
    fn dirname(&self, file: &str) -> String {
        let path = Path::new(file);
        let parent = path.parent().unwrap_or(Path::new("."));
        normalize_separators(&parent.to_string_lossy())
    }

    fn join(&self, base_path: &str, paths: &[&str]) -> String {
        let mut path = PathBuf::from(base_path);
        for p in paths {
            path.push(p);
        }
        normalize_separators(&path.to_string_lossy())
    }

    fn resolve(&self, paths: &[&str]) -> AbsoluteFsPath {
        AbsoluteFsPath::new(resolve_against(self.pwd().as_str(), paths))
    }

    fn relative(&self, from: &str, to: &str) -> Option<String> {
        relative_below(from, to)
    }

    fn basename(&self, file_path: &str) -> String {
        Path::new(file_path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn pwd(&self) -> AbsoluteFsPath {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        AbsoluteFsPath::new(clean_path(&normalize_separators(&cwd.to_string_lossy())))
    }
}

impl ReadonlyFileSystem for NativeFileSystem {
    fn exists(&self, path: &AbsoluteFsPath) -> bool {
        Path::new(path.as_str()).exists()
    }

    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String> {
        fs::read_to_string(path.as_str())
    }

    fn stat(&self, path: &AbsoluteFsPath) -> io::Result<FileStats> {
        let meta = fs::metadata(path.as_str())?;
        Ok(FileStats {
            is_file: meta.is_file(),
            is_directory: meta.is_dir(),
        })
    }
}

impl FileSystem for NativeFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()> {
        fs::write(path.as_str(), data)
    }

    fn ensure_dir(&self, path: &AbsoluteFsPath) -> io::Result<()> {
        fs::create_dir_all(path.as_str())
    }
}
