//! In-memory file system used by tests.

use super::types::{AbsoluteFsPath, FileStats, FileSystem, PathManipulation, ReadonlyFileSystem};
use super::util::{clean_path, relative_below, resolve_against};
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

/// A POSIX-flavoured file system held entirely in memory.
///
/// Directories are implicit: a path is a directory when some file lives below it.
#[derive(Clone, Debug)]
pub struct MockFileSystem {
    cwd: AbsoluteFsPath,
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new_posix()
    }
}

impl MockFileSystem {
    pub fn new_posix() -> Self {
        MockFileSystem {
            cwd: AbsoluteFsPath::new("/".to_string()),
            files: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = AbsoluteFsPath::new(clean_path(cwd));
        self
    }

    pub fn init_with_files(&self, files: Vec<(&str, &str)>) {
        let mut tree = self.files.lock().expect("mock file system poisoned");
        for (path, content) in files {
            tree.insert(resolve_against(self.cwd.as_str(), &[path]), content.as_bytes().to_vec());
        }
    }

    /// Every file currently stored, keyed by absolute path.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.files
            .lock()
            .expect("mock file system poisoned")
            .iter()
            .map(|(path, data)| (path.clone(), String::from_utf8_lossy(data).to_string()))
            .collect()
    }

    fn is_directory(&self, path: &str) -> bool {
        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };
        self.files
            .lock()
            .expect("mock file system poisoned")
            .keys()
            .any(|file| file.starts_with(&prefix))
    }
}

impl PathManipulation for MockFileSystem {
    fn dirname(&self, file: &str) -> String {
        let cleaned = clean_path(file);
        match cleaned.rfind('/') {
            Some(0) => "/".to_string(),
            Some(idx) => cleaned[..idx].to_string(),
            None => ".".to_string(),
        }
    }

    fn join(&self, base_path: &str, paths: &[&str]) -> String {
        let mut joined = base_path.to_string();
        for p in paths {
            joined = format!("{}/{}", joined, p);
        }
        clean_path(&joined)
    }

    fn resolve(&self, paths: &[&str]) -> AbsoluteFsPath {
        AbsoluteFsPath::new(resolve_against(self.cwd.as_str(), paths))
    }

    fn relative(&self, from: &str, to: &str) -> Option<String> {
        relative_below(from, to)
    }

    fn basename(&self, file_path: &str) -> String {
        clean_path(file_path)
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn pwd(&self) -> AbsoluteFsPath {
        self.cwd.clone()
    }
}

impl ReadonlyFileSystem for MockFileSystem {
    fn exists(&self, path: &AbsoluteFsPath) -> bool {
        let key = clean_path(path.as_str());
        self.files
            .lock()
            .expect("mock file system poisoned")
            .contains_key(&key)
            || self.is_directory(&key)
    }

    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String> {
        let key = clean_path(path.as_str());
        self.files
            .lock()
            .expect("mock file system poisoned")
            .get(&key)
            .map(|data| String::from_utf8_lossy(data).to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", key)))
    }

    fn stat(&self, path: &AbsoluteFsPath) -> io::Result<FileStats> {
        let key = clean_path(path.as_str());
        let is_file = self
            .files
            .lock()
            .expect("mock file system poisoned")
            .contains_key(&key);
        if is_file {
            return Ok(FileStats {
                is_file: true,
                is_directory: false,
            });
        }
        if self.is_directory(&key) {
            return Ok(FileStats {
                is_file: false,
                is_directory: true,
            });
        }
        Err(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", key)))
    }
}

impl FileSystem for MockFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()> {
        let key = clean_path(path.as_str());
        if self.is_directory(&key) {
            return Err(io::Error::new(io::ErrorKind::Other, format!("{} is a directory", key)));
        }
        self.files
            .lock()
            .expect("mock file system poisoned")
            .insert(key, data.to_vec());
        Ok(())
    }

    fn ensure_dir(&self, _path: &AbsoluteFsPath) -> io::Result<()> {
        Ok(())
    }
}
