//! File-system access for view files
//!
//! [`ViewGenerator`](crate::generator::ViewGenerator) only touches the disk
//! through [`ViewFiles`], so tests can swap in a recording double.

use std::fs;
use std::io;
use std::path::Path;

/// File operations needed to create, delete and move views
pub trait ViewFiles {
    fn exists(&self, path: &Path) -> bool;

    /// Creates every missing directory above `path`
    fn create_parent_dirs(&self, path: &Path) -> io::Result<()>;

    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    fn delete(&self, path: &Path) -> io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`ViewFiles`] backed by the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsViewFiles;

impl ViewFiles for FsViewFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_parent_dirs(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Writes atomically (temp file + rename). An existing file keeps its
    /// permissions.
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let file_name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;

        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        let result = fs::write(&temp_path, content)
            .and_then(|()| match fs::metadata(path) {
                Ok(existing) => fs::set_permissions(&temp_path, existing.permissions()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e),
            })
            .and_then(|()| fs::rename(&temp_path, path));

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }

        result
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog").join("index.blade.php");
        let files = FsViewFiles;

        files.create_parent_dirs(&path).unwrap();
        files.write(&path, "hello").unwrap();

        assert!(files.exists(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!dir.path().join("blog").join("index.blade.php.tmp").exists());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("welcome.blade.php");
        let files = FsViewFiles;

        files.write(&path, "old").unwrap();
        files.write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.blade.php");
        let files = FsViewFiles;

        files.write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();
        files.write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail
        let path = dir.path().join("taken.blade.php");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), "x").unwrap();

        assert!(FsViewFiles.write(&path, "content").is_err());
        assert!(!dir.path().join("taken.blade.php.tmp").exists());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("x.blade.php");

        assert!(FsViewFiles.write(&path, "x").is_err());
    }

    #[test]
    fn delete_and_rename() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.blade.php");
        let to = dir.path().join("nested").join("b.blade.php");
        let files = FsViewFiles;

        files.write(&from, "content").unwrap();
        files.create_parent_dirs(&to).unwrap();
        files.rename(&from, &to).unwrap();

        assert!(!files.exists(&from));
        assert_eq!(fs::read_to_string(&to).unwrap(), "content");

        files.delete(&to).unwrap();
        assert!(!files.exists(&to));
        assert!(files.delete(&to).is_err());
    }
}
