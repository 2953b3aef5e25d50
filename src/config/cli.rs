use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        let content = fs::read_to_string(self.full_path(path))?;
        Ok(content)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        // Follow symlinks so the rename replaces the real file, not the link.
        let full_path = match fs::canonicalize(self.full_path(path)) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => self.full_path(path),
            Err(e) => return Err(e.into()),
        };
        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = match NamedTempFile::new_in(&dir) {
            Ok(staged) => staged,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                tracing::warn!(
                    "Cannot stage in {}, overwriting {} in place",
                    dir.display(),
                    full_path.display()
                );
                fs::write(&full_path, content)?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;

        if let Ok(meta) = fs::metadata(&full_path) {
            fs::set_permissions(staged.path(), meta.permissions())?;
        }

        staged.persist(&full_path).map_err(|e| e.error)?;
        Ok(())
    }
}
