use crate::domain::ports::TableSource;
use crate::utils::error::{Result, SearchError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads tables from a data directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl TableSource for LocalStorage {
    fn read_table(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.describe(name);
        if !full_path.exists() {
            tracing::debug!("Table not found: {}", full_path.display());
            return Ok(None);
        }

        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            // Removed between the existence check and the read.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SearchError::IoError {
                path: full_path,
                source,
            }),
        }
    }

    fn describe(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_table() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("styles.csv"), "Keywords\nclean\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let data = storage.read_table("styles.csv").unwrap();
        assert_eq!(data.as_deref(), Some(&b"Keywords\nclean\n"[..]));
    }

    #[test]
    fn test_missing_table_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        assert!(storage.read_table("stacks/vue.csv").unwrap().is_none());
    }

    #[test]
    fn test_unreadable_table_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("colors.csv")).unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        assert!(matches!(
            storage.read_table("colors.csv"),
            Err(SearchError::IoError { .. })
        ));
    }
}
