use crate::utils::error::Result;

/// Read access to the CSV tables under a data directory.
pub trait TableSource: Send + Sync {
    /// Returns the raw bytes of `name`, relative to the data root, or `None`
    /// when the table does not exist.
    fn read_table(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Human-readable location of `name`, used in diagnostics.
    fn describe(&self, name: &str) -> std::path::PathBuf {
        std::path::PathBuf::from(name)
    }
}
