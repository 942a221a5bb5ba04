use crate::config::{is_supported_stack, require_domain, stack_file, STACK_SEARCH_COLS};
use crate::core::{Row, TableSource};
use crate::utils::error::{LoadFailure, LoadResult, SearchError};
use std::collections::HashMap;
use std::path::Path;

/// Reads domain and stack tables through a [`TableSource`].
///
/// Every call reads the table afresh; nothing is cached between calls.
pub struct DataLoader<S: TableSource> {
    storage: S,
}

impl<S: TableSource> DataLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the table for `domain`. Unknown domains and missing files yield
    /// no rows; read or parse failures come back as [`LoadFailure`].
    pub fn load_data(&self, domain: &str) -> LoadResult {
        let config = match require_domain(domain) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("{}", e);
                return Ok(Vec::new());
            }
        };

        self.load_table(config.file, config.search_cols)
    }

    /// Loads `stacks/<stack>.csv`, searchable on Category and Keywords.
    pub fn load_stack_data(&self, stack: &str) -> LoadResult {
        if !is_supported_stack(stack) {
            tracing::debug!(
                "{}",
                SearchError::UnsupportedStack {
                    name: stack.to_string()
                }
            );
            return Ok(Vec::new());
        }

        self.load_table(&stack_file(stack), &STACK_SEARCH_COLS)
    }

    fn load_table(&self, name: &str, search_cols: &[&str]) -> LoadResult {
        let bytes = match self.storage.read_table(name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(LoadFailure::new(Vec::new(), e)),
        };

        tracing::debug!("Parsing {} ({} bytes)", name, bytes.len());
        let rows = parse_rows(&bytes, &self.storage.describe(name), search_cols)?;
        tracing::debug!("Loaded {} rows from {}", rows.len(), name);
        Ok(rows)
    }
}

/// Parses CSV bytes with a header row into [`Row`]s.
///
/// Records may be ragged: extra fields are ignored and missing trailing
/// fields leave their columns absent. Stops at the first record that cannot
/// be parsed (e.g. invalid UTF-8); rows read up to that point are kept in the
/// returned [`LoadFailure`].
pub fn parse_rows(bytes: &[u8], path: &Path, search_cols: &[&str]) -> LoadResult {
    let csv_error = |source: csv::Error| SearchError::CsvError {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return Err(LoadFailure::new(Vec::new(), csv_error(e))),
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => {
                let data: HashMap<String, String> = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(column, value)| (column.to_string(), value.to_string()))
                    .collect();
                rows.push(Row::new(data, search_cols));
            }
            Err(e) => return Err(LoadFailure::new(rows, csv_error(e))),
        }
    }

    Ok(rows)
}
