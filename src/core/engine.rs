use crate::adapters::LocalStorage;
use crate::config::{domain_config, is_supported_stack};
use crate::core::loader::DataLoader;
use crate::core::projection::{project_domain, project_stack};
use crate::core::scoring::bm25_score;
use crate::core::{Entry, Row, TableSource};
use crate::utils::error::{LoadResult, SearchError};
use std::path::PathBuf;

/// Runs load, score and projection for each query.
///
/// Nothing is retained between calls: every search re-reads its table. Failures
/// never escape as `Err`; callers check [`Entry::is_error`] on the results.
pub struct SearchEngine<S: TableSource> {
    loader: DataLoader<S>,
}

impl SearchEngine<LocalStorage> {
    /// Engine over CSV files under `data_dir`.
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(LocalStorage::new(data_dir))
    }
}

impl<S: TableSource> SearchEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            loader: DataLoader::new(storage),
        }
    }

    /// Returns up to `limit` rows of `domain` matching `query`, projected on
    /// the domain's output columns.
    pub fn search(&self, query: &str, domain: &str, limit: usize) -> Vec<Entry> {
        let rows = rows_or_logged(self.loader.load_data(domain), domain);
        let config = match domain_config(domain) {
            Some(config) if !rows.is_empty() => config,
            _ => return vec![Entry::error(format!("No data found for domain: {}", domain))],
        };

        let results: Vec<Entry> = bm25_score(query, rows)
            .iter()
            .take(limit)
            .map(|row| project_domain(row, config.output_cols))
            .collect();

        tracing::debug!(
            "search '{}' in {} returned {} results",
            query,
            domain,
            results.len()
        );
        results
    }

    /// Returns up to `limit` patterns of `stack` matching `query`.
    pub fn search_stack(&self, query: &str, stack: &str, limit: usize) -> Vec<Entry> {
        if !is_supported_stack(stack) {
            let error = SearchError::UnsupportedStack {
                name: stack.to_string(),
            };
            return vec![Entry::error(error.to_string())];
        }

        let rows = rows_or_logged(
            self.loader.load_stack_data(stack),
            &format!("stack {}", stack),
        );
        if rows.is_empty() {
            return vec![Entry::error(format!("No data found for stack: {}", stack))];
        }

        let results: Vec<Entry> = bm25_score(query, rows)
            .iter()
            .take(limit)
            .map(project_stack)
            .collect();

        tracing::debug!(
            "search '{}' in stack {} returned {} results",
            query,
            stack,
            results.len()
        );
        results
    }
}

/// Logs a failed load and falls back to whatever rows it produced.
fn rows_or_logged(result: LoadResult, what: &str) -> Vec<Row> {
    match result {
        Ok(rows) => rows,
        Err(failure) => {
            tracing::error!(
                "Error loading {}: {} ({} rows kept)",
                what,
                failure.error,
                failure.rows.len()
            );
            failure.rows
        }
    }
}
