//! Keyword search over static design-guidance CSV tables.
//!
//! Each domain (style, typography, color, ...) and each frontend stack has
//! its own CSV file under a data directory. A search re-reads the file,
//! keeps rows that contain at least one query term, ranks them by the number
//! of matching terms and projects the top rows onto a fixed set of fields.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use config::{DomainConfig, MAX_RESULTS};
pub use crate::core::{engine::SearchEngine, loader::DataLoader, scoring::bm25_score};
pub use domain::model::{entries_to_json, Entry, Row};
pub use domain::ports::TableSource;
pub use utils::error::{LoadFailure, Result, SearchError};
