pub mod engine;
pub mod loader;
pub mod projection;
pub mod scoring;

pub use crate::domain::model::{Entry, Row};
pub use crate::domain::ports::TableSource;
pub use crate::utils::error::Result;
