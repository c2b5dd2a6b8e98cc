//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Result type for shelf operations
pub type ShelfResult<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Shelf error: {0}")]
    Shelf(#[from] ShelfError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by shelf mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    /// The batch would push the shelf past its capacity; nothing was added
    #[error("BookShelf capacity of {capacity} is reached. You can't add more books.")]
    CapacityExceeded { capacity: usize },
}

/// Errors that occur while loading shelf configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
