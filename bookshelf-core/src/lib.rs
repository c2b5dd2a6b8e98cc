//! Bookshelf Core Library
//!
//! This crate provides the types and query logic for a personal book collection.
//! Books are kept on a [`Shelf`] with an optional capacity, and the shelf answers
//! reading-progress and title/date-range search queries.

pub mod config;
pub mod error;
pub mod shelf;
pub mod types;

pub use config::ShelfConfig;
pub use error::{BookshelfError, ConfigError, Result, ShelfError, ShelfResult};
pub use shelf::{Capacity, Shelf};
pub use types::{Book, BookStatus, Progress};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_shelf_creation() {
        let mut shelf = Shelf::new();
        let date = NaiveDate::from_ymd_opt(2019, 5, 8).unwrap();
        shelf
            .add(&[Book::new("Effective Java", "Joshua Bloch", date)])
            .unwrap();
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf.books()[0].title(), "Effective Java");
    }
}
