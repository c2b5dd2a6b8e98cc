//! The Book record

use super::BookStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single book in a collection
///
/// Two books with the same title and publication date are considered the same
/// book; author and status do not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    published_date: NaiveDate,
    #[serde(default)]
    status: BookStatus,
}

impl Book {
    /// Create a new book that has not been read yet
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_date,
            status: BookStatus::ToRead,
        }
    }

    /// Set the status, builder style
    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published_date(&self) -> NaiveDate {
        self.published_date
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    /// Move the book to a new reading status
    pub fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }

    /// Whether this book has the given title and publication date
    pub fn is(&self, title: &str, published_date: NaiveDate) -> bool {
        self.title == title && self.published_date == published_date
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.is(&other.title, other.published_date)
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.published_date.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_book_creation() {
        let book = Book::new("Clean Code", "Robert C. Martin", date(2019, 8, 1));
        assert_eq!(book.title(), "Clean Code");
        assert_eq!(book.author(), "Robert C. Martin");
        assert_eq!(book.published_date(), date(2019, 8, 1));
        assert_eq!(book.status(), BookStatus::ToRead);
    }

    #[test]
    fn test_set_status() {
        let mut book = Book::new("Clean Code", "Robert C. Martin", date(2019, 8, 1));
        book.set_status(BookStatus::InProgress);
        assert_eq!(book.status(), BookStatus::InProgress);
        book.set_status(BookStatus::Completed);
        assert!(book.status().is_complete());
    }

    #[test]
    fn test_equality_ignores_author_and_status() {
        let a = Book::new("Refactoring", "Martin Fowler", date(2018, 11, 20));
        let b = Book::new("Refactoring", "M. Fowler", date(2018, 11, 20))
            .with_status(BookStatus::Completed);
        let c = Book::new("Refactoring", "Martin Fowler", date(1999, 7, 8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Code Complete", "Steve McConnel", date(2019, 6, 9))
            .with_status(BookStatus::InProgress);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"published_date\":\"2019-06-09\""));
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, book);
        assert_eq!(deserialized.status(), BookStatus::InProgress);
    }

    #[test]
    fn test_missing_status_defaults_to_read() {
        let json = r#"{"title":"SICP","author":"Abelson","published_date":"1985-01-01"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.status(), BookStatus::ToRead);
    }
}
