//! The Shelf: an ordered, optionally bounded collection of books

use crate::config::ShelfConfig;
use crate::error::{ShelfError, ShelfResult};
use crate::types::{Book, BookStatus, Progress};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of books a shelf may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    /// At most this many books
    Bounded(usize),

    /// No limit
    #[default]
    Unbounded,
}

impl Capacity {
    /// Whether a shelf of this capacity can hold `size` books
    pub fn allows(&self, size: usize) -> bool {
        match self {
            Capacity::Bounded(limit) => size <= *limit,
            Capacity::Unbounded => true,
        }
    }

    /// The limit, if there is one
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(limit) => Some(*limit),
            Capacity::Unbounded => None,
        }
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Capacity::Unbounded, Capacity::Bounded)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(limit) => write!(f, "{}", limit),
            Capacity::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// An ordered collection of books with an optional capacity
///
/// Books keep the order they were added in and are never deduplicated.
/// The shelf is not synchronized; share it across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    capacity: Capacity,
    books: Vec<Book>,
}

impl Shelf {
    /// Create an empty shelf with no capacity limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shelf holding at most `capacity` books
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Capacity::Bounded(capacity),
            books: Vec::new(),
        }
    }

    /// Create an empty shelf from configuration
    pub fn from_config(config: &ShelfConfig) -> Self {
        Self {
            capacity: config.capacity.into(),
            books: Vec::new(),
        }
    }

    /// Append a batch of books, all or nothing
    ///
    /// The books are cloned onto the shelf in input order. If the batch does not
    /// fit, the shelf is left untouched and `CapacityExceeded` is returned. An
    /// empty batch always succeeds.
    pub fn add(&mut self, books: &[Book]) -> ShelfResult<()> {
        if books.is_empty() {
            return Ok(());
        }

        let fits = self
            .books
            .len()
            .checked_add(books.len())
            .is_some_and(|size| self.capacity.allows(size));

        if !fits {
            let capacity = self.capacity.limit().unwrap_or(usize::MAX);
            tracing::warn!(
                added = books.len(),
                size = self.books.len(),
                capacity,
                "Rejected batch that would exceed shelf capacity"
            );
            return Err(ShelfError::CapacityExceeded { capacity });
        }

        self.books.extend_from_slice(books);
        tracing::debug!(
            added = books.len(),
            size = self.books.len(),
            capacity = %self.capacity,
            "Added books to shelf"
        );
        Ok(())
    }

    /// The books on the shelf, in the order they were added
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// How many more books fit, or `None` if the shelf is unbounded
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.capacity
            .limit()
            .map(|limit| limit.saturating_sub(self.books.len()))
    }

    /// Whether no more books can be added
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == Some(0)
    }

    /// Percentage of books in each reading status
    pub fn progress(&self) -> Progress {
        Progress::from_statuses(self.books.iter().map(Book::status))
    }

    /// Books published within `[start, end]` or titled exactly `title`
    ///
    /// Results keep shelf order and each book appears at most once. A range with
    /// `start > end` matches no dates, so only the title can match.
    pub fn find_by_title_or_published_date_range(
        &self,
        title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&Book> {
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| {
                let date = book.published_date();
                (start <= date && date <= end) || book.title() == title
            })
            .collect();

        tracing::trace!(
            title,
            %start,
            %end,
            matches = found.len(),
            "Searched shelf"
        );
        found
    }

    /// Set the status of every book with this title and publication date
    ///
    /// Returns how many books were updated.
    pub fn set_status(
        &mut self,
        title: &str,
        published_date: NaiveDate,
        status: BookStatus,
    ) -> usize {
        let mut updated = 0;
        for book in self
            .books
            .iter_mut()
            .filter(|book| book.is(title, published_date))
        {
            book.set_status(status);
            updated += 1;
        }

        tracing::debug!(title, %published_date, %status, updated, "Updated book status");
        updated
    }
}
