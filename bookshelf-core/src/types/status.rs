//! Reading status of a book

use serde::{Deserialize, Serialize};

/// Where a reader is with a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// Not started yet
    #[default]
    ToRead,

    /// Currently being read
    InProgress,

    /// Finished
    Completed,
}

impl BookStatus {
    /// Returns true if the book has been finished
    pub fn is_complete(&self) -> bool {
        matches!(self, BookStatus::Completed)
    }

    /// Returns true if the book is being read right now
    pub fn is_active(&self) -> bool {
        matches!(self, BookStatus::InProgress)
    }

    /// Returns all status values
    pub fn all() -> &'static [BookStatus] {
        &[
            BookStatus::ToRead,
            BookStatus::InProgress,
            BookStatus::Completed,
        ]
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::ToRead => write!(f, "to_read"),
            BookStatus::InProgress => write!(f, "in_progress"),
            BookStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to_read" | "to-read" | "toread" | "unread" => Ok(BookStatus::ToRead),
            "in_progress" | "in-progress" | "inprogress" | "reading" => {
                Ok(BookStatus::InProgress)
            }
            "completed" | "complete" | "done" | "read" => Ok(BookStatus::Completed),
            _ => Err(format!("Unknown book status: {}", s)),
        }
    }
}
