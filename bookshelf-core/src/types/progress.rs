//! Reading progress across a collection

use super::BookStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage of books in each reading status
///
/// Every value is in `0..=100`. Each share is rounded half up on its own, so
/// the three values may sum to 99 or 101 for some counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub in_progress: u32,
    pub to_read: u32,
}

impl Progress {
    /// Build a progress report from the statuses of a collection
    pub fn from_statuses(statuses: impl IntoIterator<Item = BookStatus>) -> Self {
        let (mut completed, mut in_progress, mut to_read) = (0usize, 0usize, 0usize);
        for status in statuses {
            match status {
                BookStatus::Completed => completed += 1,
                BookStatus::InProgress => in_progress += 1,
                BookStatus::ToRead => to_read += 1,
            }
        }

        let total = completed + in_progress + to_read;
        Self {
            completed: percentage(completed, total),
            in_progress: percentage(in_progress, total),
            to_read: percentage(to_read, total),
        }
    }

    /// Sum of the three percentages
    pub fn total(&self) -> u32 {
        self.completed + self.in_progress + self.to_read
    }
}

/// `count / total` as a whole percentage, rounded half up; 0 when `total` is 0
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let count = count as u128;
    let total = total as u128;
    ((count * 100 + total / 2) / total) as u32
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "completed {}%, in progress {}%, to read {}%",
            self.completed, self.in_progress, self.to_read
        )
    }
}
