//! Core types for the Bookshelf collection

mod book;
mod progress;
mod status;

pub use book::Book;
pub use progress::Progress;
pub use status::BookStatus;
