//! Data models for the library.
//!
//! This module defines the two record types held by the store:
//!
//! - [`Author`]: a writer, referenced by zero or more books
//! - [`Book`]: a book written by exactly one author

mod author;
mod book;

pub use author::Author;
pub use book::Book;
