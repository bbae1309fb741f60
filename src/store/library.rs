use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book};
use crate::validation;

use super::seed;

/// The in-memory record store.
///
/// All reads and appends go through one `RwLock`; no method holds the lock
/// across an await point, so resolvers may call these freely from any
/// request task.
pub struct Library {
    inner: RwLock<Records>,
}

struct Records {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

impl Library {
    /// An empty library. Identifier counters start at 1.
    pub fn empty() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// A library populated with the built-in sample records.
    pub fn seeded() -> Self {
        Self::with_records(seed::authors(), seed::books())
    }

    fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Records {
                authors,
                books,
                next_author_id,
                next_book_id,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.inner.read().unwrap()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.inner.write().unwrap()
    }

    /// Get a single author by id.
    pub fn author(&self, id: i32) -> Option<Author> {
        self.read().authors.iter().find(|a| a.id == id).cloned()
    }

    /// Get a single book by id.
    pub fn book(&self, id: i32) -> Option<Book> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// All authors in store order.
    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// All books in store order.
    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// All books written by the given author, in store order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn author_count(&self) -> usize {
        self.read().authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.read().books.len()
    }

    /// Append a new author with a fresh id.
    pub fn add_author(&self, name: impl Into<String>) -> Result<Author> {
        let name = name.into();
        validation::validate_name(&name)?;

        let mut records = self.write();
        let author = Author::new(records.next_author_id, name);
        records.next_author_id += 1;

        tracing::info!(id = author.id, name = %author.name, "Adding author");
        records.authors.push(author.clone());
        Ok(author)
    }

    /// Append a new book with a fresh id.
    ///
    /// The referenced author must exist; the check and the append happen
    /// under the same write lock, so the reference cannot go dangling
    /// between them.
    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Result<Book> {
        let name = name.into();
        validation::validate_name(&name)?;

        let mut records = self.write();
        if !records.authors.iter().any(|a| a.id == author_id) {
            return Err(BookshelfError::AuthorNotFound(author_id));
        }
        let book = Book::new(records.next_book_id, name, author_id);
        records.next_book_id += 1;

        tracing::info!(id = book.id, name = %book.name, author_id = book.author_id, "Adding book");
        records.books.push(book.clone());
        Ok(book)
    }
}
