/// A book record as held by the store.
///
/// `author_id` references an [`Author`](super::Author) by id. The store
/// checks the reference when a book is added; reads still tolerate a
/// dangling value by resolving the author to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}
