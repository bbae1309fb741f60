use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::store::Library;

/// This represents an author of a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        let library = ctx.data_unchecked::<Arc<Library>>();
        library
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author who wrote this book
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        let library = ctx.data_unchecked::<Arc<Library>>();
        library.author(self.author_id).map(Into::into)
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
