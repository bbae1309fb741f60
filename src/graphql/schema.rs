use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::config::LimitSettings;
use crate::store::Library;

use super::types::{Author, Book};

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over the given library.
pub fn build_schema(library: Arc<Library>, limits: &LimitSettings) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .limit_depth(limits.max_depth)
        .limit_complexity(limits.max_complexity)
        .finish()
}

fn library(ctx: &Context<'_>) -> Arc<Library> {
    ctx.data::<Arc<Library>>().unwrap().clone()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Option<Book> {
        library(ctx).book(id).map(Into::into)
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        library(ctx).books().into_iter().map(Into::into).collect()
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Option<Author> {
        library(ctx).author(id).map(Into::into)
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        library(ctx).authors().into_iter().map(Into::into).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = library(ctx).add_book(name, author_id)?;
        Ok(book.into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let author = library(ctx).add_author(name)?;
        Ok(author.into())
    }
}
