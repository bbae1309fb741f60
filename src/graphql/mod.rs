//! GraphQL schema, resolvers, and HTTP transport for the library.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { id name author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addAuthor(name: "Brandon Sanderson") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`
//!
//! `Author.books` and `Book.author` cross-reference each other, so the
//! schema graph is cyclic; the configured depth and complexity limits
//! bound what a single document can request.

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, build_schema};
pub use server::{listen_addr, make_app, run_server};
pub use types::*;
