//! # Bookshelf - a GraphQL demo API for a small library
//!
//! Bookshelf serves a queryable graph of two related record types, authors and
//! books, from a seeded in-memory store. It exists to demonstrate a GraphQL
//! server end to end: one HTTP endpoint, a browsable schema, and a CLI wrapper
//! around the same resolvers.
//!
//! ## Features
//!
//! - **Single endpoint**: `POST /graphql` executes documents, `GET /graphql`
//!   serves the GraphiQL explorer
//! - **Seeded store**: three authors and eight books available on every start
//! - **Append-only mutations**: `addBook` / `addAuthor` with validated
//!   references
//! - **Offline execution**: run queries and mutations from the CLI without a
//!   server
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port (5000)
//! bookshelf serve
//!
//! # Run a query without a server
//! bookshelf query '{ book(id: 4) { name author { name } } }'
//!
//! # Add a record
//! bookshelf mutate 'addAuthor(name: "Brandon Sanderson") { id name }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: command definitions and handlers
//! - [`config`]: settings from `bookshelf.toml`
//! - [`error`]: crate error type and result alias
//! - [`graphql`]: schema, resolvers, and HTTP transport
//! - [`model`]: the Author and Book records
//! - [`store`]: the seeded in-memory record store
//! - [`validation`]: name validation for incoming records

/// Command definitions and their handlers.
pub mod cli;

/// Settings loaded from `bookshelf.toml`.
///
/// Server bind/port and document limits, with built-in defaults.
pub mod config;

/// Crate error type and result alias.
pub mod error;

/// GraphQL schema, resolvers, and the axum HTTP transport.
pub mod graphql;

/// The Author and Book records.
pub mod model;

/// The in-memory record store.
///
/// Holds the author and book sequences behind one lock.
pub mod store;

/// Name validation for records entering the store.
pub mod validation;

pub mod logging;
