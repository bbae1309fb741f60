//! In-memory record store.
//!
//! The [`Library`] holds the author and book sequences behind a single
//! read-write lock. Both sequences are append-only; identifiers come from
//! per-sequence counters advanced under the write lock, so concurrent
//! appends cannot hand out duplicates.
//!
//! The store is always injected (`Arc<Library>` in the GraphQL context),
//! never global, so tests can run against an empty or freshly seeded
//! instance.

mod library;
mod seed;

pub use library::Library;
