//! Lock-guarded ownership of all book and member state.
//!
//! See [`CatalogStore`] for the shared handle and [`Catalog`] for the
//! read-check-write steps it runs under its lock.

pub mod store;

pub use store::*;
