//! Pure data structures for the catalog: [`Book`] and [`Member`], plus their DTOs.

pub mod book;
pub mod member;

pub use book::*;
pub use member::*;
