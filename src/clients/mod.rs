//! The public face of the library: the [`LibraryManager`] trait and its
//! queue-backed implementation, [`LibraryClient`].

pub mod library_client;
pub mod library_manager;

pub use library_client::*;
pub use library_manager::*;
