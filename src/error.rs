//! # Library Errors
//!
//! One error enum for the whole library. Every variant is a recoverable,
//! reported value: nothing in the reservation subsystem is fatal and nothing is
//! retried automatically.
//!
//! The first five variants are domain outcomes returned by the
//! [`CatalogStore`](crate::catalog::CatalogStore). The last two come from the
//! reservation plumbing (the queue and the worker reply slot).

use crate::model::{BookId, MemberId};
use thiserror::Error;

/// Errors that can occur during catalog, lending and reservation operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LibraryError {
    /// The referenced book is not in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// The referenced member is not registered.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// The book is currently lent out.
    #[error("Book already borrowed: {0}")]
    AlreadyBorrowed(BookId),

    /// The book already carries a reservation, possibly the requester's own.
    #[error("Book already reserved: {0}")]
    AlreadyReserved(BookId),

    /// A borrow was attempted on a book reserved by someone else.
    #[error("Book {book_id} is reserved by another member ({holder})")]
    ReservedByOther { book_id: BookId, holder: MemberId },

    /// The reservation queue no longer accepts requests.
    #[error("Reservation queue closed")]
    QueueClosed,

    /// A reservation worker dropped the reply slot without answering.
    #[error("Reservation worker dropped response channel")]
    WorkerDropped,
}
