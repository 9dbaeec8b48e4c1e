use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::MemberId;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// Lending status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf. May still carry a reservation.
    #[default]
    Available,
    /// Lent out to a member.
    Borrowed,
}

/// Represents a book in the library catalog.
///
/// # Catalog Store
/// Books are owned by value inside the [`CatalogStore`](crate::catalog::CatalogStore).
/// Everything handed out by the store (listings, member snapshots) is a clone,
/// so callers never hold a reference into shared state.
///
/// See [`BookStatus`] for the lending states and [`Book::reserved_by`] for the
/// reservation holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    /// Member currently holding a reservation, if any.
    ///
    /// Only ever `Some` while `status` is [`BookStatus::Available`].
    pub reserved_by: Option<MemberId>,
}

impl Book {
    /// Creates a new, available and unreserved Book.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the catalog owner
    /// * `title` - Book title
    /// * `author` - Book author
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
            reserved_by: None,
        }
    }

    /// True when the book can be borrowed or reserved by anyone.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available && self.reserved_by.is_none()
    }

    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }
}

/// DTO for adding a book to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl BookCreate {
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
            author: author.into(),
        }
    }
}

impl From<BookCreate> for Book {
    fn from(params: BookCreate) -> Self {
        Book::new(params.id, params.title, params.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::from(BookCreate::new(7, "Dune", "Herbert"));
        assert_eq!(book.id, BookId(7));
        assert_eq!(book.status, BookStatus::Available);
        assert!(book.is_available());
        assert!(!book.is_borrowed());
    }

    #[test]
    fn test_reserved_book_is_not_available() {
        let mut book = Book::new(BookId(1), "Dune", "Herbert");
        book.reserved_by = Some(MemberId(201));
        assert!(!book.is_available());
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn test_book_id_display() {
        assert_eq!(BookId(10).to_string(), "book_10");
    }
}
