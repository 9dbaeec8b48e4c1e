//! # Catalog Store
//!
//! The single source of truth for book and member state, and the only
//! synchronization domain in the library.
//!
//! ## Architecture Note
//! The state itself lives in [`Catalog`], a plain struct whose methods are
//! synchronous read-check-write steps. [`CatalogStore`] wraps it in an
//! `Arc<Mutex<_>>` and takes the lock exactly once per operation, so every
//! check and its mutation happen inside one critical section. Workers, expiry
//! timers and lending calls all go through the same handle and compete for the
//! lock on equal footing.

use crate::error::LibraryError;
use crate::model::{Book, BookCreate, BookId, BookStatus, Member, MemberCreate, MemberId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Book and member records, owned by value.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<BookId, Book>,
    members: HashMap<MemberId, Member>,
}

impl Catalog {
    /// Inserts a book, replacing any record with the same id.
    /// Returns the replaced record.
    pub fn add_book(&mut self, params: BookCreate) -> Option<Book> {
        let book = Book::from(params);
        self.books.insert(book.id, book)
    }

    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        self.books.remove(&id)
    }

    /// Inserts a member with an empty borrowed list, replacing any record with the same id.
    pub fn register_member(&mut self, params: MemberCreate) -> Option<Member> {
        let member = Member::from(params);
        self.members.insert(member.id, member)
    }

    /// Inserts a member only when the id is unknown. Returns whether it inserted.
    pub fn register_member_if_absent(&mut self, params: MemberCreate) -> bool {
        let mut inserted = false;
        self.members.entry(params.id).or_insert_with(|| {
            inserted = true;
            Member::from(params)
        });
        inserted
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Books that are neither borrowed nor reserved, ordered by id.
    pub fn available_books(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self
            .books
            .values()
            .filter(|book| book.is_available())
            .cloned()
            .collect();
        books.sort_by_key(|book| book.id);
        books
    }

    /// Snapshots borrowed by `member_id`, empty when the member is unknown.
    pub fn borrowed_books(&self, member_id: MemberId) -> Vec<Book> {
        self.members
            .get(&member_id)
            .map(|member| member.borrowed.clone())
            .unwrap_or_default()
    }

    /// Lends `book_id` to `member_id`.
    ///
    /// Checks run in a fixed order: book exists, not borrowed, not reserved by
    /// someone else, member exists. On success the reservation (if it was the
    /// borrower's own) is consumed and a snapshot is appended to the member.
    pub fn borrow(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;
        if book.status == BookStatus::Borrowed {
            return Err(LibraryError::AlreadyBorrowed(book_id));
        }
        if let Some(holder) = book.reserved_by {
            if holder != member_id {
                return Err(LibraryError::ReservedByOther { book_id, holder });
            }
        }
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        book.status = BookStatus::Borrowed;
        book.reserved_by = None;
        member.borrowed.push(book.clone());
        Ok(())
    }

    /// Takes `book_id` back from `member_id`.
    ///
    /// Leaves `reserved_by` alone and only drops the first matching snapshot.
    pub fn return_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        book.status = BookStatus::Available;
        if let Some(pos) = member.borrowed.iter().position(|b| b.id == book_id) {
            member.borrowed.remove(pos);
        }
        Ok(())
    }

    /// Check-and-reserve step run by reservation workers.
    ///
    /// Reservations are not stackable: any existing holder, the requester
    /// included, makes the attempt fail with [`LibraryError::AlreadyReserved`].
    pub fn reserve(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;
        if book.status == BookStatus::Borrowed {
            return Err(LibraryError::AlreadyBorrowed(book_id));
        }
        if book.reserved_by.is_some() {
            return Err(LibraryError::AlreadyReserved(book_id));
        }
        book.reserved_by = Some(member_id);
        Ok(())
    }

    /// Clears the reservation only if `member_id` still holds it and the book
    /// was not borrowed in the meantime. Returns whether anything was cleared.
    pub fn expire_reservation(&mut self, book_id: BookId, member_id: MemberId) -> bool {
        match self.books.get_mut(&book_id) {
            Some(book) if book.reserved_by == Some(member_id) && !book.is_borrowed() => {
                book.reserved_by = None;
                true
            }
            _ => false,
        }
    }
}

/// Shared, lock-guarded handle to the [`Catalog`].
///
/// Cheap to clone: every clone points at the same catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<Mutex<Catalog>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_book(&self, params: BookCreate) -> BookId {
        let id = params.id;
        let mut catalog = self.inner.lock().await;
        if catalog.add_book(params).is_some() {
            warn!(book_id = %id, "Replaced existing book");
        }
        info!(book_id = %id, size = catalog.books.len(), "Book added");
        id
    }

    /// Removes a book regardless of its lending or reservation state.
    pub async fn remove_book(&self, id: BookId) -> bool {
        let mut catalog = self.inner.lock().await;
        let removed = catalog.remove_book(id).is_some();
        debug!(book_id = %id, removed, "Remove book");
        removed
    }

    pub async fn register_member(&self, params: MemberCreate) -> MemberId {
        let id = params.id;
        let mut catalog = self.inner.lock().await;
        if catalog.register_member(params).is_some() {
            warn!(member_id = %id, "Replaced existing member");
        }
        info!(member_id = %id, size = catalog.members.len(), "Member registered");
        id
    }

    /// Registers the member unless the id is already taken, under one lock.
    pub async fn register_member_if_absent(&self, params: MemberCreate) -> bool {
        let id = params.id;
        let mut catalog = self.inner.lock().await;
        let inserted = catalog.register_member_if_absent(params);
        if inserted {
            info!(member_id = %id, size = catalog.members.len(), "Member registered");
        } else {
            debug!(member_id = %id, "Member already registered");
        }
        inserted
    }

    pub async fn get_book(&self, id: BookId) -> Option<Book> {
        self.inner.lock().await.book(id).cloned()
    }

    pub async fn get_member(&self, id: MemberId) -> Option<Member> {
        self.inner.lock().await.member(id).cloned()
    }

    pub async fn list_available(&self) -> Vec<Book> {
        self.inner.lock().await.available_books()
    }

    pub async fn list_borrowed(&self, member_id: MemberId) -> Vec<Book> {
        self.inner.lock().await.borrowed_books(member_id)
    }

    pub async fn borrow_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        let result = self.inner.lock().await.borrow(book_id, member_id);
        match &result {
            Ok(()) => info!(%book_id, %member_id, "Borrowed"),
            Err(e) => warn!(%book_id, %member_id, error = %e, "Borrow failed"),
        }
        result
    }

    pub async fn return_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        let result = self.inner.lock().await.return_book(book_id, member_id);
        match &result {
            Ok(()) => info!(%book_id, %member_id, "Returned"),
            Err(e) => warn!(%book_id, %member_id, error = %e, "Return failed"),
        }
        result
    }

    /// Atomic check-and-reserve. Logging is left to the calling worker.
    pub async fn try_reserve(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        self.inner.lock().await.reserve(book_id, member_id)
    }

    /// Conditional revocation used by expiry timers.
    pub async fn expire_reservation(&self, book_id: BookId, member_id: MemberId) -> bool {
        self.inner.lock().await.expire_reservation(book_id, member_id)
    }
}
